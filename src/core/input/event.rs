//=========================================================================
// Input Event Types
//
// Platform-independent keyboard events.
//
// The platform layer (Winit) converts OS key events into these types;
// the input system folds them into held/pressed state each tick.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held / pressed this frame)
//         ↓
//    GameAction → InputState (per-frame snapshot for scenes)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Covers the keys the game binds (arrows, WASD, Space, Enter) plus a
/// few commonly pressed ones so they are not reported as unidentified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Letters ----------------------------------------------------------
    KeyA,
    KeyD,
    KeyS,
    KeyW,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,

    /// Any key the engine does not name.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Discrete keyboard event for one key.
///
/// OS key auto-repeat produces repeated `KeyDown` events; the state
/// tracker ignores a `KeyDown` for a key already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::KeyDown(key) | Self::KeyUp(key) => key,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_same_type_same_key() {
        assert_eq!(
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyDown(KeyCode::Space)
        );
    }

    #[test]
    fn equality_different_type() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyUp(KeyCode::Space),
            "KeyDown and KeyUp of the same key must differ"
        );
    }

    #[test]
    fn key_accessor_covers_both_variants() {
        assert_eq!(InputEvent::KeyDown(KeyCode::ArrowUp).key(), KeyCode::ArrowUp);
        assert_eq!(InputEvent::KeyUp(KeyCode::KeyA).key(), KeyCode::KeyA);
    }

    #[test]
    fn hashset_distinct_event_types() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        set.insert(InputEvent::KeyUp(KeyCode::KeyA));
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        assert_eq!(set.len(), 2);
    }
}
