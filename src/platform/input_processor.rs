//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful key tracking: remembers which keys are down so OS auto-repeat
// is dropped and focus loss can release everything still held. Keys the
// game has no use for are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode};

//=== InputProcessor ======================================================

/// Converts Winit keyboard events to InputEvents.
pub(crate) struct InputProcessor {
    held: HashSet<KeyCode>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { held: HashSet::new() }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters unmapped keys and auto-repeat).
    pub(crate) fn process_key_event(&mut self, key_event: &KeyEvent) -> Option<InputEvent> {
        match key_event.physical_key {
            PhysicalKey::Code(code) => self.process_key(KeyCode::from(code), key_event.state),
            _ => None,
        }
    }

    /// Releases every key still held, e.g. when the window loses focus.
    pub(crate) fn release_all(&mut self) -> Vec<InputEvent> {
        let mut released: Vec<KeyCode> = self.held.drain().collect();
        released.sort_by_key(|key| *key as u8);
        released.into_iter().map(InputEvent::KeyUp).collect()
    }

    #[cfg(test)]
    pub(crate) fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(&mut self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        match state {
            // A press for a key already down is OS auto-repeat
            ElementState::Pressed => self.held.insert(key).then_some(InputEvent::KeyDown(key)),
            ElementState::Released => {
                self.held.remove(&key);
                Some(InputEvent::KeyUp(key))
            }
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps the keys the game binds. Everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyD => KeyCode::KeyD,
            KeyS => KeyCode::KeyS,
            KeyW => KeyCode::KeyW,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
