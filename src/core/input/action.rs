//=========================================================================
// Game Actions & Input Context
//=========================================================================
//
// Actions: what the player means (move, jump, confirm), independent of
// which key produced it.
// Contexts: which binding set is live. Levels use `Gameplay`, the menu
// and the end screens use `Menu`.
//
// `InputState` is the per-tick snapshot scenes consume.
//
//=========================================================================

//=== GameAction ==========================================================

/// High-level commands the scenes understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Jump,

    /// Start / restart on the menu and end screens.
    Confirm,
}

//=== InputContext ========================================================

/// Identifies which set of bindings is currently active.
///
/// The same key may be bound in both contexts; only bindings of the
/// active context resolve to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    #[default]
    Menu,
    Gameplay,
}

//=== Horizontal ==========================================================

/// Mutually exclusive horizontal intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    Left,
    Right,
    #[default]
    Idle,
}

//=== InputState ==========================================================

/// Discrete control state for a single tick.
///
/// - `horizontal`, `jump`: level-sensitive (true while held).
/// - `confirm_pressed`: edge-triggered (true only on the press tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub horizontal: Horizontal,
    pub jump: bool,
    pub confirm_pressed: bool,
}

impl InputState {
    /// Builds a snapshot from held actions and actions pressed this tick.
    ///
    /// Left takes priority when both directions are held.
    pub fn from_actions(
        is_held: impl Fn(GameAction) -> bool,
        is_pressed: impl Fn(GameAction) -> bool,
    ) -> Self {
        let horizontal = if is_held(GameAction::MoveLeft) {
            Horizontal::Left
        } else if is_held(GameAction::MoveRight) {
            Horizontal::Right
        } else {
            Horizontal::Idle
        };

        Self {
            horizontal,
            jump: is_held(GameAction::Jump),
            confirm_pressed: is_pressed(GameAction::Confirm),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = InputState::default();
        assert_eq!(state.horizontal, Horizontal::Idle);
        assert!(!state.jump);
        assert!(!state.confirm_pressed);
    }

    #[test]
    fn left_wins_over_right() {
        let state = InputState::from_actions(
            |action| matches!(action, GameAction::MoveLeft | GameAction::MoveRight),
            |_| false,
        );
        assert_eq!(state.horizontal, Horizontal::Left);
    }

    #[test]
    fn confirm_comes_from_pressed_not_held() {
        let state = InputState::from_actions(|action| action == GameAction::Confirm, |_| false);
        assert!(!state.confirm_pressed);

        let state = InputState::from_actions(|_| false, |action| action == GameAction::Confirm);
        assert!(state.confirm_pressed);
    }

    #[test]
    fn input_context_default_is_menu() {
        assert_eq!(InputContext::default(), InputContext::Menu);
    }
}
