//=========================================================================
// Input System
//
// Turns the frame's raw keyboard events into the `InputState` snapshot
// scenes read.
//
// Responsibilities:
// - Fold batches of `InputEvent`s into held/pressed key state
// - Resolve keys to `GameAction`s through the active `InputContext`
// - Produce one `InputState` per tick
//
// Notes:
// Owned by `GlobalSystems` and updated on the logic thread. Scenes never
// see raw keys; they only see the snapshot.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{GameAction, Horizontal, InputContext, InputState};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== External Crates =====================================================

use log::debug;

//=== InputSystem =========================================================

/// Key bindings plus key state; produces an [`InputState`] per tick.
pub struct InputSystem {
    state: StateTracker,
    mapper: ActionMapper,
    last_snapshot: InputState,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with no bindings.
    pub fn new() -> Self {
        Self {
            state: StateTracker::new(),
            mapper: ActionMapper::new(),
            last_snapshot: InputState::default(),
        }
    }

    /// Creates an input system with the game's standard bindings:
    ///
    /// - Gameplay: ←/A left, →/D right, ↑/W jump
    /// - Menu: Space/Enter confirm
    pub fn with_default_bindings() -> Self {
        let mut system = Self::new();

        system.bind_key(KeyCode::ArrowLeft, GameAction::MoveLeft, InputContext::Gameplay);
        system.bind_key(KeyCode::KeyA, GameAction::MoveLeft, InputContext::Gameplay);
        system.bind_key(KeyCode::ArrowRight, GameAction::MoveRight, InputContext::Gameplay);
        system.bind_key(KeyCode::KeyD, GameAction::MoveRight, InputContext::Gameplay);
        system.bind_key(KeyCode::ArrowUp, GameAction::Jump, InputContext::Gameplay);
        system.bind_key(KeyCode::KeyW, GameAction::Jump, InputContext::Gameplay);

        system.bind_key(KeyCode::Space, GameAction::Confirm, InputContext::Menu);
        system.bind_key(KeyCode::Enter, GameAction::Confirm, InputContext::Menu);

        system
    }

    //--- Bindings ---------------------------------------------------------

    pub fn bind_key(&mut self, key: KeyCode, action: GameAction, context: InputContext) {
        self.mapper.bind_key(key, action, context);
    }

    pub fn unbind_key(&mut self, key: KeyCode, context: InputContext) {
        self.mapper.unbind_key(key, context);
    }

    pub fn clear_context(&mut self, context: InputContext) {
        self.mapper.clear_context(context);
    }

    /// Switches the active binding set.
    ///
    /// Held keys survive the switch: the platform never re-sends a key
    /// that is still down, and bindings are looked up per context anyway.
    /// Only the per-frame deltas are dropped.
    pub fn set_context(&mut self, context: InputContext) {
        if self.mapper.current_context() != context {
            debug!("Input context {:?} -> {:?}", self.mapper.current_context(), context);
            self.mapper.set_context(context);
            self.state.clear();
        }
    }

    pub fn context(&self) -> InputContext {
        self.mapper.current_context()
    }

    //--- Frame Processing -------------------------------------------------

    /// Consumes this tick's event batches and returns the new snapshot.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> InputState {
        self.state.clear();
        for batch in batches {
            self.state.process_events(batch);
        }

        let held = self.mapper.held_actions(&self.state);
        let pressed = self.mapper.pressed_actions(&self.state);
        let snapshot = InputState::from_actions(
            |action| held.contains(&action),
            |action| pressed.contains(&action),
        );

        if snapshot != self.last_snapshot {
            debug!("Input updated: {:?}", snapshot);
            self.last_snapshot = snapshot;
        }

        snapshot
    }

    /// Raw key state, for diagnostics.
    pub fn state(&self) -> &StateTracker {
        &self.state
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
