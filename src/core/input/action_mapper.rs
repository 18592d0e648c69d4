//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps keys to game actions based on configured bindings and context.
//
// Architecture:
//   (key, context) → HashMap → GameAction
//
// Only bindings in the active context resolve to actions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::{
    action::{GameAction, InputContext},
    event::KeyCode,
    state_tracker::StateTracker,
};

//=== ActionMapper ========================================================

/// Resolves keys to actions via `(key, context)` lookups.
pub(crate) struct ActionMapper {
    bindings: HashMap<(KeyCode, InputContext), GameAction>,
    current_context: InputContext,
}

impl ActionMapper {
    /// Creates a mapper with the `Menu` context active and no bindings.
    pub(crate) fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            current_context: InputContext::default(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that
    /// key in `context`.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: GameAction, context: InputContext) {
        self.bindings.insert((key, context), action);
    }

    pub(crate) fn unbind_key(&mut self, key: KeyCode, context: InputContext) {
        self.bindings.remove(&(key, context));
    }

    /// Clears all bindings for a context.
    pub(crate) fn clear_context(&mut self, context: InputContext) {
        self.bindings.retain(|&(_, ctx), _| ctx != context);
    }

    //--- Context ----------------------------------------------------------

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a key in the active context.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<GameAction> {
        self.bindings.get(&(key, self.current_context)).copied()
    }

    /// Actions whose keys are currently held.
    pub(crate) fn held_actions(&self, state: &StateTracker) -> HashSet<GameAction> {
        state.keys_down().filter_map(|key| self.map_key(key)).collect()
    }

    /// Actions whose keys went down this frame.
    pub(crate) fn pressed_actions(&self, state: &StateTracker) -> HashSet<GameAction> {
        state.keys_pressed().filter_map(|key| self.map_key(key)).collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Basic Binding Tests
    //=====================================================================

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowUp, GameAction::Jump, InputContext::Gameplay);
        mapper.set_context(InputContext::Gameplay);

        assert_eq!(mapper.map_key(KeyCode::ArrowUp), Some(GameAction::Jump));
    }

    #[test]
    fn map_returns_none_if_no_binding() {
        let mapper = ActionMapper::new();
        assert_eq!(mapper.map_key(KeyCode::Space), None);
    }

    #[test]
    fn unbind_removes_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, GameAction::Confirm, InputContext::Menu);
        mapper.unbind_key(KeyCode::Space, InputContext::Menu);
        assert_eq!(mapper.map_key(KeyCode::Space), None);
    }

    //=====================================================================
    // Context Tests
    //=====================================================================

    #[test]
    fn same_key_different_contexts() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, GameAction::Jump, InputContext::Gameplay);
        mapper.bind_key(KeyCode::Space, GameAction::Confirm, InputContext::Menu);

        mapper.set_context(InputContext::Menu);
        assert_eq!(mapper.map_key(KeyCode::Space), Some(GameAction::Confirm));

        mapper.set_context(InputContext::Gameplay);
        assert_eq!(mapper.map_key(KeyCode::Space), Some(GameAction::Jump));
    }

    #[test]
    fn inactive_context_bindings_do_not_resolve() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, GameAction::MoveLeft, InputContext::Gameplay);

        assert_eq!(mapper.current_context(), InputContext::Menu);
        assert_eq!(mapper.map_key(KeyCode::ArrowLeft), None);
    }

    #[test]
    fn clear_context_keeps_other_contexts() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, GameAction::MoveLeft, InputContext::Gameplay);
        mapper.bind_key(KeyCode::Enter, GameAction::Confirm, InputContext::Menu);

        mapper.clear_context(InputContext::Gameplay);

        mapper.set_context(InputContext::Gameplay);
        assert_eq!(mapper.map_key(KeyCode::ArrowLeft), None);
        mapper.set_context(InputContext::Menu);
        assert_eq!(mapper.map_key(KeyCode::Enter), Some(GameAction::Confirm));
    }
}
