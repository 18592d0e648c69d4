//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::InputSystem;
use crate::core::scene::{SceneGraph, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: key bindings and per-tick input snapshot
/// - `scene_manager`: active scene and transition processing
pub struct GlobalSystems {
    /// Key bindings per input context. Rebind through
    /// [`crate::Engine::init`].
    pub input: InputSystem,

    pub scene_manager: SceneManager,
}

impl GlobalSystems {
    /// Creates systems with the default bindings over `graph`.
    pub(crate) fn new(graph: SceneGraph) -> Self {
        Self {
            input: InputSystem::with_default_bindings(),
            scene_manager: SceneManager::new(graph),
        }
    }

    /// Enters the initial scene. Called once before the first update.
    pub(crate) fn start(&mut self, context: &mut GlobalContext) {
        self.scene_manager.start(context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Context**: Switch bindings to what the active scene expects
    /// 2. **Input Processing**: Fold frame events into the input snapshot
    /// 3. **Scene Update**: Update the active scene
    /// 4. **Transition Processing**: Apply at most one queued transition
    pub(crate) fn update(&mut self, context: &mut GlobalContext) {
        // 1. Bindings follow the active scene
        self.input.set_context(self.scene_manager.input_context());

        // 2. Process input events into the snapshot
        context.input = self.input.process_frame(&context.frame_events);
        context.frame_events.clear();

        // 3. Update the active scene
        self.scene_manager.update(context);

        // 4. Process scene transitions
        self.scene_manager.process_transitions(context);
    }
}
