//=========================================================================
// Scene System
//=========================================================================
//
// Runs exactly one scene at a time and moves between scenes along the
// scene graph.
//
// Architecture:
//   SceneManager
//     ├─ graph: SceneGraph          (static edge table)
//     └─ active: Box<dyn Scene>     (rebuilt on every transition)
//
// Flow:
//   update() → Scene::update() → TransitionQueue
//   process_transitions() → SceneGraph → on_exit / clear_scene / on_enter
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::InputContext;

//=== Module Declarations =================================================

mod graph;
mod scene_manager;
mod scenes;
mod transition_queue;

//=== Public API ==========================================================

pub use graph::{Payload, SceneGraph, SceneGraphError, SceneId, Transition, Trigger};
pub use scene_manager::SceneManager;
pub use scenes::{instantiate, EndScene, GameOverScene, LevelScene, MenuScene};
pub use transition_queue::{TransitionQueue, TransitionRequest};

//=== Scene Trait =========================================================

/// Scene behavior with lifecycle hooks and update logic.
///
/// A scene instance lives from one transition to the next; whatever it
/// holds is dropped on exit. Data that must survive travels as the
/// [`Payload`] of the next transition.
///
/// Only `id()` and `update()` are required.
pub trait Scene: Send {
    /// Graph node this scene represents.
    fn id(&self) -> SceneId;

    /// Binding set the input system uses while this scene is active.
    fn input_context(&self) -> InputContext {
        InputContext::Menu
    }

    /// Called once after the previous scene has been torn down.
    fn on_enter(&mut self, _context: &mut GlobalContext) {}

    /// Called once before the host clears the scene's entities.
    fn on_exit(&mut self, _context: &mut GlobalContext) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, context: &mut GlobalContext);
}
