//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use adventure_quest::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::config::{GameConfig, WorldSettings};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Host contract
pub use crate::core::host::{Contact, HeadlessHost, Host, TextSlot};

// Input system
pub use crate::core::input::{GameAction, InputContext, InputEvent, InputState, KeyCode};

// Scene system
pub use crate::core::scene::{Payload, Scene, SceneGraph, SceneId, Trigger};

// Game model
pub use crate::game::controller::{LevelController, LevelOutcome, LevelState};
pub use crate::game::level::{LevelCatalog, LevelDefinition, LevelId, Successor, WinCondition};
pub use crate::game::session::GameplaySession;
