//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input: this tick's action snapshot
// - host: rendering/physics/audio backend
// - scene_transitions: command queue for scene changes
// - config, catalog, rng: game data shared by every level
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::host::Host;
use crate::core::input::{InputEvent, InputState};
use crate::core::scene::TransitionQueue;
use crate::game::level::LevelCatalog;

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` in their lifecycle methods. This
/// separates scene-accessible data from internal engine systems.
pub struct GlobalContext {
    /// Input snapshot for the current tick.
    ///
    /// Written by `InputSystem` before scenes update.
    pub input: InputState,

    /// Backend that draws, simulates and plays sound.
    pub host: Box<dyn Host>,

    /// Transition queue for scene changes.
    ///
    /// Scenes queue requests here during updates. The scene manager
    /// processes this queue at tick boundaries.
    pub scene_transitions: TransitionQueue,

    pub config: GameConfig,
    pub catalog: LevelCatalog,

    /// Source for cosmetic randomness (collectible bounce).
    pub rng: StdRng,

    /// Input events for the current frame.
    ///
    /// Populated from the platform channel and consumed by InputSystem
    /// during the update phase.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates a context around `host`.
    ///
    /// A `seed` makes collectible bounce reproducible; `None` seeds from
    /// the OS.
    pub fn new(
        host: Box<dyn Host>,
        config: GameConfig,
        catalog: LevelCatalog,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            input: InputState::default(),
            host,
            scene_transitions: TransitionQueue::new(),
            config,
            catalog,
            rng,
            frame_events: Vec::new(),
        }
    }
}
