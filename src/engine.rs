//=========================================================================
// Engine
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_config()              blocks until exit
//         ├─ with_catalog()
//         ├─ with_host()
//         └─ with_seed()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::globals::{GlobalContext, GlobalSystems};
use crate::core::host::{HeadlessHost, Host};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::scene::{SceneGraph, SceneGraphError};
use crate::core::CoreSystemsOrchestrator;
use crate::game::level::LevelCatalog;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Config**: [`GameConfig::default`]
/// - **Catalog**: the four standard levels
/// - **Host**: [`HeadlessHost`]
/// - **Seed**: none (OS entropy)
///
/// # Examples
///
/// ```no_run
/// use adventure_quest::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_seed(7)
///     .build()
///     .expect("valid level catalog")
///     .run()
///     .expect("platform runs");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    catalog: Option<LevelCatalog>,
    host: Option<Box<dyn Host>>,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            catalog: None,
            host: None,
            seed: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the gameplay tunables.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the level chain. Validated in [`build`](Self::build).
    pub fn with_catalog(mut self, catalog: LevelCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Plugs in the backend that renders, simulates and plays sound.
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = Some(host);
        self
    }

    /// Makes collectible bounce reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the engine instance.
    ///
    /// # Errors
    ///
    /// Returns [`SceneGraphError`] if the level catalog does not form a
    /// valid chain.
    pub fn build(self) -> Result<Engine, SceneGraphError> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let catalog = self
            .catalog
            .unwrap_or_else(|| LevelCatalog::standard(&self.config));
        let graph = SceneGraph::from_catalog(&catalog, self.config.starting_lives)?;

        let window = WindowSettings {
            title: self.config.window_title.clone(),
            width: f64::from(self.config.world.width),
            height: f64::from(self.config.world.height),
        };

        let host = self
            .host
            .unwrap_or_else(|| Box::new(HeadlessHost::new()) as Box<dyn Host>);
        let context = GlobalContext::new(host, self.config, catalog, self.seed);
        let systems = GlobalSystems::new(graph);

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(systems, context),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager → Host
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Keyboard Polling
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Gives mutable access to [`GlobalSystems`] before the engine runs,
    /// e.g. to rebind keys.
    ///
    /// ```no_run
    /// # use adventure_quest::EngineBuilder;
    /// # use adventure_quest::core::input::{GameAction, InputContext, KeyCode};
    /// EngineBuilder::new()
    ///     .build()
    ///     .expect("valid level catalog")
    ///     .init(|systems| {
    ///         systems.input.bind_key(KeyCode::KeyS, GameAction::Confirm, InputContext::Menu);
    ///     })
    ///     .run()
    ///     .expect("platform runs");
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for platform → core communication
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → `WindowClosed` → logic thread terminates
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails. The logic thread is still joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
