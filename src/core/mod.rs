//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all game subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own GlobalSystems (input, scenes) and GlobalContext (shared data)
// - Receive platform events over the crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication with the platform occurs only through message passing,
// and a single tick can be driven synchronously through `step`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod globals;
pub mod host;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Modules ====================================================

use globals::{GlobalContext, GlobalSystems};
use input::InputEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the game state and advances it one tick at a time.
pub(crate) struct CoreSystemsOrchestrator {
    systems: GlobalSystems,
    context: GlobalContext,
    started: bool,
    ticks: u64,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(systems: GlobalSystems, context: GlobalContext) -> Self {
        Self {
            systems,
            context,
            started: false,
            ticks: 0,
        }
    }

    /// Gives the caller mutable access to systems before the first tick.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems),
    {
        init_fn(&mut self.systems);
    }

    //--- Ticking ----------------------------------------------------------

    /// Runs one tick with the given input batches.
    ///
    /// The first call enters the initial scene before updating.
    pub(crate) fn step(&mut self, batches: Vec<Vec<InputEvent>>) {
        if !self.started {
            self.systems.start(&mut self.context);
            self.started = true;
        }

        self.context.frame_events = batches;
        self.systems.update(&mut self.context);
        self.ticks += 1;
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking at a fixed frequency.
    //
    // Each tick:
    //  1. Collects platform events
    //  2. Steps input and scenes
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when a shutdown signal is received
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", self.ticks);
                    break;
                }

                //--- Step 2: Update systems --------------------------------
                self.step(collector.take_batches());

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    debug!("Tick {} overran by {:?}", self.ticks, elapsed - frame_duration);
                }
            }
        })
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn systems(&self) -> &GlobalSystems {
        &self.systems
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut GlobalContext {
        &mut self.context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::host::{Contact, HeadlessHost, HostCommand, TextSlot};
    use crate::core::input::KeyCode;
    use crate::core::scene::{SceneGraph, SceneId};
    use crate::game::entities::CollectibleId;
    use crate::game::level::{LevelCatalog, LevelId};
    use crossbeam_channel::unbounded;

    fn orchestrator() -> CoreSystemsOrchestrator {
        let config = GameConfig::default();
        let catalog = LevelCatalog::standard(&config);
        let graph = SceneGraph::from_catalog(&catalog, config.starting_lives).expect("valid graph");
        let context = GlobalContext::new(Box::new(HeadlessHost::new()), config, catalog, Some(3));
        CoreSystemsOrchestrator::new(GlobalSystems::new(graph), context)
    }

    fn headless(core: &mut CoreSystemsOrchestrator) -> &mut HeadlessHost {
        core.context_mut()
            .host
            .as_any_mut()
            .downcast_mut::<HeadlessHost>()
            .expect("headless host")
    }

    #[test]
    fn first_step_enters_menu() {
        let mut core = orchestrator();
        core.step(vec![]);

        assert_eq!(core.systems().scene_manager.active_id(), Some(SceneId::Menu));
        assert_eq!(core.ticks(), 1);
    }

    #[test]
    fn space_starts_and_arrows_move() {
        let mut core = orchestrator();
        core.step(vec![]);

        core.step(vec![vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert_eq!(
            core.systems().scene_manager.active_id(),
            Some(SceneId::Level(LevelId::Level1))
        );

        // Space is still held but has no gameplay binding
        core.step(vec![vec![InputEvent::KeyDown(KeyCode::ArrowRight)]]);
        assert_eq!(core.context_mut().input.horizontal, input::Horizontal::Right);
    }

    #[test]
    fn direction_held_through_start_moves_immediately() {
        let mut core = orchestrator();
        core.step(vec![vec![
            InputEvent::KeyDown(KeyCode::ArrowRight),
            InputEvent::KeyDown(KeyCode::Space),
        ]]);
        assert_eq!(
            core.systems().scene_manager.active_id(),
            Some(SceneId::Level(LevelId::Level1))
        );
        headless(&mut core).take_commands();

        // No new KeyDown arrives; the platform only reports changes
        core.step(vec![]);

        assert_eq!(core.context_mut().input.horizontal, input::Horizontal::Right);
        let moved_right = headless(&mut core)
            .commands()
            .iter()
            .any(|command| matches!(command, HostCommand::SetVelocityX(vx) if *vx > 0.0));
        assert!(moved_right, "Player should walk right on the first level tick");
    }

    #[test]
    fn contacts_flow_through_to_hud() {
        let mut core = orchestrator();
        core.step(vec![vec![InputEvent::KeyDown(KeyCode::Enter)]]);

        headless(&mut core).push_contact(Contact::Collectible(CollectibleId(0)));
        core.step(vec![]);

        assert_eq!(headless(&mut core).text(TextSlot::Score), Some("Score: 10"));
    }

    #[test]
    fn init_can_rebind_keys() {
        let mut core = orchestrator();
        core.init_systems(|systems| {
            systems.input.clear_context(input::InputContext::Menu);
            systems
                .input
                .bind_key(KeyCode::KeyS, input::GameAction::Confirm, input::InputContext::Menu);
        });

        core.step(vec![vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert_eq!(core.systems().scene_manager.active_id(), Some(SceneId::Menu));

        core.step(vec![vec![InputEvent::KeyDown(KeyCode::KeyS)]]);
        assert_eq!(
            core.systems().scene_manager.active_id(),
            Some(SceneId::Level(LevelId::Level1))
        );
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (tx, rx) = unbounded();
        let handle = orchestrator().spawn_core_thread(rx, 240.0);

        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]))
            .unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }
}
