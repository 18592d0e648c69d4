//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns the active scene and applies queued transitions at tick
// boundaries.
//
// Unlike a registry of long-lived scenes, every transition drops the
// current instance and builds the next one from the transition payload,
// so no level state survives a scene change.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{instantiate, Payload, Scene, SceneGraph, SceneId, Transition};
use crate::core::globals::GlobalContext;
use crate::core::input::InputContext;
use crate::game::assets::MANIFEST;

//=== SceneManager ========================================================

/// Drives the single active scene along the [`SceneGraph`].
pub struct SceneManager {
    graph: SceneGraph,
    active: Option<Box<dyn Scene>>,
    history: Vec<Transition>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    pub fn new(graph: SceneGraph) -> Self {
        Self {
            graph,
            active: None,
            history: Vec::new(),
        }
    }

    /// Preloads assets and enters the initial scene.
    ///
    /// Calling `start` again is a no-op.
    pub fn start(&mut self, context: &mut GlobalContext) {
        if self.active.is_some() {
            warn!(target: "scene", "Scene manager already started");
            return;
        }

        context.host.preload(MANIFEST);

        let initial = self.graph.initial();
        debug!(target: "scene", "Starting with {:?}", initial);
        self.enter(initial, Payload::None, context);
    }

    //--- Queries ----------------------------------------------------------

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(|scene| scene.id())
    }

    /// Binding set the active scene asks for.
    pub fn input_context(&self) -> InputContext {
        self.active
            .as_ref()
            .map(|scene| scene.input_context())
            .unwrap_or_default()
    }

    /// Transitions applied so far, oldest first.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    //--- Update Loop ------------------------------------------------------

    pub fn update(&mut self, context: &mut GlobalContext) {
        if let Some(scene) = self.active.as_mut() {
            scene.update(context);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies the first queued request; later ones are dropped.
    ///
    /// Call at the tick boundary after scene updates.
    ///
    /// # Panics
    ///
    /// Panics if the request names an edge the graph does not have.
    pub fn process_transitions(&mut self, context: &mut GlobalContext) {
        let mut requests = context.scene_transitions.take().into_iter();

        let Some(request) = requests.next() else {
            return;
        };

        for dropped in requests {
            warn!(target: "scene", "Dropping extra transition request {:?}", dropped);
        }

        let Some(from) = self.active_id() else {
            warn!(target: "scene", "Transition {:?} requested with no active scene", request);
            return;
        };

        let transition = self.graph.transition(from, request.trigger, request.session);
        info!(
            target: "scene",
            "{:?} --{:?}--> {:?}",
            transition.from,
            transition.trigger,
            transition.to
        );

        if let Some(mut previous) = self.active.take() {
            previous.on_exit(context);
        }
        context.host.clear_scene();

        self.history.push(transition);
        self.enter(transition.to, transition.payload, context);
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter(&mut self, id: SceneId, payload: Payload, context: &mut GlobalContext) {
        let mut scene = instantiate(id, payload);
        scene.on_enter(context);
        self.active = Some(scene);
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
    use crate::core::input::InputState;
    use crate::core::scene::{TransitionRequest, Trigger};
    use crate::game::entities::{CollectibleId, HazardId, Vec2};
    use crate::game::level::{LevelCatalog, LevelId};
    use crate::game::session::GameplaySession;

    //--- Test Helpers -----------------------------------------------------

    fn setup() -> (SceneManager, GlobalContext) {
        let config = GameConfig::default();
        let catalog = LevelCatalog::standard(&config);
        let graph = SceneGraph::from_catalog(&catalog, config.starting_lives).expect("valid graph");
        let mut context =
            GlobalContext::new(Box::new(HeadlessHost::new()), config, catalog, Some(42));

        let mut manager = SceneManager::new(graph);
        manager.start(&mut context);
        (manager, context)
    }

    fn headless(context: &mut GlobalContext) -> &mut HeadlessHost {
        context
            .host
            .as_any_mut()
            .downcast_mut::<HeadlessHost>()
            .expect("headless host")
    }

    /// One tick with the given input snapshot.
    fn tick(manager: &mut SceneManager, context: &mut GlobalContext, input: InputState) {
        context.input = input;
        manager.update(context);
        manager.process_transitions(context);
    }

    fn confirm() -> InputState {
        InputState {
            confirm_pressed: true,
            ..InputState::default()
        }
    }

    fn collect_all_stars(manager: &mut SceneManager, context: &mut GlobalContext) {
        let host = headless(context);
        for index in 0..11 {
            host.push_contact(Contact::Collectible(CollectibleId(index)));
        }
        tick(manager, context, InputState::default());
    }

    fn hit_hazard(manager: &mut SceneManager, context: &mut GlobalContext) {
        headless(context).request_hazard(Vec2::new(400.0, 16.0));
        tick(manager, context, InputState::default());
        headless(context).push_contact(Contact::Hazard(HazardId(0)));
        tick(manager, context, InputState::default());
    }

    //--- Start ------------------------------------------------------------

    #[test]
    fn start_preloads_and_shows_menu() {
        let (manager, mut context) = setup();

        assert_eq!(manager.active_id(), Some(SceneId::Menu));
        assert_eq!(manager.input_context(), InputContext::Menu);

        let host = headless(&mut context);
        assert_eq!(host.commands().first(), Some(&HostCommand::Preload(MANIFEST.len())));
        assert_eq!(host.text(TextSlot::Title), Some("Adventure Quest"));
    }

    #[test]
    fn start_twice_is_ignored() {
        let (mut manager, mut context) = setup();
        manager.start(&mut context);

        let preloads = headless(&mut context)
            .commands()
            .iter()
            .filter(|command| matches!(command, HostCommand::Preload(_)))
            .count();
        assert_eq!(preloads, 1);
    }

    //--- Scenarios ----------------------------------------------------------

    #[test]
    fn full_playthrough_reaches_end_with_score() {
        let (mut manager, mut context) = setup();

        tick(&mut manager, &mut context, confirm());
        assert_eq!(manager.active_id(), Some(SceneId::Level(LevelId::Level1)));
        assert_eq!(manager.input_context(), InputContext::Gameplay);

        for next in [LevelId::Level2, LevelId::Level3, LevelId::Level4] {
            collect_all_stars(&mut manager, &mut context);
            assert_eq!(manager.active_id(), Some(SceneId::Level(next)));
        }

        headless(&mut context).push_contact(Contact::Target);
        tick(&mut manager, &mut context, InputState::default());

        assert_eq!(manager.active_id(), Some(SceneId::End));
        assert_eq!(
            headless(&mut context).text(TextSlot::Subtitle),
            Some("Your score: 330")
        );
        assert_eq!(
            manager.history().last().map(|t| t.payload),
            Some(Payload::FinalScore(330))
        );
    }

    #[test]
    fn session_carries_between_levels() {
        let (mut manager, mut context) = setup();
        tick(&mut manager, &mut context, confirm());

        // Lose one life, then clear the level
        headless(&mut context).request_hazard(Vec2::new(400.0, 16.0));
        tick(&mut manager, &mut context, InputState::default());
        headless(&mut context).push_contact(Contact::Hazard(HazardId(0)));
        tick(&mut manager, &mut context, InputState::default());
        collect_all_stars(&mut manager, &mut context);

        assert_eq!(manager.active_id(), Some(SceneId::Level(LevelId::Level2)));
        assert_eq!(
            manager.history().last().map(|t| t.payload),
            Some(Payload::Session(GameplaySession::new(2, 110)))
        );
        assert_eq!(headless(&mut context).text(TextSlot::Lives), Some("Lives: 2"));
        assert_eq!(headless(&mut context).text(TextSlot::Score), Some("Score: 110"));
    }

    #[test]
    fn three_hits_end_in_game_over_then_menu() {
        let (mut manager, mut context) = setup();
        tick(&mut manager, &mut context, confirm());

        for _ in 0..3 {
            // Each hit uses the next hazard id
            let id = HazardId(
                headless(&mut context)
                    .commands()
                    .iter()
                    .filter(|command| matches!(command, HostCommand::SpawnHazard(..)))
                    .count() as u32,
            );
            headless(&mut context).request_hazard(Vec2::new(400.0, 16.0));
            tick(&mut manager, &mut context, InputState::default());
            headless(&mut context).push_contact(Contact::Hazard(id));
            tick(&mut manager, &mut context, InputState::default());
        }

        assert_eq!(manager.active_id(), Some(SceneId::GameOver));
        assert_eq!(headless(&mut context).text(TextSlot::Title), Some("Game Over"));

        tick(&mut manager, &mut context, confirm());
        assert_eq!(manager.active_id(), Some(SceneId::Menu));

        // A fresh run starts with full lives and zero score
        tick(&mut manager, &mut context, confirm());
        assert_eq!(
            manager.history().last().map(|t| t.payload),
            Some(Payload::Session(GameplaySession::new(3, 0)))
        );
    }

    #[test]
    fn single_hit_on_last_life_loses() {
        let config = GameConfig::default().with_starting_lives(1);
        let catalog = LevelCatalog::standard(&config);
        let graph = SceneGraph::from_catalog(&catalog, 1).expect("valid graph");
        let mut context =
            GlobalContext::new(Box::new(HeadlessHost::new()), config, catalog, Some(1));
        let mut manager = SceneManager::new(graph);
        manager.start(&mut context);

        tick(&mut manager, &mut context, confirm());
        hit_hazard(&mut manager, &mut context);

        assert_eq!(manager.active_id(), Some(SceneId::GameOver));
    }

    #[test]
    fn transition_clears_host_between_scenes() {
        let (mut manager, mut context) = setup();
        headless(&mut context).take_commands();

        tick(&mut manager, &mut context, confirm());

        let commands = headless(&mut context).take_commands();
        assert_eq!(commands.first(), Some(&HostCommand::ClearScene));
        assert_eq!(headless(&mut context).text(TextSlot::Title), None);
    }

    #[test]
    fn only_first_request_per_tick_is_applied() {
        let (mut manager, mut context) = setup();

        context.scene_transitions.push(TransitionRequest::new(Trigger::Start));
        context.scene_transitions.push(TransitionRequest::new(Trigger::Restart));
        manager.process_transitions(&mut context);

        assert_eq!(manager.active_id(), Some(SceneId::Level(LevelId::Level1)));
        assert_eq!(manager.history().len(), 1);
        assert!(context.scene_transitions.is_empty());
    }

    #[test]
    #[should_panic(expected = "Malformed transition")]
    fn undefined_edge_panics() {
        let (mut manager, mut context) = setup();
        context.scene_transitions.push(TransitionRequest::new(Trigger::LivesExhausted));
        manager.process_transitions(&mut context);
    }

    #[test]
    fn end_restarts_to_menu() {
        let (mut manager, mut context) = setup();
        tick(&mut manager, &mut context, confirm());
        for _ in 0..3 {
            collect_all_stars(&mut manager, &mut context);
        }
        headless(&mut context).push_contact(Contact::Target);
        tick(&mut manager, &mut context, InputState::default());
        assert_eq!(manager.active_id(), Some(SceneId::End));

        tick(&mut manager, &mut context, confirm());
        assert_eq!(manager.active_id(), Some(SceneId::Menu));
    }
}
