//=========================================================================
// Scenes
//=========================================================================
//
// Concrete scenes of the game.
//
//   MenuScene      title screen, Confirm → Start
//   LevelScene     wraps a LevelController for one level
//   EndScene       final score, Confirm → Restart
//   GameOverScene  Confirm → Restart
//
// Instances are built by `instantiate` from the transition payload and
// dropped on exit.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, warn};

//=== Internal Dependencies ===============================================

use super::{Payload, Scene, SceneId, TransitionRequest, Trigger};
use crate::config::WorldSettings;
use crate::core::globals::GlobalContext;
use crate::core::host::{Contact, Host, TextSlot};
use crate::core::input::{InputContext, InputState};
use crate::game::assets;
use crate::game::controller::{LevelController, LevelOutcome};
use crate::game::entities::Vec2;
use crate::game::level::LevelId;
use crate::game::session::GameplaySession;

//=== Instantiation =======================================================

/// Builds a fresh scene for `id` from the payload its transition carried.
///
/// # Panics
///
/// Panics if a level is entered without a session payload.
pub fn instantiate(id: SceneId, payload: Payload) -> Box<dyn Scene> {
    match (id, payload) {
        (SceneId::Menu, _) => Box::new(MenuScene::new()),
        (SceneId::Level(level), Payload::Session(session)) => Box::new(LevelScene::new(level, session)),
        (SceneId::Level(level), other) => {
            panic!("Level {:?} entered without a session (payload: {:?})", level, other)
        }
        (SceneId::End, Payload::FinalScore(score)) => Box::new(EndScene::new(score)),
        (SceneId::End, other) => {
            warn!(target: "scene", "End entered without a final score (payload: {:?})", other);
            Box::new(EndScene::new(0))
        }
        (SceneId::GameOver, _) => Box::new(GameOverScene::new()),
    }
}

//=== ConfirmLatch ========================================================

/// Accepts the first Confirm press and ignores every later one.
#[derive(Debug, Default)]
struct ConfirmLatch {
    fired: bool,
}

impl ConfirmLatch {
    fn fire(&mut self, input: &InputState) -> bool {
        if self.fired || !input.confirm_pressed {
            return false;
        }
        self.fired = true;
        true
    }
}

fn draw_backdrop(host: &mut dyn Host, world: WorldSettings) {
    host.draw_image(assets::SKY, Vec2::new(world.width / 2.0, world.height / 2.0));
}

//=== MenuScene ===========================================================

/// Title screen.
#[derive(Debug, Default)]
pub struct MenuScene {
    confirm: ConfirmLatch,
}

impl MenuScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for MenuScene {
    fn id(&self) -> SceneId {
        SceneId::Menu
    }

    fn on_enter(&mut self, context: &mut GlobalContext) {
        draw_backdrop(context.host.as_mut(), context.config.world);
        context.host.set_text(TextSlot::Title, "Adventure Quest".to_string());
        context.host.set_text(TextSlot::Prompt, "Press SPACE to start".to_string());
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if self.confirm.fire(&context.input) {
            debug!(target: "scene", "Menu confirmed");
            context.scene_transitions.push(TransitionRequest::new(Trigger::Start));
        }
    }
}

//=== LevelScene ==========================================================

/// Runs one level until it is won or lost.
///
/// The controller is created on enter, once the host has been cleared
/// of the previous scene.
pub struct LevelScene {
    level: LevelId,
    session: GameplaySession,
    controller: Option<LevelController>,
    finished: bool,
}

impl LevelScene {
    pub fn new(level: LevelId, session: GameplaySession) -> Self {
        Self {
            level,
            session,
            controller: None,
            finished: false,
        }
    }

    pub fn controller(&self) -> Option<&LevelController> {
        self.controller.as_ref()
    }

    /// Turns a terminal outcome into a transition request.
    ///
    /// Returns `true` once the level has finished.
    fn resolve(
        controller: &LevelController,
        outcome: LevelOutcome,
        context: &mut GlobalContext,
    ) -> bool {
        let request = match outcome {
            LevelOutcome::Continue => return false,
            LevelOutcome::Won(_) => TransitionRequest::with_session(
                Trigger::from(controller.definition().win),
                controller.session(),
            ),
            LevelOutcome::Lost => TransitionRequest::new(Trigger::LivesExhausted),
        };
        context.scene_transitions.push(request);
        true
    }
}

impl Scene for LevelScene {
    fn id(&self) -> SceneId {
        SceneId::Level(self.level)
    }

    fn input_context(&self) -> InputContext {
        InputContext::Gameplay
    }

    fn on_enter(&mut self, context: &mut GlobalContext) {
        let Some(definition) = context.catalog.get(self.level).cloned() else {
            // The scene graph only routes to catalog levels.
            error!(target: "scene", "Level {:?} missing from catalog", self.level);
            panic!("Level {:?} missing from catalog", self.level);
        };

        self.controller = Some(LevelController::enter(
            self.session,
            definition,
            &context.config,
            context.host.as_mut(),
            &mut context.rng,
        ));
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if self.finished {
            return;
        }
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        controller.sync_player_position(context.host.player_position());

        for position in context.host.drain_hazard_spawns() {
            controller.spawn_hazard(position, context.host.as_mut());
        }

        for contact in context.host.drain_contacts() {
            let outcome = match contact {
                Contact::Collectible(id) => controller.on_collect(id, context.host.as_mut()),
                Contact::Hazard(id) => controller.on_hazard(id, context.host.as_mut()),
                Contact::Target => controller.on_target_overlap(context.host.as_mut()),
            };

            if Self::resolve(controller, outcome, context) {
                self.finished = true;
                return;
            }
        }

        let supported = context.host.player_supported();
        controller.tick(&context.input, supported, context.host.as_mut());
    }

    fn on_exit(&mut self, _context: &mut GlobalContext) {
        if let Some(controller) = &self.controller {
            debug!(
                target: "scene",
                "Leaving {:?} in state {:?}",
                self.level,
                controller.state()
            );
        }
    }
}

//=== EndScene ============================================================

/// Victory screen showing the final score.
#[derive(Debug)]
pub struct EndScene {
    score: u32,
    confirm: ConfirmLatch,
}

impl EndScene {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            confirm: ConfirmLatch::default(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Scene for EndScene {
    fn id(&self) -> SceneId {
        SceneId::End
    }

    fn on_enter(&mut self, context: &mut GlobalContext) {
        draw_backdrop(context.host.as_mut(), context.config.world);
        context.host.set_text(TextSlot::Title, "You saved your friend!".to_string());
        context.host.set_text(TextSlot::Subtitle, format!("Your score: {}", self.score));
        context.host.set_text(TextSlot::Prompt, "Press SPACE to play again".to_string());
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if self.confirm.fire(&context.input) {
            context.scene_transitions.push(TransitionRequest::new(Trigger::Restart));
        }
    }
}

//=== GameOverScene =======================================================

#[derive(Debug, Default)]
pub struct GameOverScene {
    confirm: ConfirmLatch,
}

impl GameOverScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for GameOverScene {
    fn id(&self) -> SceneId {
        SceneId::GameOver
    }

    fn on_enter(&mut self, context: &mut GlobalContext) {
        draw_backdrop(context.host.as_mut(), context.config.world);
        context.host.set_text(TextSlot::Title, "Game Over".to_string());
        context.host.set_text(TextSlot::Prompt, "Press SPACE to try again".to_string());
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if self.confirm.fire(&context.input) {
            context.scene_transitions.push(TransitionRequest::new(Trigger::Restart));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
