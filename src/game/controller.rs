//=========================================================================
// Level Controller
//=========================================================================
//
// The shared gameplay loop every level runs, parameterized by a
// `LevelDefinition`.
//
// State machine (per level instance):
//
//   Running ──all collected / target reached──> Won   (terminal)
//      │
//      └──────────lives reach 0──────────────> Lost  (terminal)
//
// Each terminal state is reported exactly once as a `LevelOutcome`; the
// owning scene turns it into a scene-graph transition. After that every
// operation is a no-op.
//
// Host interaction:
//   enter()      builds the world and registers relations
//   on_collect() / on_hazard() / on_target_overlap()  ← host contacts
//   tick()       input → velocity commands, once per frame
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::assets::{self, SoundCue};
use super::entities::{Collectible, CollectibleId, Hazard, HazardId, Player, PlayerAnimation, Tint, Vec2};
use super::level::{LevelDefinition, LevelId, Successor, WinCondition};
use super::session::GameplaySession;
use crate::config::GameConfig;
use crate::core::host::{Host, Relation, TextSlot};
use crate::core::input::{Horizontal, InputState};

//=== LevelState ==========================================================

/// Lifecycle of one level instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    Running,
    Won,
    Lost,
}

impl LevelState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

//=== LevelOutcome ========================================================

/// Result of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Nothing terminal happened.
    Continue,

    /// The level was just won; leads to `Successor`.
    Won(Successor),

    /// The last life was just lost.
    Lost,
}

//=== LevelController =====================================================

/// Runs one level from entry to its win/loss outcome.
pub struct LevelController {
    definition: LevelDefinition,
    session: GameplaySession,
    state: LevelState,

    player: Player,
    collectibles: Vec<Collectible>,
    hazards: Vec<Hazard>,
    next_hazard_id: u32,

    spawn_point: Vec2,
    run_speed: f32,
    jump_speed: f32,
    points_per_collectible: u32,
}

impl LevelController {
    //--- Construction -----------------------------------------------------

    /// Enters a level: spawns the player, the collectible set and an empty
    /// hazard group, and registers the collision/overlap relations.
    ///
    /// Collectible bounce is drawn uniformly from the configured bounce
    /// range. The target NPC of an overlap level does not bounce.
    pub fn enter<R: Rng>(
        session: GameplaySession,
        definition: LevelDefinition,
        config: &GameConfig,
        host: &mut dyn Host,
        rng: &mut R,
    ) -> Self {
        info!(
            target: "level",
            "Entering {:?} (lives: {}, score: {})",
            definition.id,
            session.lives(),
            session.score()
        );

        host.configure(config.world);
        host.draw_image(assets::SKY, Vec2::new(config.world.width / 2.0, config.world.height / 2.0));
        host.build_platforms(&definition.platforms);

        let player = Player::at(config.spawn_point);
        host.spawn_player(player.position);
        host.register(Relation::PlayerPlatform);

        let collectibles = match definition.win {
            WinCondition::AllCollected { count } => {
                let stars: Vec<Collectible> = (0..count)
                    .map(|index| {
                        let bounce = rng.gen_range(config.bounce_min..=config.bounce_max);
                        Collectible::new(CollectibleId(index), config.collectible_position(index), bounce)
                    })
                    .collect();
                for star in &stars {
                    host.spawn_collectible(star.id, star.position, star.bounce);
                }
                host.register(Relation::CollectiblePlatform);
                host.register(Relation::PlayerCollectible);
                stars
            }
            WinCondition::OverlapWithTarget { position } => {
                host.spawn_target(position);
                host.register(Relation::TargetPlatform);
                host.register(Relation::PlayerTarget);
                vec![Collectible::new(CollectibleId(0), position, 0.0)]
            }
        };

        host.register(Relation::HazardPlatform);
        host.register(Relation::PlayerHazard);

        let controller = Self {
            definition,
            session,
            state: LevelState::Running,
            player,
            collectibles,
            hazards: Vec::new(),
            next_hazard_id: 0,
            spawn_point: config.spawn_point,
            run_speed: config.run_speed,
            jump_speed: config.jump_speed,
            points_per_collectible: config.points_per_collectible,
        };

        controller.show_score(host);
        controller.show_lives(host);
        controller
    }

    //--- Contact Handlers -------------------------------------------------

    /// Player overlapped a collectible.
    ///
    /// Already-collected items never re-trigger, even if the host reports
    /// the overlap again in the same frame.
    pub fn on_collect(&mut self, id: CollectibleId, host: &mut dyn Host) -> LevelOutcome {
        if self.state.is_terminal() {
            return LevelOutcome::Continue;
        }

        if !matches!(self.definition.win, WinCondition::AllCollected { .. }) {
            warn!(target: "level", "Collect contact in {:?} has no counted set, ignored", self.definition.id);
            return LevelOutcome::Continue;
        }

        let Some(star) = self.collectibles.iter_mut().find(|star| star.id == id) else {
            warn!(target: "level", "Unknown collectible {:?} in {:?}", id, self.definition.id);
            return LevelOutcome::Continue;
        };

        if !star.take() {
            return LevelOutcome::Continue;
        }

        host.remove_collectible(id);
        host.play(SoundCue::Pickup);
        self.session.collect(self.points_per_collectible);
        self.show_score(host);

        let remaining = self.active_collectibles();
        debug!(target: "level", "Collected {:?}, {} left, score {}", id, remaining, self.session.score());

        if remaining == 0 {
            self.win()
        } else {
            LevelOutcome::Continue
        }
    }

    /// Player overlapped the level's target NPC.
    pub fn on_target_overlap(&mut self, host: &mut dyn Host) -> LevelOutcome {
        if self.state.is_terminal() {
            return LevelOutcome::Continue;
        }

        if !matches!(self.definition.win, WinCondition::OverlapWithTarget { .. }) {
            warn!(target: "level", "{:?} has no target, overlap ignored", self.definition.id);
            return LevelOutcome::Continue;
        }

        for target in &mut self.collectibles {
            target.take();
        }

        host.play(SoundCue::Win);
        self.win()
    }

    /// Player touched a hazard: lose a life, then respawn or lose.
    pub fn on_hazard(&mut self, id: HazardId, host: &mut dyn Host) -> LevelOutcome {
        if self.state.is_terminal() {
            return LevelOutcome::Continue;
        }

        if !self.hazards.iter().any(|hazard| hazard.id == id) {
            warn!(target: "level", "Unknown hazard {:?} in {:?}, ignored", id, self.definition.id);
            return LevelOutcome::Continue;
        }

        let lives = self.session.lose_life();
        self.show_lives(host);
        host.play(SoundCue::Death);

        if lives == 0 {
            self.state = LevelState::Lost;
            host.set_paused(true);
            self.player.tint = Tint::Red;
            host.set_player_tint(Tint::Red);
            info!(target: "level", "{:?} lost (score: {})", self.definition.id, self.session.score());
            return LevelOutcome::Lost;
        }

        debug!(target: "level", "Hit by {:?}, {} lives left, respawning", id, lives);
        self.player.respawn(self.spawn_point);
        host.teleport(self.spawn_point);
        host.set_velocity_x(0.0);
        host.set_velocity_y(0.0);

        LevelOutcome::Continue
    }

    //--- Frame Update -----------------------------------------------------

    /// Maps this frame's input to player velocity.
    ///
    /// `supported` is the host's "standing on something" report. A jump
    /// while airborne is dropped, not queued.
    pub fn tick(&mut self, input: &InputState, supported: bool, host: &mut dyn Host) {
        if self.state.is_terminal() {
            return;
        }

        let (vx, animation) = match input.horizontal {
            Horizontal::Left => (-self.run_speed, PlayerAnimation::Left),
            Horizontal::Right => (self.run_speed, PlayerAnimation::Right),
            Horizontal::Idle => (0.0, PlayerAnimation::Turn),
        };

        self.player.velocity.x = vx;
        self.player.animation = animation;
        host.set_velocity_x(vx);
        host.play_animation(animation);

        if input.jump && supported {
            self.player.velocity.y = -self.jump_speed;
            host.set_velocity_y(-self.jump_speed);
        }
    }

    /// Adds a hazard on behalf of the host's spawn group.
    pub fn spawn_hazard(&mut self, position: Vec2, host: &mut dyn Host) -> HazardId {
        let id = HazardId(self.next_hazard_id);
        self.next_hazard_id += 1;

        self.hazards.push(Hazard { id, position });
        host.spawn_hazard(id, position);
        debug!(target: "level", "Spawned hazard {:?} at {:?}", id, position);
        id
    }

    /// Records the player position integrated by the host.
    pub fn sync_player_position(&mut self, position: Vec2) {
        self.player.position = position;
    }

    //--- Queries ----------------------------------------------------------

    pub fn level(&self) -> LevelId {
        self.definition.id
    }

    pub fn definition(&self) -> &LevelDefinition {
        &self.definition
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    pub fn session(&self) -> GameplaySession {
        self.session
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn active_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|star| star.is_active()).count()
    }

    //--- Internal Helpers -------------------------------------------------

    fn win(&mut self) -> LevelOutcome {
        self.state = LevelState::Won;
        info!(
            target: "level",
            "{:?} won (lives: {}, score: {})",
            self.definition.id,
            self.session.lives(),
            self.session.score()
        );
        LevelOutcome::Won(self.definition.next)
    }

    fn show_score(&self, host: &mut dyn Host) {
        host.set_text(TextSlot::Score, format!("Score: {}", self.session.score()));
    }

    fn show_lives(&self, host: &mut dyn Host) {
        host.set_text(TextSlot::Lives, format!("Lives: {}", self.session.lives()));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
