//=========================================================================
// Host Capabilities
//=========================================================================
//
// Contract between the gameplay core and the engine that actually draws,
// simulates and plays sound. The core only issues commands and reads
// back contact/support reports; it never owns bodies or pixels.
//
// Capabilities:
//   Hud           text fields + static images
//   SoundBoard    fire-and-forget cues
//   Animator      player animation clips
//   PhysicsWorld  bodies, relations, velocity commands, contact reports
//   Host          all of the above + preload / scene teardown
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use crate::config::WorldSettings;
use crate::game::assets::{AssetId, AssetRef, SoundCue};
use crate::game::entities::{CollectibleId, HazardId, PlayerAnimation, Tint, Vec2};
use crate::game::level::PlatformSpec;

//=== Module Declarations =================================================

mod headless;

//=== Public API ==========================================================

pub use headless::{HeadlessHost, HostCommand};

//=== TextSlot ============================================================

/// Named text fields the HUD maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Title,
    Subtitle,
    Prompt,
    Score,
    Lives,
}

//=== Relation ============================================================

/// Collision (solid) and overlap (sensor) pairs registered per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Player stands on platforms. Host-only concern.
    PlayerPlatform,
    CollectiblePlatform,
    HazardPlatform,
    TargetPlatform,

    /// Reported as [`Contact::Collectible`].
    PlayerCollectible,

    /// Reported as [`Contact::Hazard`].
    PlayerHazard,

    /// Reported as [`Contact::Target`].
    PlayerTarget,
}

//=== Contact =============================================================

/// Overlap reported by the host during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
    Collectible(CollectibleId),
    Hazard(HazardId),
    Target,
}

//=== Capability Traits ===================================================

/// Text and image output. Side-effect only.
pub trait Hud {
    fn set_text(&mut self, slot: TextSlot, text: String);
    fn draw_image(&mut self, asset: AssetId, at: Vec2);
}

/// Fire-and-forget sound effects.
pub trait SoundBoard {
    fn play(&mut self, cue: SoundCue);
}

/// Player sprite animation playback.
pub trait Animator {
    fn play_animation(&mut self, animation: PlayerAnimation);
}

/// Physics and collision detection owned by the host.
///
/// The core registers relations once per level and afterwards only
/// commands velocities/positions and reads back contacts.
pub trait PhysicsWorld {
    fn configure(&mut self, settings: WorldSettings);
    fn build_platforms(&mut self, platforms: &[PlatformSpec]);
    fn register(&mut self, relation: Relation);

    fn spawn_player(&mut self, at: Vec2);
    fn spawn_collectible(&mut self, id: CollectibleId, at: Vec2, bounce: f32);
    fn remove_collectible(&mut self, id: CollectibleId);
    fn spawn_target(&mut self, at: Vec2);
    fn spawn_hazard(&mut self, id: HazardId, at: Vec2);

    fn set_velocity_x(&mut self, vx: f32);
    fn set_velocity_y(&mut self, vy: f32);
    fn teleport(&mut self, to: Vec2);
    fn set_player_tint(&mut self, tint: Tint);
    fn set_paused(&mut self, paused: bool);

    /// Whether the player is resting on something this frame.
    fn player_supported(&self) -> bool;

    /// Where the host's integrator has the player this frame.
    fn player_position(&self) -> Vec2;

    /// Takes all overlaps detected since the last call.
    fn drain_contacts(&mut self) -> Vec<Contact>;

    /// Takes the positions the host's spawn group wants hazards at.
    fn drain_hazard_spawns(&mut self) -> Vec<Vec2>;
}

/// Full capability set the core runs against.
///
/// Must be `Send`: the engine moves it onto the logic thread.
pub trait Host: Hud + SoundBoard + Animator + PhysicsWorld + Send {
    /// Loads assets once, before the first scene starts.
    fn preload(&mut self, manifest: &[AssetRef]);

    /// Destroys every entity the previous scene created.
    fn clear_scene(&mut self);

    /// Downcasts to `&dyn Any` for inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcasts to `&mut dyn Any` for inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
