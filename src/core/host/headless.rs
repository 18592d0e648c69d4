//=========================================================================
// Headless Host
//=========================================================================
//
// Window-less host that records every command it receives.
//
// Used by tests to assert on HUD text, sounds and physics commands, and
// by the binary as the stand-in backend: it logs commands and lets glue
// code feed contacts / support state in from outside.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Animator, Contact, Host, Hud, PhysicsWorld, Relation, SoundBoard, TextSlot};
use crate::config::WorldSettings;
use crate::game::assets::{AssetId, AssetRef, SoundCue};
use crate::game::entities::{CollectibleId, HazardId, PlayerAnimation, Tint, Vec2};
use crate::game::level::PlatformSpec;

//=== HostCommand =========================================================

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Preload(usize),
    ClearScene,
    SetText(TextSlot, String),
    DrawImage(AssetId, Vec2),
    Play(SoundCue),
    Animate(PlayerAnimation),
    Configure(WorldSettings),
    BuildPlatforms(Vec<PlatformSpec>),
    Register(Relation),
    SpawnPlayer(Vec2),
    SpawnCollectible(CollectibleId, Vec2, f32),
    RemoveCollectible(CollectibleId),
    SpawnTarget(Vec2),
    SpawnHazard(HazardId, Vec2),
    SetVelocityX(f32),
    SetVelocityY(f32),
    Teleport(Vec2),
    SetTint(Tint),
    SetPaused(bool),
}

//=== HeadlessHost ========================================================

/// Recording host without window, audio or physics.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    commands: Vec<HostCommand>,
    texts: HashMap<TextSlot, String>,
    contacts: VecDeque<Contact>,
    hazard_spawns: Vec<Vec2>,
    supported: bool,
    player_position: Vec2,
    paused: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Feeding (external glue / tests) ----------------------------------

    /// Queues a contact to be reported on the next `drain_contacts`.
    pub fn push_contact(&mut self, contact: Contact) {
        self.contacts.push_back(contact);
    }

    /// Queues a hazard for the running level to spawn.
    pub fn request_hazard(&mut self, at: Vec2) {
        self.hazard_spawns.push(at);
    }

    /// Sets what `player_supported` reports.
    pub fn set_supported(&mut self, supported: bool) {
        self.supported = supported;
    }

    /// Moves the player as an external integrator would.
    pub fn set_player_position(&mut self, at: Vec2) {
        self.player_position = at;
    }

    //--- Inspection -------------------------------------------------------

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current content of a text slot.
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    /// Every sound cue played so far, in order.
    pub fn sounds(&self) -> Vec<SoundCue> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                HostCommand::Play(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn record(&mut self, command: HostCommand) {
        trace!(target: "host", "{:?}", command);
        self.commands.push(command);
    }
}

//=== Capability Implementations ==========================================

impl Hud for HeadlessHost {
    fn set_text(&mut self, slot: TextSlot, text: String) {
        debug!(target: "host", "{:?}: {}", slot, text);
        self.texts.insert(slot, text.clone());
        self.record(HostCommand::SetText(slot, text));
    }

    fn draw_image(&mut self, asset: AssetId, at: Vec2) {
        self.record(HostCommand::DrawImage(asset, at));
    }
}

impl SoundBoard for HeadlessHost {
    fn play(&mut self, cue: SoundCue) {
        debug!(target: "host", "Sound: {}", cue.asset().0);
        self.record(HostCommand::Play(cue));
    }
}

impl Animator for HeadlessHost {
    fn play_animation(&mut self, animation: PlayerAnimation) {
        // Re-issuing the running clip is a no-op for real animators
        if self.commands.last() != Some(&HostCommand::Animate(animation)) {
            self.record(HostCommand::Animate(animation));
        }
    }
}

impl PhysicsWorld for HeadlessHost {
    fn configure(&mut self, settings: WorldSettings) {
        self.record(HostCommand::Configure(settings));
    }

    fn build_platforms(&mut self, platforms: &[PlatformSpec]) {
        self.record(HostCommand::BuildPlatforms(platforms.to_vec()));
    }

    fn register(&mut self, relation: Relation) {
        self.record(HostCommand::Register(relation));
    }

    fn spawn_player(&mut self, at: Vec2) {
        self.player_position = at;
        self.record(HostCommand::SpawnPlayer(at));
    }

    fn spawn_collectible(&mut self, id: CollectibleId, at: Vec2, bounce: f32) {
        self.record(HostCommand::SpawnCollectible(id, at, bounce));
    }

    fn remove_collectible(&mut self, id: CollectibleId) {
        self.record(HostCommand::RemoveCollectible(id));
    }

    fn spawn_target(&mut self, at: Vec2) {
        self.record(HostCommand::SpawnTarget(at));
    }

    fn spawn_hazard(&mut self, id: HazardId, at: Vec2) {
        self.record(HostCommand::SpawnHazard(id, at));
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.record(HostCommand::SetVelocityX(vx));
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.record(HostCommand::SetVelocityY(vy));
    }

    fn teleport(&mut self, to: Vec2) {
        self.player_position = to;
        self.record(HostCommand::Teleport(to));
    }

    fn set_player_tint(&mut self, tint: Tint) {
        self.record(HostCommand::SetTint(tint));
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.record(HostCommand::SetPaused(paused));
    }

    fn player_supported(&self) -> bool {
        self.supported
    }

    fn player_position(&self) -> Vec2 {
        self.player_position
    }

    fn drain_contacts(&mut self) -> Vec<Contact> {
        self.contacts.drain(..).collect()
    }

    fn drain_hazard_spawns(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.hazard_spawns)
    }
}

impl Host for HeadlessHost {
    fn preload(&mut self, manifest: &[AssetRef]) {
        debug!(target: "host", "Preloading {} assets", manifest.len());
        self.record(HostCommand::Preload(manifest.len()));
    }

    fn clear_scene(&mut self) {
        self.texts.clear();
        self.contacts.clear();
        self.hazard_spawns.clear();
        self.supported = false;
        self.player_position = Vec2::default();
        self.paused = false;
        self.record(HostCommand::ClearScene);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
