//=========================================================================
// Level Entities
//=========================================================================
//
// Entities owned by a single level instance. They are created on level
// entry and dropped with the controller on level exit.
//
// Only the gameplay-relevant part of each entity lives here. Bodies,
// sprites and animation playback belong to the host engine.
//
//=========================================================================

//=== Vec2 ================================================================

/// 2D vector in world pixels (top-left origin, +y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Identifiers =========================================================

/// Index of a collectible within its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectibleId(pub usize);

/// Identifier handed out by the hazard group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HazardId(pub u32);

//=== Player ==============================================================

/// Animation clip the host should play for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnimation {
    Left,
    Turn,
    Right,
}

/// Sprite tint. Only set to `Red` on terminal loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tint {
    #[default]
    None,
    Red,
}

/// Commanded player state.
///
/// `velocity` is what the controller last asked the host for; `position`
/// is the spawn point after a respawn, or the last position reported by
/// the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub animation: PlayerAnimation,
    pub tint: Tint,
}

impl Player {
    pub fn at(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            animation: PlayerAnimation::Turn,
            tint: Tint::None,
        }
    }

    /// Puts the player back at `spawn` at rest.
    pub fn respawn(&mut self, spawn: Vec2) {
        self.position = spawn;
        self.velocity = Vec2::ZERO;
    }
}

//=== Collectible =========================================================

/// A star (or, in the last level, the friend NPC) the player can touch.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub id: CollectibleId,
    pub position: Vec2,

    /// Vertical bounce factor. Cosmetic only.
    pub bounce: f32,

    collected: bool,
}

impl Collectible {
    pub fn new(id: CollectibleId, position: Vec2, bounce: f32) -> Self {
        Self {
            id,
            position,
            bounce,
            collected: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.collected
    }

    /// Marks the collectible as taken. Returns `false` if it already was.
    pub fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

//=== Hazard ==============================================================

/// A host-spawned entity that costs a life on contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub id: HazardId,
    pub position: Vec2,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collectible_take_is_one_shot() {
        let mut star = Collectible::new(CollectibleId(0), Vec2::new(12.0, 0.0), 0.5);
        assert!(star.is_active());
        assert!(star.take());
        assert!(!star.is_active());
        assert!(!star.take(), "Second take must report nothing changed");
    }

    #[test]
    fn respawn_resets_velocity() {
        let mut player = Player::at(Vec2::new(100.0, 450.0));
        player.position = Vec2::new(300.0, 120.0);
        player.velocity = Vec2::new(-160.0, -330.0);

        player.respawn(Vec2::new(100.0, 450.0));

        assert_eq!(player.position, Vec2::new(100.0, 450.0));
        assert_eq!(player.velocity, Vec2::ZERO);
    }

    #[test]
    fn new_player_is_idle_and_untinted() {
        let player = Player::at(Vec2::ZERO);
        assert_eq!(player.animation, PlayerAnimation::Turn);
        assert_eq!(player.tint, Tint::None);
    }
}
