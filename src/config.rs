//=========================================================================
// Game Configuration
//=========================================================================
//
// Gameplay tunables shared by the level controller, the scene graph and
// the host. Built with the same fluent `with_*` style as `EngineBuilder`;
// invalid values panic at configuration time.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::game::entities::Vec2;

//=== WorldSettings =======================================================

/// Physics world parameters handed to the host once per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
    pub gravity_y: f32,

    /// Player bounce against platforms.
    pub player_bounce: f32,
}

//=== GameConfig ==========================================================

/// Gameplay tunables.
///
/// # Default Values
///
/// - **Lives**: 3, **points per collectible**: 10
/// - **Spawn point**: (100, 450)
/// - **Run / jump speed**: 160 / 330 px/s
/// - **Collectibles**: 11, starting at (12, 0), 70 px apart
/// - **Collectible bounce**: uniformly drawn from [0.4, 0.8]
/// - **Friend position**: (750, 100)
/// - **World**: 800×600, gravity 300
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub starting_lives: u32,
    pub points_per_collectible: u32,
    pub spawn_point: Vec2,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub collectible_count: usize,
    pub collectible_origin: Vec2,
    pub collectible_step_x: f32,
    pub bounce_min: f32,
    pub bounce_max: f32,
    pub target_position: Vec2,
    pub world: WorldSettings,
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            points_per_collectible: 10,
            spawn_point: Vec2::new(100.0, 450.0),
            run_speed: 160.0,
            jump_speed: 330.0,
            collectible_count: 11,
            collectible_origin: Vec2::new(12.0, 0.0),
            collectible_step_x: 70.0,
            bounce_min: 0.4,
            bounce_max: 0.8,
            target_position: Vec2::new(750.0, 100.0),
            world: WorldSettings {
                width: 800.0,
                height: 600.0,
                gravity_y: 300.0,
                player_bounce: 0.2,
            },
            window_title: String::from("Adventure Quest"),
        }
    }
}

impl GameConfig {
    /// Sets the lives a fresh session starts with.
    ///
    /// # Panics
    ///
    /// Panics if `lives == 0`.
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        assert!(lives > 0, "Starting lives must be positive");
        self.starting_lives = lives;
        self
    }

    /// Sets the score awarded per collectible.
    pub fn with_points_per_collectible(mut self, points: u32) -> Self {
        self.points_per_collectible = points;
        self
    }

    /// Sets how many collectibles each counted level spawns.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0`.
    pub fn with_collectible_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Collectible count must be positive");
        self.collectible_count = count;
        self
    }

    /// Sets the range the cosmetic collectible bounce is drawn from.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is outside [0, 1].
    pub fn with_bounce_range(mut self, min: f32, max: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max) && min <= max,
            "Bounce range must satisfy 0 <= min <= max <= 1, got [{}, {}]",
            min,
            max
        );
        self.bounce_min = min;
        self.bounce_max = max;
        self
    }

    /// Sets horizontal run speed and jump launch speed (px/s).
    ///
    /// # Panics
    ///
    /// Panics if either speed is not positive.
    pub fn with_speeds(mut self, run_speed: f32, jump_speed: f32) -> Self {
        assert!(
            run_speed > 0.0 && jump_speed > 0.0,
            "Speeds must be positive, got run {} / jump {}",
            run_speed,
            jump_speed
        );
        self.run_speed = run_speed;
        self.jump_speed = jump_speed;
        self
    }

    pub fn with_spawn_point(mut self, spawn: Vec2) -> Self {
        self.spawn_point = spawn;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Position of the `index`-th collectible in a counted level.
    pub fn collectible_position(&self, index: usize) -> Vec2 {
        Vec2::new(
            self.collectible_origin.x + self.collectible_step_x * index as f32,
            self.collectible_origin.y,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_game() {
        let config = GameConfig::default();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.points_per_collectible, 10);
        assert_eq!(config.collectible_count, 11);
        assert_eq!(config.spawn_point, Vec2::new(100.0, 450.0));
        assert_eq!((config.bounce_min, config.bounce_max), (0.4, 0.8));
    }

    #[test]
    fn collectibles_are_laid_out_in_a_row() {
        let config = GameConfig::default();
        assert_eq!(config.collectible_position(0), Vec2::new(12.0, 0.0));
        assert_eq!(config.collectible_position(10), Vec2::new(712.0, 0.0));
    }

    #[test]
    fn fluent_api_chaining() {
        let config = GameConfig::default()
            .with_starting_lives(5)
            .with_points_per_collectible(25)
            .with_collectible_count(3)
            .with_bounce_range(0.1, 0.2)
            .with_window_title("Test");

        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.points_per_collectible, 25);
        assert_eq!(config.collectible_count, 3);
        assert_eq!((config.bounce_min, config.bounce_max), (0.1, 0.2));
        assert_eq!(config.window_title, "Test");
    }

    #[test]
    #[should_panic(expected = "Starting lives must be positive")]
    fn zero_lives_panics() {
        GameConfig::default().with_starting_lives(0);
    }

    #[test]
    #[should_panic(expected = "Bounce range")]
    fn inverted_bounce_range_panics() {
        GameConfig::default().with_bounce_range(0.8, 0.4);
    }

    #[test]
    #[should_panic(expected = "Speeds must be positive")]
    fn negative_speed_panics() {
        GameConfig::default().with_speeds(-1.0, 330.0);
    }
}
