//=========================================================================
// Level Definitions
//=========================================================================
//
// Static, authored per-level data: platform layout, win condition and
// successor. One immutable `LevelDefinition` per level; the shared
// `LevelController` is parameterized by it.
//
//   Level1 ──> Level2 ──> Level3 ──> Level4 ──> End
//   (stars)    (stars)    (stars)    (friend)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::entities::Vec2;
use crate::config::GameConfig;

//=== LevelId =============================================================

/// Identifies one of the four playable levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelId {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl LevelId {
    /// All levels in play order.
    pub const ALL: [LevelId; 4] = [Self::Level1, Self::Level2, Self::Level3, Self::Level4];
}

//=== Successor ===========================================================

/// Where a level leads once it is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Successor {
    Level(LevelId),
    End,
}

//=== PlatformSpec ========================================================

/// One static platform: center position and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl PlatformSpec {
    pub const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }
}

//=== WinCondition ========================================================

/// How a level is won.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WinCondition {
    /// Every collectible in a counted set has been gathered.
    AllCollected { count: usize },

    /// The player overlapped a single distinguished NPC.
    OverlapWithTarget { position: Vec2 },
}

//=== LevelDefinition =====================================================

/// Immutable description of one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub next: Successor,
    pub platforms: Vec<PlatformSpec>,
    pub win: WinCondition,
}

//=== LevelCatalog ========================================================

/// The ordered set of levels the scene graph is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Builds a catalog from arbitrary definitions (first entry is the
    /// level the menu starts).
    ///
    /// # Panics
    ///
    /// Panics if `levels` is empty.
    pub fn new(levels: Vec<LevelDefinition>) -> Self {
        assert!(!levels.is_empty(), "Level catalog must contain at least one level");
        Self { levels }
    }

    /// The four levels of the game.
    pub fn standard(config: &GameConfig) -> Self {
        const GROUND: PlatformSpec = PlatformSpec::new(400.0, 568.0, 2.0);

        let stars = WinCondition::AllCollected {
            count: config.collectible_count,
        };

        Self::new(vec![
            LevelDefinition {
                id: LevelId::Level1,
                next: Successor::Level(LevelId::Level2),
                platforms: vec![
                    GROUND,
                    PlatformSpec::new(600.0, 400.0, 1.0),
                    PlatformSpec::new(50.0, 250.0, 1.0),
                    PlatformSpec::new(750.0, 220.0, 1.0),
                ],
                win: stars,
            },
            LevelDefinition {
                id: LevelId::Level2,
                next: Successor::Level(LevelId::Level3),
                platforms: vec![
                    GROUND,
                    PlatformSpec::new(200.0, 450.0, 1.0),
                    PlatformSpec::new(650.0, 350.0, 1.0),
                    PlatformSpec::new(400.0, 220.0, 1.0),
                ],
                win: stars,
            },
            LevelDefinition {
                id: LevelId::Level3,
                next: Successor::Level(LevelId::Level4),
                platforms: vec![
                    GROUND,
                    PlatformSpec::new(100.0, 400.0, 1.0),
                    PlatformSpec::new(700.0, 300.0, 1.0),
                    PlatformSpec::new(400.0, 150.0, 1.0),
                ],
                win: stars,
            },
            LevelDefinition {
                id: LevelId::Level4,
                next: Successor::End,
                platforms: vec![
                    GROUND,
                    PlatformSpec::new(200.0, 400.0, 1.0),
                    PlatformSpec::new(650.0, 300.0, 1.0),
                ],
                win: WinCondition::OverlapWithTarget {
                    position: config.target_position,
                },
            },
        ])
    }

    //--- Queries ----------------------------------------------------------

    /// Level the menu starts.
    pub fn first(&self) -> LevelId {
        self.levels[0].id
    }

    pub fn get(&self, id: LevelId) -> Option<&LevelDefinition> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LevelCatalog {
        LevelCatalog::standard(&GameConfig::default())
    }

    #[test]
    fn standard_catalog_is_linear() {
        let catalog = catalog();
        assert_eq!(catalog.first(), LevelId::Level1);

        let successors: Vec<_> = catalog.iter().map(|level| level.next).collect();
        assert_eq!(
            successors,
            vec![
                Successor::Level(LevelId::Level2),
                Successor::Level(LevelId::Level3),
                Successor::Level(LevelId::Level4),
                Successor::End,
            ]
        );
    }

    #[test]
    fn base_levels_count_eleven_stars() {
        let catalog = catalog();
        for id in [LevelId::Level1, LevelId::Level2, LevelId::Level3] {
            let level = catalog.get(id).expect("level exists");
            assert_eq!(level.win, WinCondition::AllCollected { count: 11 });
            assert_eq!(level.platforms.len(), 4);
        }
    }

    #[test]
    fn last_level_is_won_by_reaching_the_friend() {
        let level = catalog().get(LevelId::Level4).cloned().expect("level exists");
        assert!(matches!(level.win, WinCondition::OverlapWithTarget { .. }));
        assert_eq!(level.platforms.len(), 3);
    }

    #[test]
    fn every_level_has_a_double_scale_ground() {
        for level in catalog().iter() {
            assert_eq!(level.platforms[0], PlatformSpec::new(400.0, 568.0, 2.0));
        }
    }

    #[test]
    #[should_panic(expected = "at least one level")]
    fn empty_catalog_panics() {
        LevelCatalog::new(Vec::new());
    }
}
