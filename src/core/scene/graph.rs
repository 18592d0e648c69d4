//=========================================================================
// Scene Graph
//=========================================================================
//
// Static transition table between scenes, derived from the level catalog.
//
// Architecture:
//   (SceneId, Trigger) → HashMap → SceneId
//   (from, to, session) → Payload
//
// Edges:
//   Menu      ──Start──────────► first level        [fresh session]
//   Level N   ──win trigger────► next level         [session carried]
//   last      ──win trigger────► End                [final score]
//   Level N   ──LivesExhausted─► GameOver
//   End       ──Restart────────► Menu
//   GameOver  ──Restart────────► Menu
//
// Menu is the only re-entry point; the level chain itself is acyclic.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, error};

//=== Internal Dependencies ===============================================

use crate::game::level::{LevelCatalog, LevelId, Successor, WinCondition};
use crate::game::session::GameplaySession;

//=== SceneId =============================================================

/// Identifies a scene node in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    Level(LevelId),
    End,
    GameOver,
}

impl SceneId {
    pub fn is_level(&self) -> bool {
        matches!(self, SceneId::Level(_))
    }
}

impl From<Successor> for SceneId {
    fn from(successor: Successor) -> Self {
        match successor {
            Successor::Level(level) => SceneId::Level(level),
            Successor::End => SceneId::End,
        }
    }
}

//=== Trigger =============================================================

/// Events that move the game from one scene to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Confirm pressed on the menu.
    Start,

    /// Last collectible of an `AllCollected` level picked up.
    AllCollected,

    /// Player overlapped the target of an `OverlapWithTarget` level.
    TargetReached,

    /// Lives dropped to zero.
    LivesExhausted,

    /// Confirm pressed on End or GameOver.
    Restart,
}

impl From<WinCondition> for Trigger {
    fn from(condition: WinCondition) -> Self {
        match condition {
            WinCondition::AllCollected { .. } => Trigger::AllCollected,
            WinCondition::OverlapWithTarget { .. } => Trigger::TargetReached,
        }
    }
}

//=== Payload =============================================================

/// Data handed to the scene being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payload {
    #[default]
    None,
    Session(GameplaySession),
    FinalScore(u32),
}

//=== Transition ==========================================================

/// A resolved edge: where to go and what to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SceneId,
    pub trigger: Trigger,
    pub to: SceneId,
    pub payload: Payload,
}

//=== SceneGraphError =====================================================

/// Invalid graph construction or transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneGraphError {
    /// No edge leaves `from` on `trigger`.
    UndefinedEdge { from: SceneId, trigger: Trigger },

    /// Edge requires the session but none was supplied.
    MissingSession { from: SceneId, trigger: Trigger },

    /// A level names a successor level that is not in the catalog.
    DanglingSuccessor { level: LevelId, next: LevelId },

    /// Following successors from this level returns to it.
    Cycle(LevelId),
}

impl fmt::Display for SceneGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedEdge { from, trigger } => {
                write!(f, "No transition from {:?} on {:?}", from, trigger)
            }
            Self::MissingSession { from, trigger } => {
                write!(f, "Transition from {:?} on {:?} requires a session", from, trigger)
            }
            Self::DanglingSuccessor { level, next } => {
                write!(f, "Level {:?} leads to {:?}, which is not in the catalog", level, next)
            }
            Self::Cycle(level) => write!(f, "Level chain starting at {:?} loops back on itself", level),
        }
    }
}

impl std::error::Error for SceneGraphError {}

//=== SceneGraph ==========================================================

/// Transition table built once per run.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    edges: HashMap<(SceneId, Trigger), SceneId>,
    starting_lives: u32,
}

impl SceneGraph {
    //--- Construction -----------------------------------------------------

    /// Builds the table from the catalog's level chain.
    ///
    /// Fails if a successor is missing from the catalog or the chain loops.
    pub fn from_catalog(catalog: &LevelCatalog, starting_lives: u32) -> Result<Self, SceneGraphError> {
        let mut edges = HashMap::new();

        edges.insert((SceneId::Menu, Trigger::Start), SceneId::Level(catalog.first()));

        for level in catalog.iter() {
            if let Successor::Level(next) = level.next {
                if catalog.get(next).is_none() {
                    return Err(SceneGraphError::DanglingSuccessor { level: level.id, next });
                }
            }

            let from = SceneId::Level(level.id);
            edges.insert((from, Trigger::from(level.win)), SceneId::from(level.next));
            edges.insert((from, Trigger::LivesExhausted), SceneId::GameOver);
        }

        edges.insert((SceneId::End, Trigger::Restart), SceneId::Menu);
        edges.insert((SceneId::GameOver, Trigger::Restart), SceneId::Menu);

        Self::check_acyclic(catalog)?;

        debug!(target: "scene", "Scene graph built with {} edges", edges.len());

        Ok(Self { edges, starting_lives })
    }

    fn check_acyclic(catalog: &LevelCatalog) -> Result<(), SceneGraphError> {
        for start in catalog.iter() {
            let mut seen = HashSet::new();
            let mut current = start;

            while let Successor::Level(next) = current.next {
                if !seen.insert(current.id) || next == start.id {
                    return Err(SceneGraphError::Cycle(start.id));
                }
                match catalog.get(next) {
                    Some(level) => current = level,
                    None => break,
                }
            }
        }
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// The scene a fresh run begins in.
    pub fn initial(&self) -> SceneId {
        SceneId::Menu
    }

    /// Target of the edge, if any.
    pub fn target(&self, from: SceneId, trigger: Trigger) -> Option<SceneId> {
        self.edges.get(&(from, trigger)).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    //--- Transitions ------------------------------------------------------

    /// Resolves an edge and builds the payload for the target scene.
    ///
    /// `session` is the state of the level being left. It is required
    /// for level-to-level and level-to-End edges and ignored otherwise.
    pub fn try_transition(
        &self,
        from: SceneId,
        trigger: Trigger,
        session: Option<GameplaySession>,
    ) -> Result<Transition, SceneGraphError> {
        let to = self
            .target(from, trigger)
            .ok_or(SceneGraphError::UndefinedEdge { from, trigger })?;

        let carried = || session.ok_or(SceneGraphError::MissingSession { from, trigger });

        let payload = match (from, to) {
            (SceneId::Menu, SceneId::Level(_)) => {
                Payload::Session(GameplaySession::fresh(self.starting_lives))
            }
            (_, SceneId::Level(_)) => Payload::Session(carried()?),
            (_, SceneId::End) => Payload::FinalScore(carried()?.score()),
            (_, SceneId::Menu) | (_, SceneId::GameOver) => Payload::None,
        };

        Ok(Transition { from, trigger, to, payload })
    }

    /// Like [`try_transition`](Self::try_transition), but an invalid
    /// request is a programming error and aborts.
    ///
    /// # Panics
    ///
    /// Panics if the edge is undefined or its session is missing.
    pub fn transition(
        &self,
        from: SceneId,
        trigger: Trigger,
        session: Option<GameplaySession>,
    ) -> Transition {
        match self.try_transition(from, trigger, session) {
            Ok(transition) => transition,
            Err(e) => {
                error!(target: "scene", "Malformed transition: {}", e);
                panic!("Malformed transition: {}", e);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::level::{LevelDefinition, PlatformSpec};

    fn graph() -> SceneGraph {
        let catalog = LevelCatalog::standard(&GameConfig::default());
        SceneGraph::from_catalog(&catalog, 3).expect("standard catalog is valid")
    }

    fn level(id: LevelId, next: Successor) -> LevelDefinition {
        LevelDefinition {
            id,
            next,
            platforms: vec![PlatformSpec::new(400.0, 568.0, 2.0)],
            win: WinCondition::AllCollected { count: 1 },
        }
    }

    //--- Edges --------------------------------------------------------------

    #[test]
    fn menu_start_enters_first_level_with_fresh_session() {
        let t = graph().transition(SceneId::Menu, Trigger::Start, None);

        assert_eq!(t.to, SceneId::Level(LevelId::Level1));
        assert_eq!(t.payload, Payload::Session(GameplaySession::new(3, 0)));
    }

    #[test]
    fn collection_levels_chain_forward_with_session() {
        let graph = graph();
        let session = GameplaySession::new(2, 110);

        for (from, to) in [
            (LevelId::Level1, LevelId::Level2),
            (LevelId::Level2, LevelId::Level3),
            (LevelId::Level3, LevelId::Level4),
        ] {
            let t = graph.transition(SceneId::Level(from), Trigger::AllCollected, Some(session));
            assert_eq!(t.to, SceneId::Level(to));
            assert_eq!(t.payload, Payload::Session(session));
        }
    }

    #[test]
    fn final_level_ends_with_score_only() {
        let t = graph().transition(
            SceneId::Level(LevelId::Level4),
            Trigger::TargetReached,
            Some(GameplaySession::new(1, 330)),
        );

        assert_eq!(t.to, SceneId::End);
        assert_eq!(t.payload, Payload::FinalScore(330));
    }

    #[test]
    fn every_level_can_lose() {
        let graph = graph();
        for id in LevelId::ALL {
            let t = graph.transition(SceneId::Level(id), Trigger::LivesExhausted, None);
            assert_eq!(t.to, SceneId::GameOver);
            assert_eq!(t.payload, Payload::None);
        }
    }

    #[test]
    fn end_and_game_over_restart_to_menu() {
        let graph = graph();
        for from in [SceneId::End, SceneId::GameOver] {
            let t = graph.transition(from, Trigger::Restart, None);
            assert_eq!(t.to, SceneId::Menu);
            assert_eq!(t.payload, Payload::None);
        }
    }

    #[test]
    fn standard_graph_edge_count() {
        // start + 4 wins + 4 losses + 2 restarts
        assert_eq!(graph().edge_count(), 11);
    }

    //--- Errors -------------------------------------------------------------

    #[test]
    fn wrong_trigger_for_level_is_undefined() {
        let result = graph().try_transition(
            SceneId::Level(LevelId::Level1),
            Trigger::TargetReached,
            Some(GameplaySession::new(3, 0)),
        );

        assert_eq!(
            result,
            Err(SceneGraphError::UndefinedEdge {
                from: SceneId::Level(LevelId::Level1),
                trigger: Trigger::TargetReached,
            })
        );
    }

    #[test]
    fn level_to_level_without_session_fails() {
        let result = graph().try_transition(SceneId::Level(LevelId::Level2), Trigger::AllCollected, None);
        assert!(matches!(result, Err(SceneGraphError::MissingSession { .. })));
    }

    #[test]
    #[should_panic(expected = "Malformed transition")]
    fn transition_panics_on_undefined_edge() {
        graph().transition(SceneId::Menu, Trigger::Restart, None);
    }

    #[test]
    fn dangling_successor_is_rejected() {
        let catalog = LevelCatalog::new(vec![level(LevelId::Level1, Successor::Level(LevelId::Level2))]);

        assert_eq!(
            SceneGraph::from_catalog(&catalog, 3).err(),
            Some(SceneGraphError::DanglingSuccessor {
                level: LevelId::Level1,
                next: LevelId::Level2,
            })
        );
    }

    #[test]
    fn level_cycle_is_rejected() {
        let catalog = LevelCatalog::new(vec![
            level(LevelId::Level1, Successor::Level(LevelId::Level2)),
            level(LevelId::Level2, Successor::Level(LevelId::Level1)),
        ]);

        assert_eq!(
            SceneGraph::from_catalog(&catalog, 3).err(),
            Some(SceneGraphError::Cycle(LevelId::Level1))
        );
    }

    #[test]
    fn single_level_catalog_goes_straight_to_end() {
        let catalog = LevelCatalog::new(vec![level(LevelId::Level1, Successor::End)]);
        let graph = SceneGraph::from_catalog(&catalog, 5).expect("valid");

        let start = graph.transition(SceneId::Menu, Trigger::Start, None);
        assert_eq!(start.payload, Payload::Session(GameplaySession::new(5, 0)));

        let end = graph.transition(start.to, Trigger::AllCollected, Some(GameplaySession::new(5, 10)));
        assert_eq!(end.to, SceneId::End);
        assert_eq!(end.payload, Payload::FinalScore(10));
    }
}
