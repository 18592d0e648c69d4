//=========================================================================
// Gameplay Session
//=========================================================================
//
// Cross-level state carried from scene to scene: remaining lives and
// accumulated score.
//
// Lifecycle:
//   Menu ──Start──> fresh() ──by value──> Level1 … Level4
//                                  └──> discarded at GameOver / Menu
//
//=========================================================================

//=== GameplaySession =====================================================

/// Lives and score shared by every level of one playthrough.
///
/// Passed by value at each scene transition. Only the level controller
/// mutates it, through [`collect`](Self::collect) and
/// [`lose_life`](Self::lose_life).
///
/// Invariants:
/// - `lives` never drops below zero; at zero the session is terminal.
/// - `score` never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameplaySession {
    lives: u32,
    score: u32,
}

impl GameplaySession {
    /// Creates a session with explicit values.
    pub const fn new(lives: u32, score: u32) -> Self {
        Self { lives, score }
    }

    /// Session handed to the first level by the menu.
    pub const fn fresh(starting_lives: u32) -> Self {
        Self::new(starting_lives, 0)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns `true` once no lives remain.
    pub fn is_terminal(&self) -> bool {
        self.lives == 0
    }

    //--- Mutation ---------------------------------------------------------

    /// Adds `points` to the score. No-op on a terminal session.
    pub(crate) fn collect(&mut self, points: u32) {
        if self.is_terminal() {
            return;
        }
        self.score = self.score.saturating_add(points);
    }

    /// Removes one life and returns the lives left.
    pub(crate) fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_no_score() {
        let session = GameplaySession::fresh(3);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.score(), 0);
        assert!(!session.is_terminal());
    }

    #[test]
    fn collect_accumulates_score() {
        let mut session = GameplaySession::fresh(3);
        session.collect(10);
        session.collect(10);
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn lose_life_stops_at_zero() {
        let mut session = GameplaySession::new(1, 50);
        assert_eq!(session.lose_life(), 0);
        assert!(session.is_terminal());

        assert_eq!(session.lose_life(), 0, "Lives must never go negative");
    }

    #[test]
    fn terminal_session_ignores_collect() {
        let mut session = GameplaySession::new(0, 40);
        session.collect(10);
        assert_eq!(session.score(), 40);
    }

    #[test]
    fn session_is_copy() {
        let a = GameplaySession::new(2, 30);
        let b = a;
        assert_eq!(a, b);
    }
}
