//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for scene transition requests.
//
// Scenes push requests here during updates. The scene manager drains the
// queue at the tick boundary and applies at most one request per tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Trigger;
use crate::game::session::GameplaySession;

//=== TransitionRequest ===================================================

/// A scene's request to leave along `trigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub trigger: Trigger,

    /// Session of the level being left, when the edge carries one.
    pub session: Option<GameplaySession>,
}

impl TransitionRequest {
    /// Request with no session attached.
    pub fn new(trigger: Trigger) -> Self {
        Self { trigger, session: None }
    }

    /// Request that hands `session` on to the next scene.
    pub fn with_session(trigger: Trigger, session: GameplaySession) -> Self {
        Self {
            trigger,
            session: Some(session),
        }
    }
}

//=== TransitionQueue =====================================================

/// Pending transition requests, in the order scenes pushed them.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<TransitionRequest>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request to be processed at the next tick boundary.
    pub fn push(&mut self, request: TransitionRequest) {
        self.queue.push(request);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<TransitionRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
