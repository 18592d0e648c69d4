//=========================================================================
// Input Buffer
//
// Collects keyboard events between two frame boundaries. Acts as a
// transient event aggregator between the Platform and the core thread.
//
// Responsibilities:
// - Store incoming events in arrival order
// - Drop consecutive duplicates to prevent flooding
// - Hand the frame's events over via `drain()`
//
// Notes:
// The buffer is reused across frames; draining keeps its capacity.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates to avoid reallocations under typical input rates.
    //
    pub(crate) fn new() -> Self {
        const EVENTS_BASE: usize = 32;

        Self {
            events: Vec::with_capacity(EVENTS_BASE),
        }
    }

    //--- Event Handling --------------------------------------------------
    //
    // Duplicate consecutive events are ignored.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    pub(crate) fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events, or `None` when nothing arrived.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
