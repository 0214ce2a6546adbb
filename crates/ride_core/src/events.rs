use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    StartRide,
    CompleteRide,
    CancelRequested,
    CancelConfirmed,
    CancelDismissed,
    NavigateBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Monotone arrival order; assigned by [InteractionQueue::push].
    pub seq: u64,
    pub kind: EventKind,
}

/// The event currently being processed; inserted by the runner before the
/// schedule runs.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

/// FIFO queue of user interactions. Each interaction runs to completion
/// before the next one is popped; there is no overlap and no reordering.
#[derive(Debug, Default, Resource)]
pub struct InteractionQueue {
    next_seq: u64,
    processed: u64,
    events: VecDeque<Event>,
}

impl InteractionQueue {
    pub fn push(&mut self, kind: EventKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push_back(Event { seq, kind });
        seq
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop_front()?;
        self.processed += 1;
        Some(event)
    }

    /// Number of events processed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_events_in_arrival_order() {
        let mut queue = InteractionQueue::default();
        queue.push(EventKind::StartRide);
        queue.push(EventKind::CancelRequested);
        queue.push(EventKind::CancelConfirmed);

        let first = queue.pop_next().expect("first event");
        assert_eq!(first.kind, EventKind::StartRide);
        assert_eq!(first.seq, 0);

        let second = queue.pop_next().expect("second event");
        assert_eq!(second.kind, EventKind::CancelRequested);
        assert_eq!(second.seq, 1);

        let third = queue.pop_next().expect("third event");
        assert_eq!(third.kind, EventKind::CancelConfirmed);
        assert_eq!(third.seq, 2);

        assert!(queue.pop_next().is_none());
        assert!(queue.is_empty());
        assert_eq!(queue.processed(), 3);
    }

    #[test]
    fn sequence_numbers_keep_growing_across_drains() {
        let mut queue = InteractionQueue::default();
        queue.push(EventKind::NavigateBack);
        queue.pop_next();

        let seq = queue.push(EventKind::StartRide);
        assert_eq!(seq, 1);
    }
}
