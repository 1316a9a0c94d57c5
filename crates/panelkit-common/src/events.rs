//! Host-facing outbox.
//!
//! Everything here is single-threaded and synchronous: state changes push
//! events as they happen and the host drains them after each call it makes.

use std::collections::VecDeque;

use tracing::trace;

/// FIFO of events waiting for the host.
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    pending: VecDeque<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<E: std::fmt::Debug> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: E) {
        trace!(?event, "queued host event");
        self.pending.push_back(event);
    }

    /// Take every pending event in the order it was pushed.
    pub fn drain(&mut self) -> Vec<E> {
        self.pending.drain(..).collect()
    }

    pub fn peek(&self) -> impl Iterator<Item = &E> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Ev {
        Opened(u32),
        Closed(u32),
    }

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.push(Ev::Opened(1));
        queue.push(Ev::Closed(1));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.drain(), vec![Ev::Opened(1), Ev::Closed(1)]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut queue = EventQueue::new();
        queue.push(Ev::Opened(7));
        assert_eq!(queue.peek().count(), 1);
        assert_eq!(queue.len(), 1);
    }
}
