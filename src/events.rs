//! Event queues
//!
//! Events allow decoupled communication between game systems: instead of a
//! component reaching into another system, it reads events that were queued
//! earlier in the frame. The engine itself queues pointer-gesture events
//! during scene dispatch; games can build their own queues from the same
//! block for game-specific events.

use crate::gameobject::ObjectId;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The pointer gestures a scene can derive from raw press/release/position
/// samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    HoverEnter,
    HoverLeave,
    Hover,
    Down,
    Up,
    Click,
    HoldStart,
    HoldEnd,
}

/// A pointer gesture resolved against a scene object.
///
/// Queued by the scene's pointer dispatch in addition to invoking the
/// `PointerArea` callbacks, so components can react to gestures from their
/// `update` hook on the following frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// The object whose pointer area was hit
    pub object: ObjectId,
    pub kind: GestureKind,
    /// Pointer position in world pixels at the time of the gesture
    pub world_x: f32,
    pub world_y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter_does_not_clear() {
        let mut queue: EventQueue<&str> = EventQueue::new();
        queue.send("a");
        queue.send("b");

        assert_eq!(queue.iter().count(), 2);
        assert_eq!(queue.iter().count(), 2);

        queue.clear();
        assert!(queue.is_empty());
    }
}
