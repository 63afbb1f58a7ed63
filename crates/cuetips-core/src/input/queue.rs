/// Pointer gestures the cue controller understands.
/// Coordinates are local to the overlay surface, in pixels.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A press began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The press ended at (x, y).
    PointerUp { x: f32, y: f32 },
}

/// A queue of pointer events.
/// DOM handlers write events into the queue; the app drains them in order.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from a DOM event handler).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerUp { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 1.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 0.0 });
        q.push(InputEvent::PointerUp { x: 3.0, y: 0.0 });
        let events = q.drain();
        match (events[0], events[1], events[2]) {
            (
                InputEvent::PointerDown { x: a, .. },
                InputEvent::PointerMove { x: b, .. },
                InputEvent::PointerUp { x: c, .. },
            ) => {
                assert_eq!((a, b, c), (1.0, 2.0, 3.0));
            }
            _ => panic!("Expected down/move/up in order"),
        }
    }
}
