//! Single-consumer event stream.
//!
//! Timer ticks and key presses from any number of producers are funneled into
//! one ordered queue. Only the owner of the [`EventQueue`] touches the engine,
//! so a tick, an input and a render never overlap.

use tokio::sync::mpsc;

use crate::engine::{GameEngine, TickOutcome};
use crate::types::Key;

/// Event delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Key(Key),
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Tick(TickOutcome),
    /// Whether the key changed any state.
    Key(bool),
}

/// Apply one event to the engine.
pub fn dispatch(engine: &mut GameEngine, event: GameEvent) -> Dispatched {
    match event {
        GameEvent::Tick => Dispatched::Tick(engine.tick()),
        GameEvent::Key(key) => Dispatched::Key(engine.handle_input(key)),
    }
}

/// Producer handle. Cheap to clone; safe to move to other threads.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl EventSender {
    /// Enqueue an event. Returns false once the queue has been dropped.
    pub fn send(&self, event: GameEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn key(&self, key: Key) -> bool {
        self.send(GameEvent::Key(key))
    }

    pub fn tick(&self) -> bool {
        self.send(GameEvent::Tick)
    }
}

/// The consuming end of the event stream.
pub struct EventQueue {
    tx: mpsc::UnboundedSender<GameEvent>,
    rx: mpsc::UnboundedReceiver<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    pub fn try_next(&mut self) -> Option<GameEvent> {
        self.rx.try_recv().ok()
    }

    /// Dispatch every queued event in arrival order.
    ///
    /// `on_event` sees each result right after it was applied, before the next
    /// event runs.
    pub fn drain_with(
        &mut self,
        engine: &mut GameEngine,
        mut on_event: impl FnMut(&GameEngine, GameEvent, Dispatched),
    ) -> usize {
        let mut n = 0;
        while let Some(event) = self.try_next() {
            let result = dispatch(engine, event);
            on_event(engine, event, result);
            n += 1;
        }
        n
    }

    pub fn drain(&mut self, engine: &mut GameEngine) -> usize {
        self.drain_with(engine, |_, _, _| {})
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, GamePhase};

    #[test]
    fn events_apply_in_send_order() {
        let mut q = EventQueue::new();
        let a = q.sender();
        let b = q.sender();
        let mut engine = GameEngine::new(5);

        a.key(Key::Other);
        b.key(Key::Down);
        a.tick();

        let mut seen = Vec::new();
        let n = q.drain_with(&mut engine, |_, ev, _| seen.push(ev));
        assert_eq!(n, 3);
        assert_eq!(
            seen,
            vec![GameEvent::Key(Key::Other), GameEvent::Key(Key::Down), GameEvent::Tick]
        );
        assert_eq!(engine.phase(), GamePhase::Running);
        assert_eq!(engine.direction(), Direction::Down);
    }

    #[test]
    fn sender_reports_dropped_queue() {
        let q = EventQueue::new();
        let s = q.sender();
        assert!(s.tick());
        drop(q);
        assert!(!s.tick());
    }
}
