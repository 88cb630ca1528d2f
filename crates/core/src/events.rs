//! Outbound notifications
//!
//! The engine reports state changes as [`GameEvent`]s pushed into an
//! [`EventSink`]. HUDs and end-of-level panels subscribe to an [`EventBus`]
//! (and unsubscribe when they go away), or receive events over an mpsc
//! channel.

use std::sync::mpsc::Sender;

use crate::types::Outcome;

/// Fire-and-forget notifications emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    MovesChanged(u32),
    TargetScoreSet(u32),
    /// Input is ignored while the board is busy resolving a link.
    BoardBusy(bool),
    GameOver(Outcome),
    ResetRequested,
    /// The board had no move and was reshuffled.
    Shuffled { attempts: u32, playable: bool },
}

/// Anything that accepts engine events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Recording sink.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Channel sink. Events sent after the receiver is dropped are discarded.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}

/// Token returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// Subscription list. Listeners run in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
