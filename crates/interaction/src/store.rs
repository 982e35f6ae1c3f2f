//! Shared UI state with broadcast/subscribe semantics.
//!
//! The store is an explicit, injectable value owned by the app shell, not a
//! global. Readers either take a synchronous snapshot or subscribe for
//! change events; the channel pair is used as a same-thread mailbox drained
//! at the top of each frame.

use content::domain::CaseStudyId;
use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CompletionChanged(bool),
    ActiveCaseChanged(Option<CaseStudyId>),
}

#[derive(Debug, Default)]
pub struct UiStore {
    complete: bool,
    active_case: Option<CaseStudyId>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an independent reader. Every subsequent value change is
    /// delivered to all live receivers; dropped receivers are pruned on the
    /// next broadcast.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn active_case(&self) -> Option<&CaseStudyId> {
        self.active_case.as_ref()
    }

    pub fn set_complete(&mut self, complete: bool) {
        if self.complete == complete {
            return;
        }
        self.complete = complete;
        tracing::debug!(complete, "ui store completion changed");
        self.broadcast(StoreEvent::CompletionChanged(complete));
    }

    pub fn set_active_case(&mut self, id: Option<CaseStudyId>) {
        if self.active_case == id {
            return;
        }
        self.active_case = id.clone();
        tracing::debug!(active_case = ?id.as_ref().map(|c| c.as_str()), "ui store active case changed");
        self.broadcast(StoreEvent::ActiveCaseChanged(id));
    }

    fn broadcast(&mut self, event: StoreEvent) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
