//! Navigation gate: the two mutually exclusive affordances derived from the
//! completion flag.

use crate::store::UiStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// The forward action is available.
    Proceed,
    /// Static hint shown until the sequence is solved.
    Hint,
}

impl GateView {
    pub fn from_completion(complete: bool) -> Self {
        if complete {
            GateView::Proceed
        } else {
            GateView::Hint
        }
    }

    pub fn from_store(store: &UiStore) -> Self {
        Self::from_completion(store.is_complete())
    }

    pub fn is_unlocked(self) -> bool {
        matches!(self, GateView::Proceed)
    }
}
