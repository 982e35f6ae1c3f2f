//! The orderable three-stage sequence and its solved predicate.

use serde::{Deserialize, Serialize};

use crate::store::UiStore;

/// Stable identity token for a stage card, distinct from its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageCardId(pub String);

impl StageCardId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageLabel {
    Problem,
    Solution,
    Result,
}

impl StageLabel {
    pub fn display(self) -> &'static str {
        match self {
            StageLabel::Problem => "Problem",
            StageLabel::Solution => "Solution",
            StageLabel::Result => "Result",
        }
    }
}

/// The one permutation that unlocks the gate.
pub const TARGET_ORDER: [StageLabel; 3] =
    [StageLabel::Problem, StageLabel::Solution, StageLabel::Result];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCard {
    pub id: StageCardId,
    pub label: StageLabel,
}

impl StageCard {
    pub fn new(id: impl Into<String>, label: StageLabel) -> Self {
        Self {
            id: StageCardId::new(id),
            label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Applied,
    Ignored,
}

impl ReorderOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, ReorderOutcome::Applied)
    }
}

/// Ordered list of exactly three stage cards. The id set never changes over
/// the sequence's lifetime; only positions do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSequence {
    cards: Vec<StageCard>,
}

impl StageSequence {
    pub fn new(cards: [StageCard; 3]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// The fixed initial order shown on every fresh mount of the home view.
    pub fn scrambled() -> Self {
        Self::new([
            StageCard::new("solution", StageLabel::Solution),
            StageCard::new("problem", StageLabel::Problem),
            StageCard::new("result", StageLabel::Result),
        ])
    }

    pub fn cards(&self) -> &[StageCard] {
        &self.cards
    }

    pub fn position_of(&self, id: &StageCardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    pub fn card_at(&self, index: usize) -> Option<&StageCard> {
        self.cards.get(index)
    }

    /// Removes the source card and reinserts it at the target card's
    /// position, shifting the cards in between. Same-id or unknown-id
    /// requests mutate nothing.
    pub fn reorder(&mut self, source: &StageCardId, target: &StageCardId) -> ReorderOutcome {
        if source == target {
            return ReorderOutcome::Ignored;
        }
        let (Some(from), Some(to)) = (self.position_of(source), self.position_of(target)) else {
            return ReorderOutcome::Ignored;
        };
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        ReorderOutcome::Applied
    }

    /// True iff the positional labels read Problem, Solution, Result.
    /// Compared by label, never by id.
    pub fn is_solved(&self) -> bool {
        self.cards
            .iter()
            .map(|card| card.label)
            .eq(TARGET_ORDER.into_iter())
    }
}

/// Couples the sequence with the shared store: every applied reorder
/// recomputes the solved predicate and publishes it before returning, so no
/// observer can see one without the other.
#[derive(Debug)]
pub struct SequenceController {
    sequence: StageSequence,
}

impl SequenceController {
    /// Fresh scrambled sequence; the derived completion state is published
    /// immediately, mirroring what a later un-solve would publish.
    pub fn mount(store: &mut UiStore) -> Self {
        let controller = Self {
            sequence: StageSequence::scrambled(),
        };
        store.set_complete(controller.sequence.is_solved());
        controller
    }

    #[cfg(test)]
    pub fn mount_with(sequence: StageSequence, store: &mut UiStore) -> Self {
        let controller = Self { sequence };
        store.set_complete(controller.sequence.is_solved());
        controller
    }

    pub fn sequence(&self) -> &StageSequence {
        &self.sequence
    }

    pub fn reorder(
        &mut self,
        source: &StageCardId,
        target: &StageCardId,
        store: &mut UiStore,
    ) -> ReorderOutcome {
        let outcome = self.sequence.reorder(source, target);
        match outcome {
            ReorderOutcome::Applied => {
                let solved = self.sequence.is_solved();
                tracing::debug!(
                    source = %source.0,
                    target = %target.0,
                    solved,
                    "applied stage reorder"
                );
                store.set_complete(solved);
            }
            ReorderOutcome::Ignored => {
                tracing::debug!(source = %source.0, target = %target.0, "ignored stage reorder");
            }
        }
        outcome
    }
}
