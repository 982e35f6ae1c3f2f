use content::domain::CaseStudyId;
use crossbeam_channel::TryRecvError;

use crate::gate::GateView;
use crate::gesture::DragGesture;
use crate::sequence::{
    ReorderOutcome, SequenceController, StageCard, StageCardId, StageLabel, StageSequence,
};
use crate::store::{StoreEvent, UiStore};

fn sequence_with(labels: [StageLabel; 3]) -> StageSequence {
    // Ids deliberately unrelated to labels: the predicate compares labels.
    let ids = ["alpha", "beta", "gamma"];
    StageSequence::new([
        StageCard::new(ids[0], labels[0]),
        StageCard::new(ids[1], labels[1]),
        StageCard::new(ids[2], labels[2]),
    ])
}

fn labels_of(sequence: &StageSequence) -> Vec<StageLabel> {
    sequence.cards().iter().map(|card| card.label).collect()
}

#[test]
fn solved_for_exactly_one_of_the_six_permutations() {
    use StageLabel::{Problem, Result, Solution};
    let permutations = [
        ([Problem, Solution, Result], true),
        ([Problem, Result, Solution], false),
        ([Solution, Problem, Result], false),
        ([Solution, Result, Problem], false),
        ([Result, Problem, Solution], false),
        ([Result, Solution, Problem], false),
    ];
    for (order, expected) in permutations {
        assert_eq!(sequence_with(order).is_solved(), expected, "{order:?}");
    }
}

#[test]
fn reorder_with_identical_source_and_target_is_an_ignored_noop() {
    let mut sequence = StageSequence::scrambled();
    let before = sequence.clone();
    let id = sequence.cards()[0].id.clone();
    assert_eq!(sequence.reorder(&id, &id), ReorderOutcome::Ignored);
    assert_eq!(sequence, before);
}

#[test]
fn reorder_with_unknown_id_leaves_sequence_and_store_untouched() {
    let mut store = UiStore::new();
    let rx = store.subscribe();
    let mut controller = SequenceController::mount(&mut store);
    // Drain the mount-time publish before exercising the invalid request.
    while rx.try_recv().is_ok() {}

    let before = controller.sequence().clone();
    let known = before.cards()[0].id.clone();
    let unknown = StageCardId::new("ghost");

    assert_eq!(
        controller.reorder(&unknown, &known, &mut store),
        ReorderOutcome::Ignored
    );
    assert_eq!(
        controller.reorder(&known, &unknown, &mut store),
        ReorderOutcome::Ignored
    );
    assert_eq!(controller.sequence(), &before);
    assert!(!store.is_complete());
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn moving_last_to_front_and_back_restores_the_original_order() {
    let mut sequence = StageSequence::scrambled();
    let original = sequence.clone();
    let last = sequence.cards()[2].id.clone();
    let first = sequence.cards()[0].id.clone();

    assert!(sequence.reorder(&last, &first).is_applied());
    assert_eq!(sequence.position_of(&last), Some(0));

    // Inverse move: the displaced former occupant of position 2 is the
    // round-trip target.
    let occupant = sequence.cards()[2].id.clone();
    assert!(sequence.reorder(&last, &occupant).is_applied());
    assert_eq!(sequence, original);
}

#[test]
fn solving_the_sequence_publishes_completion_and_unlocks_the_gate() {
    let mut store = UiStore::new();
    let rx = store.subscribe();
    let mut controller = SequenceController::mount(&mut store);
    while rx.try_recv().is_ok() {}

    assert_eq!(
        labels_of(controller.sequence()),
        vec![StageLabel::Solution, StageLabel::Problem, StageLabel::Result]
    );
    assert_eq!(GateView::from_store(&store), GateView::Hint);

    let solution = StageCardId::new("solution");
    let problem = StageCardId::new("problem");
    assert!(controller.reorder(&solution, &problem, &mut store).is_applied());

    assert_eq!(
        labels_of(controller.sequence()),
        vec![StageLabel::Problem, StageLabel::Solution, StageLabel::Result]
    );
    assert!(controller.sequence().is_solved());
    assert!(store.is_complete());
    assert_eq!(rx.try_recv(), Ok(StoreEvent::CompletionChanged(true)));
    assert_eq!(GateView::from_store(&store), GateView::Proceed);
}

#[test]
fn breaking_the_solved_order_reverts_the_gate_to_the_hint() {
    let mut store = UiStore::new();
    let mut controller = SequenceController::mount_with(
        sequence_with([StageLabel::Problem, StageLabel::Solution, StageLabel::Result]),
        &mut store,
    );
    assert!(store.is_complete());
    let rx = store.subscribe();

    // Move the trailing card to the front.
    let result = controller.sequence().cards()[2].id.clone();
    let problem = controller.sequence().cards()[0].id.clone();
    assert!(controller.reorder(&result, &problem, &mut store).is_applied());

    assert_eq!(
        labels_of(controller.sequence()),
        vec![StageLabel::Result, StageLabel::Problem, StageLabel::Solution]
    );
    assert!(!controller.sequence().is_solved());
    assert!(!store.is_complete());
    assert_eq!(rx.try_recv(), Ok(StoreEvent::CompletionChanged(false)));
    assert_eq!(GateView::from_store(&store), GateView::Hint);
}

#[test]
fn abandoned_drag_produces_no_request_and_changes_nothing() {
    let mut store = UiStore::new();
    let rx = store.subscribe();
    let mut controller = SequenceController::mount(&mut store);
    while rx.try_recv().is_ok() {}
    let before = controller.sequence().clone();

    let mut gesture = DragGesture::new();
    gesture.begin(before.cards()[0].id.clone());
    assert!(gesture.is_dragging());
    assert_eq!(gesture.release(None), None);
    assert!(!gesture.is_dragging());

    // Releasing over the dragged card itself is equally inert.
    gesture.begin(before.cards()[1].id.clone());
    assert_eq!(gesture.release(Some(&before.cards()[1].id)), None);
    assert!(!gesture.is_dragging());

    assert_eq!(controller.sequence(), &before);
    assert!(!store.is_complete());
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn released_drag_over_another_card_yields_the_reorder_request() {
    let sequence = StageSequence::scrambled();
    let source = sequence.cards()[0].id.clone();
    let target = sequence.cards()[2].id.clone();

    let mut gesture = DragGesture::new();
    gesture.begin(source.clone());
    assert_eq!(gesture.active_card(), Some(&source));

    let request = gesture.release(Some(&target)).expect("commit expected");
    assert_eq!(request.source, source);
    assert_eq!(request.target, target);
    assert!(!gesture.is_dragging());
}

#[test]
fn cancelled_gesture_returns_to_idle() {
    let mut gesture = DragGesture::new();
    gesture.begin(StageCardId::new("solution"));
    gesture.cancel();
    assert!(!gesture.is_dragging());
    assert_eq!(gesture.release(Some(&StageCardId::new("problem"))), None);
}

#[test]
fn store_broadcasts_every_change_to_all_subscribers() {
    let mut store = UiStore::new();
    let first = store.subscribe();
    let second = store.subscribe();

    store.set_complete(true);
    store.set_active_case(Some(CaseStudyId::new("ai-mektep")));

    for rx in [&first, &second] {
        assert_eq!(rx.try_recv(), Ok(StoreEvent::CompletionChanged(true)));
        assert_eq!(
            rx.try_recv(),
            Ok(StoreEvent::ActiveCaseChanged(Some(CaseStudyId::new(
                "ai-mektep"
            ))))
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }
    assert!(store.is_complete());
    assert_eq!(store.active_case(), Some(&CaseStudyId::new("ai-mektep")));
}

#[test]
fn store_skips_notifications_for_unchanged_values() {
    let mut store = UiStore::new();
    let rx = store.subscribe();
    store.set_complete(false);
    store.set_active_case(None);
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn store_prunes_dropped_subscribers_on_broadcast() {
    let mut store = UiStore::new();
    let kept = store.subscribe();
    let dropped = store.subscribe();
    assert_eq!(store.subscriber_count(), 2);

    drop(dropped);
    store.set_complete(true);
    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(kept.try_recv(), Ok(StoreEvent::CompletionChanged(true)));
}

#[test]
fn mount_publishes_the_derived_state_for_an_already_solved_sequence() {
    let mut store = UiStore::new();
    let rx = store.subscribe();
    let _controller = SequenceController::mount_with(
        sequence_with([StageLabel::Problem, StageLabel::Solution, StageLabel::Result]),
        &mut store,
    );
    assert_eq!(rx.try_recv(), Ok(StoreEvent::CompletionChanged(true)));
    assert!(store.is_complete());
}
