use crate::domain::assignment::{
    apply_assignments, complete_jobs, generate_auto_assignment, validate_assignments, validate_target,
    work_hours_for, Assignments,
};
use crate::domain::state::RevealedJob;
use crate::domain::test_state_helpers::{bare_state, c, cards, trick};
use crate::domain::variants::{DeckMode, Variants};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn full_deck() -> Variants {
    Variants {
        deck: DeckMode::Full,
        ..Variants::default()
    }
}

fn assign(pairs: &[(&str, Suit)]) -> Assignments {
    pairs.iter().map(|&(k, s)| (c(k), s)).collect()
}

#[test]
fn below_threshold_accumulates_only() {
    // Scenario C
    let mut state = bare_state(4, Variants::default());
    let completed = apply_assignments(
        &mut state,
        0,
        &assign(&[("Hearts-7", Suit::Hearts), ("Hearts-10", Suit::Hearts)]),
    );
    assert_eq!(state.jobs.work_hours[Suit::Hearts], 17);
    assert!(completed.is_empty());
    assert!(state.jobs.claimed.is_empty());
    assert_eq!(state.jobs.buckets[Suit::Hearts].len(), 2);
}

#[test]
fn reaching_threshold_claims_and_pays_reward() {
    // Scenario D (full deck)
    let mut state = bare_state(4, full_deck());
    state.jobs.work_hours[Suit::Hearts] = 30;
    state.jobs.revealed[Suit::Hearts] = Some(RevealedJob::Rewards(vec![c("Hearts-3")]));

    let completed = apply_assignments(&mut state, 2, &assign(&[("Hearts-10", Suit::Hearts)]));

    assert_eq!(completed, vec![Suit::Hearts]);
    assert_eq!(state.jobs.work_hours[Suit::Hearts], 40);
    assert!(state.jobs.claimed.contains(&Suit::Hearts));
    assert_eq!(state.players[2].plot.revealed, vec![c("Hearts-3")]);
}

#[test]
fn completion_checked_after_whole_trick() {
    let mut state = bare_state(4, full_deck());
    state.jobs.work_hours[Suit::Clubs] = 25;
    state.jobs.revealed[Suit::Clubs] = Some(RevealedJob::Rewards(vec![c("Clubs-2")]));
    let completed = apply_assignments(
        &mut state,
        1,
        &assign(&[("Clubs-9", Suit::Clubs), ("Hearts-11", Suit::Clubs)]),
    );
    assert_eq!(completed, vec![Suit::Clubs]);
    assert_eq!(state.jobs.work_hours[Suit::Clubs], 45);
    assert_eq!(state.players[1].plot.revealed, vec![c("Clubs-2")]);
}

#[test]
fn claimed_job_pays_only_once() {
    let mut state = bare_state(4, full_deck());
    state.jobs.work_hours[Suit::Hearts] = 39;
    state.jobs.revealed[Suit::Hearts] = Some(RevealedJob::Rewards(vec![c("Hearts-1")]));
    apply_assignments(&mut state, 0, &assign(&[("Hearts-6", Suit::Hearts)]));
    let again = apply_assignments(&mut state, 1, &assign(&[("Hearts-7", Suit::Hearts)]));

    assert!(again.is_empty());
    assert!(complete_jobs(&mut state, 1).is_empty());
    assert_eq!(state.players[0].plot.revealed.len(), 1);
    assert!(state.players[1].plot.revealed.is_empty());
}

#[test]
fn several_jobs_complete_in_suit_order() {
    let mut state = bare_state(4, Variants::default());
    state.jobs.work_hours[Suit::Spades] = 35;
    state.jobs.work_hours[Suit::Diamonds] = 35;
    let completed = apply_assignments(
        &mut state,
        0,
        &assign(&[("Spades-8", Suit::Spades), ("Diamonds-9", Suit::Diamonds)]),
    );
    assert_eq!(completed, vec![Suit::Diamonds, Suit::Spades]);
}

#[test]
fn trump_jack_does_no_work() {
    let variants = Variants::default();
    assert_eq!(work_hours_for(c("Clubs-11"), Some(Suit::Clubs), &variants), 0);
    assert_eq!(work_hours_for(c("Hearts-11"), Some(Suit::Clubs), &variants), 11);
    assert_eq!(work_hours_for(c("Clubs-11"), None, &variants), 11);

    let plain = Variants {
        face_card_effects: false,
        ..Variants::default()
    };
    assert_eq!(work_hours_for(c("Clubs-11"), Some(Suit::Clubs), &plain), 11);
}

#[test]
fn reduced_deck_claims_without_payout() {
    let mut state = bare_state(4, Variants::default());
    state.jobs.work_hours[Suit::Hearts] = 35;
    apply_assignments(&mut state, 0, &assign(&[("Hearts-9", Suit::Hearts)]));
    assert!(state.jobs.claimed.contains(&Suit::Hearts));
    assert!(state.players[0].plot.revealed.is_empty());
    assert!(state.players[0].plot.stacks.is_empty());
}

#[test]
fn northern_style_claims_without_payout() {
    let mut state = bare_state(4, Variants {
        northern_style: true,
        ..full_deck()
    });
    state.jobs.work_hours[Suit::Hearts] = 35;
    state.jobs.revealed[Suit::Hearts] = Some(RevealedJob::Rewards(vec![c("Hearts-4")]));
    apply_assignments(&mut state, 0, &assign(&[("Hearts-9", Suit::Hearts)]));
    assert!(state.jobs.claimed.contains(&Suit::Hearts));
    assert!(state.players[0].plot.revealed.is_empty());
}

#[test]
fn stacking_turns_bucket_into_stack() {
    let mut state = bare_state(4, Variants {
        stacking: true,
        ..Variants::default()
    });
    state.jobs.buckets[Suit::Hearts] = cards(&["Hearts-13", "Clubs-12"]);
    state.jobs.work_hours[Suit::Hearts] = 25;

    apply_assignments(
        &mut state,
        3,
        &assign(&[("Spades-7", Suit::Hearts), ("Hearts-9", Suit::Hearts)]),
    );

    assert!(state.jobs.buckets[Suit::Hearts].is_empty());
    let stacks = &state.players[3].plot.stacks;
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].suit, Suit::Hearts);
    assert_eq!(stacks[0].revealed, vec![c("Spades-7")]);
    assert_eq!(stacks[0].hidden, cards(&["Hearts-9", "Clubs-12", "Hearts-13"]));
}

#[test]
fn accumulated_rewards_paid_and_buffer_cleared() {
    let mut state = bare_state(4, Variants {
        accumulate_jobs: true,
        ..full_deck()
    });
    state.jobs.accumulated[Suit::Diamonds] = cards(&["Diamonds-2"]);
    state.jobs.revealed[Suit::Diamonds] = Some(RevealedJob::Rewards(cards(&["Diamonds-2", "Diamonds-5"])));
    state.jobs.work_hours[Suit::Diamonds] = 30;

    apply_assignments(&mut state, 1, &assign(&[("Diamonds-13", Suit::Diamonds)]));

    assert_eq!(state.players[1].plot.revealed, cards(&["Diamonds-2", "Diamonds-5"]));
    assert!(state.jobs.accumulated[Suit::Diamonds].is_empty());
}

#[test]
fn auto_assignment_for_single_suit_trick() {
    // Scenario E
    let t = trick(&[(0, "Hearts-7"), (1, "Hearts-10"), (2, "Hearts-8"), (3, "Hearts-13")]);
    let auto = generate_auto_assignment(&t).expect("single suit");
    assert_eq!(auto.len(), 4);
    assert!(auto.values().all(|&s| s == Suit::Hearts));
}

#[test]
fn no_auto_assignment_for_mixed_trick() {
    let t = trick(&[(0, "Hearts-7"), (1, "Clubs-10")]);
    assert!(generate_auto_assignment(&t).is_none());
    assert!(generate_auto_assignment(&[]).is_none());
}

#[test]
fn targets_restricted_to_suits_in_trick() {
    let t = trick(&[(0, "Hearts-7"), (1, "Clubs-10")]);
    assert!(validate_target(&t, c("Hearts-7"), Suit::Clubs).is_ok());
    let err = validate_target(&t, c("Hearts-7"), Suit::Spades).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::AssignmentTargetNotInTrick));
    let err = validate_target(&t, c("Hearts-8"), Suit::Hearts).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::CardNotInTrick));
}

#[test]
fn incomplete_assignment_rejected() {
    let t = trick(&[(0, "Hearts-7"), (1, "Clubs-10")]);
    let err = validate_assignments(&t, &assign(&[("Hearts-7", Suit::Hearts)])).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::IncompleteAssignments));
    assert!(validate_assignments(&t, &assign(&[("Hearts-7", Suit::Hearts), ("Clubs-10", Suit::Hearts)])).is_ok());
}
