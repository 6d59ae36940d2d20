use proptest::prelude::*;

use crate::domain::assignment::{
    apply_assignments, generate_auto_assignment, suits_in_trick, validate_assignments,
    work_hours_for, Assignments,
};
use crate::domain::test_state_helpers::bare_state;
use crate::domain::variants::Variants;
use crate::domain::{test_gens, test_prelude, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any assignment built from suits present in the trick is
    /// accepted, and applying it conserves cards and work hours.
    #[test]
    fn prop_assignment_conserves_cards_and_hours(
        (plays, trump, choices) in test_gens::trick_with_targets(),
    ) {
        let suits = suits_in_trick(&plays);
        let assignments: Assignments = plays
            .iter()
            .zip(&choices)
            .map(|(&(_, card), &i)| (card, suits[i % suits.len()]))
            .collect();
        prop_assert!(validate_assignments(&plays, &assignments).is_ok());

        let variants = Variants::default();
        let mut state = bare_state(plays.len(), variants);
        state.trump = trump;
        let winner = plays[0].0;
        apply_assignments(&mut state, winner, &assignments);

        let expected_hours: u32 = plays
            .iter()
            .map(|&(_, c)| work_hours_for(c, trump, &variants))
            .sum();
        let total_hours: u32 = state.jobs.work_hours.values().sum();
        prop_assert_eq!(total_hours, expected_hours);

        let bucketed: usize = state.jobs.buckets.values().map(Vec::len).sum();
        prop_assert_eq!(bucketed, plays.len());
        for (card, target) in &assignments {
            prop_assert!(state.jobs.buckets[*target].contains(card));
        }
    }

    /// Property: a trick is auto-assigned exactly when it holds one suit, and
    /// then every card goes to that suit.
    #[test]
    fn prop_auto_assignment_iff_single_suit(
        (plays, _trump) in test_gens::complete_trick(),
    ) {
        let suits = suits_in_trick(&plays);
        match generate_auto_assignment(&plays) {
            Some(auto) => {
                prop_assert_eq!(suits.len(), 1);
                prop_assert_eq!(auto.len(), plays.len());
                prop_assert!(auto.values().all(|&s| s == suits[0]));
            }
            None => prop_assert!(suits.len() > 1),
        }
    }

    /// Property: a target suit absent from the trick is always rejected.
    #[test]
    fn prop_absent_target_rejected(
        (plays, _trump) in test_gens::complete_trick(),
    ) {
        let present = suits_in_trick(&plays);
        if let Some(absent) = Suit::ALL.into_iter().find(|s| !present.contains(s)) {
            let assignments: Assignments = plays.iter().map(|&(_, c)| (c, absent)).collect();
            prop_assert!(validate_assignments(&plays, &assignments).is_err());
        }
    }
}
