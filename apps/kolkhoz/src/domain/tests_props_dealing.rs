use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::invariants::check_card_universe;
use crate::domain::rules::HAND_SIZE;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::bare_state;
use crate::domain::variants::Variants;
use crate::domain::year::transition_to_next_year;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: after a year transition no exiled card is dealt, hands are
    /// equal and disjoint, and famine follows from the deck size.
    #[test]
    fn prop_new_deal_respects_exile(
        n in test_gens::num_players(),
        exiled in (0usize..=32).prop_flat_map(test_gens::unique_cards),
    ) {
        let mut state = bare_state(n, Variants::default());
        state.phase = Phase::Requisition;
        state.exiled.insert(1, exiled.clone());

        prop_assert!(!transition_to_next_year(&mut state));

        let available = 32 - exiled.len();
        let famine = available < HAND_SIZE * n;
        prop_assert_eq!(state.is_famine, famine);
        let expected_hand = if famine { available / n } else { HAND_SIZE };
        prop_assert_eq!(state.hand_size, expected_hand);
        prop_assert!(usize::from(state.tricks_per_year()) <= state.hand_size);

        let exiled: HashSet<_> = exiled.into_iter().collect();
        let mut dealt = HashSet::new();
        for p in &state.players {
            prop_assert_eq!(p.hand.len(), expected_hand);
            for card in &p.hand {
                prop_assert!(!exiled.contains(card));
                prop_assert!(dealt.insert(*card));
            }
        }
        prop_assert!(state.workers_deck.iter().all(|c| !exiled.contains(c)));
        prop_assert!(check_card_universe(&state).is_ok());
    }

    /// Property: under stacking, exiled cards return to circulation.
    #[test]
    fn prop_stacking_recirculates_exiles(
        n in test_gens::num_players(),
        exiled in (0usize..=32).prop_flat_map(test_gens::unique_cards),
    ) {
        let variants = Variants { stacking: true, ..Variants::default() };
        let mut state = bare_state(n, variants);
        state.phase = Phase::Requisition;
        state.exiled.insert(1, exiled);

        transition_to_next_year(&mut state);

        let in_play: usize = state.workers_deck.len()
            + state.players.iter().map(|p| p.hand.len()).sum::<usize>();
        prop_assert_eq!(in_play, 32);
        prop_assert!(!state.is_famine);
    }
}
