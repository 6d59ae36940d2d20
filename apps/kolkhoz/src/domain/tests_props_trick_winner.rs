use proptest::prelude::*;

use crate::domain::domain_prop_helpers::oracle_trick_winner;
use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the domain winner matches the independent oracle for any
    /// complete trick, with or without trump.
    #[test]
    fn prop_trick_winner_matches_oracle(
        (plays, trump) in test_gens::complete_trick(),
    ) {
        let winner = resolve_trick(&plays, trump);
        let oracle = plays[oracle_trick_winner(&plays, trump)].0;
        prop_assert_eq!(winner, oracle,
            "winner mismatch: trump={:?}, plays={:?}", trump, plays);
    }

    /// Property: without any trump in the trick, the winner played the lead
    /// suit and holds its highest value.
    #[test]
    fn prop_no_trump_played_lead_suit_wins(
        (plays, trump) in test_gens::complete_trick(),
    ) {
        prop_assume!(!plays.iter().any(|(_, c)| Some(c.suit) == trump));
        let lead = plays[0].1.suit;
        let winner = resolve_trick(&plays, trump);
        let card = plays.iter().find(|(p, _)| *p == winner).unwrap().1;

        prop_assert_eq!(card.suit, lead);
        for (_, c) in plays.iter().filter(|(_, c)| c.suit == lead) {
            prop_assert!(card.value >= c.value);
        }
    }

    /// Property: when trump was played, the highest trump wins.
    #[test]
    fn prop_highest_trump_wins(
        (plays, trump) in test_gens::complete_trick(),
    ) {
        let Some(t) = trump else { return Ok(()); };
        prop_assume!(plays.iter().any(|(_, c)| c.suit == t));

        let winner = resolve_trick(&plays, trump);
        let card = plays.iter().find(|(p, _)| *p == winner).unwrap().1;
        let best = plays.iter().filter(|(_, c)| c.suit == t).map(|(_, c)| c.value).max().unwrap();

        prop_assert_eq!(card.suit, t);
        prop_assert_eq!(card.value, best);
    }

    /// Property: the winner is always one of the seats that played.
    #[test]
    fn prop_winner_is_a_player_in_trick(
        (plays, trump) in test_gens::complete_trick(),
    ) {
        let winner = resolve_trick(&plays, trump);
        prop_assert!(plays.iter().any(|(p, _)| *p == winner));
    }
}
