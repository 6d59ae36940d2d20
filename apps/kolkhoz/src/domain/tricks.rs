use tracing::debug;

use crate::domain::state::{next_player, GameState, Phase, PlayerId, TrickRecord};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether the trick now holds one card per player.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
}

/// Whether the card at `card_index` may be played into `trick`.
///
/// Leading is unrestricted. Otherwise a player holding the lead suit must
/// follow it; a player without it may play anything.
pub fn is_valid_play(hand: &[Card], trick: &[(PlayerId, Card)], card_index: usize) -> bool {
    let Some(card) = hand.get(card_index) else {
        return false;
    };
    match trick.first() {
        None => true,
        Some(&(_, lead_card)) => {
            card.suit == lead_card.suit || !hand_has_suit(hand, lead_card.suit)
        }
    }
}

/// Indices into `hand` that are legal to play, ascending.
pub fn legal_card_indices(hand: &[Card], trick: &[(PlayerId, Card)]) -> Vec<usize> {
    (0..hand.len())
        .filter(|&i| is_valid_play(hand, trick, i))
        .collect()
}

/// Winner of a trick: highest trump if any trump was played, otherwise the
/// highest card of the lead suit.
///
/// Panics on an empty trick; resolving one is a sequencing fault.
pub fn resolve_trick(trick: &[(PlayerId, Card)], trump: Option<Suit>) -> PlayerId {
    assert!(!trick.is_empty(), "resolve_trick called on an empty trick");
    let lead = trick[0].1.suit;
    let mut best = trick[0];
    for &play in &trick[1..] {
        if card_beats(play.1, best.1, lead, trump) {
            best = play;
        }
    }
    best.0
}

/// Record a resolved trick and hand the lead to its winner.
pub fn apply_trick_result(state: &mut GameState, winner: PlayerId) {
    let plays = std::mem::take(&mut state.current_trick);
    state.trick_history.push(TrickRecord {
        year: state.year,
        plays: plays.clone(),
        winner,
    });
    state.last_trick = plays;
    state.last_winner = Some(winner);
    state.trick_count += 1;
    state.lead = winner;

    for p in state.players.iter_mut() {
        p.brigade_leader = p.index == winner;
    }
    let w = &mut state.players[winner as usize];
    w.has_won_trick_this_year = true;
    w.medals += 1;
}

/// Play the card at `card_index` from `who`'s hand into the current trick,
/// enforcing phase, turn and follow-suit. Resolves the trick once complete.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card_index: usize,
) -> Result<PlayCardResult, DomainError> {
    if state.phase != Phase::Trick {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Cards can only be played during a trick",
        ));
    }
    if state.turn != Some(who) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    let hand = &state.players[who as usize].hand;
    if card_index >= hand.len() {
        return Err(DomainError::validation(
            ValidationKind::CardIndexOutOfRange,
            format!("Card index {card_index} out of range for hand of {}", hand.len()),
        ));
    }
    if !is_valid_play(hand, &state.current_trick, card_index) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            "Must follow suit",
        ));
    }

    let card = state.players[who as usize].hand.remove(card_index);
    state.current_trick.push((who, card));
    debug!(seat = who, card = %card, "card played");

    let n = state.num_players();
    if state.current_trick.len() < n {
        state.turn = Some(next_player(who, n));
        return Ok(PlayCardResult {
            trick_completed: false,
            trick_winner: None,
        });
    }

    assert_eq!(
        state.current_trick.len(),
        n,
        "trick holds more cards than players"
    );
    let winner = resolve_trick(&state.current_trick, state.trump);
    debug!(winner, trick_count = state.trick_count + 1, "trick resolved");
    apply_trick_result(state, winner);
    state.turn = Some(winner);

    Ok(PlayCardResult {
        trick_completed: true,
        trick_winner: Some(winner),
    })
}
