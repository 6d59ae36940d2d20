use crate::domain::snapshot::{snapshot_for, CardSlot, Viewer};
use crate::domain::state::{Phase, Stack};
use crate::domain::test_state_helpers::{bare_state, c, cards};
use crate::domain::variants::Variants;
use crate::domain::Suit;

fn table() -> crate::domain::GameState {
    let mut state = bare_state(3, Variants::default());
    state.players[0].hand = cards(&["Hearts-6", "Clubs-7"]);
    state.players[1].hand = cards(&["Spades-9"]);
    state.players[1].plot.hidden = cards(&["Diamonds-10"]);
    state.players[1].plot.revealed = cards(&["Hearts-13"]);
    state.players[2].plot.stacks.push(Stack {
        suit: Suit::Clubs,
        revealed: cards(&["Clubs-6"]),
        hidden: cards(&["Clubs-8", "Clubs-12"]),
    });
    state.workers_deck = cards(&["Spades-6"]);
    state
}

#[test]
fn seat_sees_own_cards_only() {
    let snap = snapshot_for(&table(), Viewer::Seat(0));

    assert_eq!(
        snap.players[0].hand,
        vec![CardSlot::Known(c("Hearts-6")), CardSlot::Known(c("Clubs-7"))]
    );
    assert_eq!(snap.players[1].hand, vec![CardSlot::Hidden]);
    assert_eq!(snap.players[1].plot.hidden, vec![CardSlot::Hidden]);
    assert_eq!(snap.players[1].plot.revealed, cards(&["Hearts-13"]));
    assert_eq!(snap.players[2].plot.stacks[0].revealed, cards(&["Clubs-6"]));
    assert_eq!(snap.players[2].plot.stacks[0].hidden, vec![CardSlot::Hidden; 2]);
    assert_eq!(snap.workers_deck_count, 1);
    assert_eq!(snap.workers_deck, None);
}

#[test]
fn spectator_sees_everything() {
    let snap = snapshot_for(&table(), Viewer::Spectator);

    assert_eq!(snap.players[1].hand, vec![CardSlot::Known(c("Spades-9"))]);
    assert_eq!(snap.players[1].plot.hidden, vec![CardSlot::Known(c("Diamonds-10"))]);
    assert_eq!(
        snap.players[2].plot.stacks[0].hidden,
        vec![CardSlot::Known(c("Clubs-8")), CardSlot::Known(c("Clubs-12"))]
    );
    assert_eq!(snap.workers_deck, Some(cards(&["Spades-6"])));
    assert!(snap.playable.is_empty());
}

#[test]
fn visible_score_counts_public_cards() {
    let snap = snapshot_for(&table(), Viewer::Seat(0));
    assert_eq!(snap.players[1].visible_score, 13);
    assert_eq!(snap.players[2].visible_score, 6);
}

#[test]
fn playable_only_for_seat_on_turn() {
    let mut state = table();
    state.current_trick = vec![(2, c("Clubs-9"))];

    let mine = snapshot_for(&state, Viewer::Seat(0));
    assert_eq!(mine.playable, vec![1]);

    let theirs = snapshot_for(&state, Viewer::Seat(1));
    assert!(theirs.playable.is_empty());

    state.phase = Phase::Planning;
    assert!(snapshot_for(&state, Viewer::Seat(0)).playable.is_empty());
}

#[test]
fn hidden_slots_serialize_as_null() {
    let snap = snapshot_for(&table(), Viewer::Seat(0));
    let json = serde_json::to_value(&snap).unwrap();

    assert_eq!(json["players"][1]["hand"], serde_json::json!([null]));
    assert_eq!(json["players"][0]["hand"][0], serde_json::json!("Hearts-6"));
    assert_eq!(json["phase"], serde_json::json!("trick"));
    assert!(json.get("workers_deck").is_none());
}
