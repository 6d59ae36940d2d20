use std::ops::RangeInclusive;

use crate::domain::Card;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Work hours needed to complete a job.
pub const THRESHOLD: u32 = 40;

/// Length of the Five-Year Plan.
pub const MAX_YEARS: u8 = 5;

/// Cards dealt to each player in a normal year.
pub const HAND_SIZE: usize = 5;

pub const TRICKS_PER_YEAR: u8 = 4;
pub const FAMINE_TRICKS: u8 = 3;

/// Ranks of the worker (trick-playing) deck.
pub const WORKER_VALUES: RangeInclusive<u8> = 6..=13;

/// Ranks of the full-deck job reward piles, one reward per year.
pub const REWARD_VALUES: RangeInclusive<u8> = 1..=5;

pub fn is_worker_card(card: Card) -> bool {
    WORKER_VALUES.contains(&card.value)
}

pub const HUMAN_NAME: &str = "Player";

pub const PLAYER_NAMES: [&str; 6] = [
    "Ivan",
    "Dmitri",
    "Alyosha",
    "Fyodor",
    "Grushenka",
    "Katerina",
];

/// Trick quota for a year. Famine years play one trick fewer, and never
/// more tricks than there are cards in hand.
pub fn tricks_per_year(is_famine: bool, hand_size: usize) -> u8 {
    let quota = if is_famine {
        FAMINE_TRICKS
    } else {
        TRICKS_PER_YEAR
    };
    quota.min(u8::try_from(hand_size).unwrap_or(u8::MAX))
}

pub fn valid_player_count(num_players: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players)
}
