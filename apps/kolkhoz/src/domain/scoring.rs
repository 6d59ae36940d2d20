use serde::{Deserialize, Serialize};

use crate::domain::state::{Player, PlayerId};
use crate::domain::variants::Variants;

/// Final standings. Lowest score wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Final score per seat.
    pub scores: Vec<u32>,
}

/// Score from public information: revealed plot cards, stack face-up cards
/// and, under the medals variant, banked plus current trick wins.
pub fn visible_score(player: &Player, variants: &Variants) -> u32 {
    let plot = &player.plot;
    let mut score: u32 = plot.revealed.iter().map(|c| u32::from(c.value)).sum();
    if variants.medals_count {
        score += plot.medals + player.medals;
    }
    score += plot
        .stacks
        .iter()
        .flat_map(|s| s.revealed.iter())
        .map(|c| u32::from(c.value))
        .sum::<u32>();
    score
}

/// Visible score plus hidden plot cards; only meaningful at game end.
pub fn final_score(player: &Player, variants: &Variants) -> u32 {
    visible_score(player, variants)
        + player
            .plot
            .hidden
            .iter()
            .map(|c| u32::from(c.value))
            .sum::<u32>()
}

/// Lowest final score wins; ties go to the lowest seat.
pub fn determine_winner(players: &[Player], variants: &Variants) -> GameResult {
    let scores: Vec<u32> = players.iter().map(|p| final_score(p, variants)).collect();
    let mut winner = 0;
    for (idx, &score) in scores.iter().enumerate() {
        if score < scores[winner] {
            winner = idx;
        }
    }
    GameResult {
        winner: winner as PlayerId,
        scores,
    }
}
