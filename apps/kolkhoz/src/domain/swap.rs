//! Start-of-year exchange of one hand card with one plot card.
//!
//! Seats take turns from seat 0. Each seat may make at most one swap, may
//! undo it, and must confirm before the next seat acts.

use tracing::debug;

use crate::domain::rules::is_worker_card;
use crate::domain::state::{require_swap, GameState, Phase, PlayerId, PlotArea, SwapRecord, SwapState};
use crate::errors::domain::{DomainError, ValidationKind};

fn require_swapping_seat(state: &GameState, who: PlayerId) -> Result<SwapState, DomainError> {
    if state.phase != Phase::Swap {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No swap in progress",
        ));
    }
    let swap = require_swap(state, "swap move")?;
    if swap.seat != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Seat {} is swapping", swap.seat),
        ));
    }
    Ok(swap)
}

fn exchange(state: &mut GameState, who: PlayerId, record: SwapRecord) {
    let player = &mut state.players[who as usize];
    let plot_cards = match record.area {
        PlotArea::Hidden => &mut player.plot.hidden,
        PlotArea::Revealed => &mut player.plot.revealed,
    };
    std::mem::swap(&mut plot_cards[record.plot_index], &mut player.hand[record.hand_index]);
}

/// Exchange `hand[hand_index]` with the plot card at `plot_index` in `area`.
pub fn swap_card(
    state: &mut GameState,
    who: PlayerId,
    plot_index: usize,
    hand_index: usize,
    area: PlotArea,
) -> Result<(), DomainError> {
    let swap = require_swapping_seat(state, who)?;
    if swap.made.is_some() {
        return Err(DomainError::validation(
            ValidationKind::SwapAlreadyMade,
            "Only one swap per year",
        ));
    }
    let player = state.player(who);
    let plot_cards = match area {
        PlotArea::Hidden => &player.plot.hidden,
        PlotArea::Revealed => &player.plot.revealed,
    };
    let Some(&plot_card) = plot_cards.get(plot_index) else {
        return Err(DomainError::validation(
            ValidationKind::SwapIndexOutOfRange,
            format!("plot index {plot_index} out of range"),
        ));
    };
    if hand_index >= player.hand.len() {
        return Err(DomainError::validation(
            ValidationKind::SwapIndexOutOfRange,
            format!("hand index {hand_index} out of range"),
        ));
    }
    // Job rewards stay in the plot; only workers go back into play.
    if !is_worker_card(plot_card) {
        return Err(DomainError::validation(
            ValidationKind::SwapRewardCard,
            format!("{plot_card} is a job reward"),
        ));
    }

    let record = SwapRecord {
        plot_index,
        hand_index,
        area,
    };
    exchange(state, who, record);
    state.swap = Some(SwapState {
        seat: who,
        made: Some(record),
    });
    debug!(seat = who, ?area, plot_index, hand_index, "cards swapped");
    Ok(())
}

/// Reverse this seat's unconfirmed swap.
pub fn undo_swap(state: &mut GameState, who: PlayerId) -> Result<(), DomainError> {
    let swap = require_swapping_seat(state, who)?;
    let Some(record) = swap.made else {
        return Err(DomainError::validation(
            ValidationKind::NoSwapToUndo,
            "Nothing to undo",
        ));
    };
    exchange(state, who, record);
    state.swap = Some(SwapState {
        seat: who,
        made: None,
    });
    Ok(())
}

/// Lock in this seat's choice. Returns `true` once every seat has confirmed.
pub fn confirm_swap(state: &mut GameState, who: PlayerId) -> Result<bool, DomainError> {
    require_swapping_seat(state, who)?;
    let next = who as usize + 1;
    if next >= state.num_players() {
        state.swap = None;
        return Ok(true);
    }
    let next = next as PlayerId;
    state.swap = Some(SwapState {
        seat: next,
        made: None,
    });
    state.turn = Some(next);
    Ok(false)
}
