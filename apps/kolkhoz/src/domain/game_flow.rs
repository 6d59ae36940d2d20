//! Phase/turn state machine: game setup, the move interface and phase entry.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::assignment::{
    add_work, apply_assignments, complete_jobs, generate_auto_assignment, validate_assignments,
    validate_target, Assignments,
};
use crate::domain::dealing::prepare_job_piles;
use crate::domain::requisition::perform_requisition;
use crate::domain::rules::{HUMAN_NAME, PLAYER_NAMES};
use crate::domain::scoring::determine_winner;
use crate::domain::state::{
    require_last_winner, GameState, JobBoard, Phase, Player, PlayerId, PlotArea, SwapState,
};
use crate::domain::swap::{confirm_swap, swap_card, undo_swap};
use crate::domain::tricks::play_card;
use crate::domain::variants::GameConfig;
use crate::domain::year::{deal_year, transition_to_next_year};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// A player action submitted at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Move {
    /// Choose the year's trump; `None` draws one at random.
    SetTrump { suit: Option<Suit> },
    PlayCard { card_index: usize },
    AssignCard { card: Card, target: Suit },
    SubmitAssignments,
    ApplySingleAssignment { card: Card, target: Suit },
    SwapCard {
        plot_index: usize,
        hand_index: usize,
        area: PlotArea,
    },
    ConfirmSwap,
    UndoSwap,
    ContinueToNextYear,
}

/// What an accepted move led to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub trick_winner: Option<PlayerId>,
    pub completed_jobs: Vec<Suit>,
    pub phase_changed: bool,
}

/// Create a game from `config` and deal the first year.
pub fn new_game(config: &GameConfig) -> Result<GameState, DomainError> {
    config.validate()?;
    let n = config.num_players as usize;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let humans = config.human_seats.len();
    let mut names: Vec<&str> = PLAYER_NAMES.to_vec();
    let mut players = Vec::with_capacity(n);
    for i in 0..n as PlayerId {
        if config.human_seats.contains(&i) {
            let name = if humans > 1 {
                format!("{HUMAN_NAME} {}", i + 1)
            } else {
                HUMAN_NAME.to_string()
            };
            players.push(Player::new(i, true, name));
        } else {
            let name = names.remove(rng.random_range(0..names.len()));
            players.push(Player::new(i, false, name));
        }
    }

    let lead = rng.random_range(0..n) as PlayerId;
    let piles = prepare_job_piles(&config.variants, &mut rng);

    let mut state = GameState {
        version: 0,
        variants: config.variants,
        phase: Phase::Planning,
        year: 1,
        players,
        turn: None,
        lead,
        trump_selector: lead,
        trump: None,
        is_famine: false,
        hand_size: 0,
        trick_count: 0,
        current_trick: Vec::new(),
        last_trick: Vec::new(),
        last_winner: None,
        trick_history: Vec::new(),
        jobs: JobBoard {
            piles,
            ..JobBoard::default()
        },
        workers_deck: Vec::new(),
        exiled: BTreeMap::new(),
        pending_assignments: Assignments::new(),
        ai_assignment_queue: Vec::new(),
        swap: None,
        requisition_log: BTreeMap::new(),
        result: None,
        rng,
    };
    deal_year(&mut state);
    info!(
        players = n,
        seed = config.seed,
        lead,
        famine = state.is_famine,
        "game created"
    );
    start_year(&mut state);
    Ok(state)
}

/// Apply one move for `actor`. A rejected move leaves the state untouched.
pub fn apply_move(state: &mut GameState, actor: PlayerId, mv: Move) -> Result<MoveOutcome, DomainError> {
    let phase_before = state.phase;
    let result = dispatch(state, actor, &mv);
    match &result {
        Ok(outcome) => {
            state.version += 1;
            debug!(
                seat = actor,
                ?mv,
                phase = ?state.phase,
                version = state.version,
                trick_winner = ?outcome.trick_winner,
                "move applied"
            );
        }
        Err(err) => {
            warn!(seat = actor, ?mv, kind = ?err.kind(), error = %err, "move rejected");
        }
    }
    result.map(|mut outcome| {
        outcome.phase_changed = state.phase != phase_before;
        outcome
    })
}

fn dispatch(state: &mut GameState, actor: PlayerId, mv: &Move) -> Result<MoveOutcome, DomainError> {
    if state.phase == Phase::GameOver {
        return Err(DomainError::validation(ValidationKind::GameOver, "The game is over"));
    }
    if actor as usize >= state.num_players() {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Unknown seat {actor}"),
        ));
    }

    let mut outcome = MoveOutcome::default();
    match *mv {
        Move::SetTrump { suit } => set_trump(state, actor, suit)?,
        Move::PlayCard { card_index } => {
            let played = play_card(state, actor, card_index)?;
            if let Some(winner) = played.trick_winner {
                outcome.trick_winner = Some(winner);
                outcome.completed_jobs = after_trick(state, winner);
            }
        }
        Move::AssignCard { card, target } => assign_card(state, actor, card, target)?,
        Move::SubmitAssignments => outcome.completed_jobs = submit_assignments(state, actor)?,
        Move::ApplySingleAssignment { card, target } => {
            outcome.completed_jobs = apply_single_assignment(state, card, target)?
        }
        Move::SwapCard {
            plot_index,
            hand_index,
            area,
        } => swap_card(state, actor, plot_index, hand_index, area)?,
        Move::ConfirmSwap => {
            if confirm_swap(state, actor)? {
                enter_trick(state);
            }
        }
        Move::UndoSwap => undo_swap(state, actor)?,
        Move::ContinueToNextYear => continue_to_next_year(state)?,
    }
    Ok(outcome)
}

fn require_phase(state: &GameState, phase: Phase) -> Result<(), DomainError> {
    if state.phase != phase {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Expected phase {phase:?}, game is in {:?}", state.phase),
        ));
    }
    Ok(())
}

fn require_turn(state: &GameState, who: PlayerId) -> Result<(), DomainError> {
    if state.turn != Some(who) {
        return Err(DomainError::validation(ValidationKind::OutOfTurn, "Out of turn"));
    }
    Ok(())
}

fn set_trump(state: &mut GameState, who: PlayerId, suit: Option<Suit>) -> Result<(), DomainError> {
    require_phase(state, Phase::Planning)?;
    require_turn(state, who)?;

    let trump = match suit {
        Some(s) => s,
        None => {
            let mut available: Vec<Suit> = state
                .jobs
                .piles
                .iter()
                .filter(|(_, pile)| !pile.is_empty())
                .map(|(s, _)| s)
                .collect();
            if available.is_empty() {
                available = Suit::ALL.to_vec();
            }
            available[state.rng.random_range(0..available.len())]
        }
    };
    state.trump = Some(trump);
    info!(year = state.year, seat = who, trump = %trump, "trump chosen");
    after_planning(state);
    Ok(())
}

fn assign_card(state: &mut GameState, who: PlayerId, card: Card, target: Suit) -> Result<(), DomainError> {
    require_phase(state, Phase::Assignment)?;
    require_turn(state, who)?;
    validate_target(&state.last_trick, card, target)?;
    state.pending_assignments.insert(card, target);
    Ok(())
}

fn submit_assignments(state: &mut GameState, who: PlayerId) -> Result<Vec<Suit>, DomainError> {
    require_phase(state, Phase::Assignment)?;
    require_turn(state, who)?;
    validate_assignments(&state.last_trick, &state.pending_assignments)?;
    let winner = require_last_winner(state, "submit_assignments")?;

    let assignments = std::mem::take(&mut state.pending_assignments);
    if state.player(winner).is_human {
        let completed = apply_assignments(state, winner, &assignments);
        after_assignment(state);
        return Ok(completed);
    }

    state.ai_assignment_queue = assignments.into_iter().collect();
    state.phase = Phase::AiAssignment;
    state.turn = None;
    debug!(queued = state.ai_assignment_queue.len(), "ai assignment deferred");
    Ok(Vec::new())
}

/// Apply one queued AI assignment. Job completion runs once the queue is
/// drained, exactly as for a synchronous submission.
fn apply_single_assignment(state: &mut GameState, card: Card, target: Suit) -> Result<Vec<Suit>, DomainError> {
    require_phase(state, Phase::AiAssignment)?;
    let Some(pos) = state
        .ai_assignment_queue
        .iter()
        .position(|&queued| queued == (card, target))
    else {
        return Err(DomainError::validation(
            ValidationKind::UnknownPendingAssignment,
            format!("{card} -> {target} is not pending"),
        ));
    };
    let winner = require_last_winner(state, "apply_single_assignment")?;

    state.ai_assignment_queue.remove(pos);
    add_work(state, card, target);
    if !state.ai_assignment_queue.is_empty() {
        return Ok(Vec::new());
    }
    let completed = complete_jobs(state, winner);
    after_assignment(state);
    Ok(completed)
}

fn continue_to_next_year(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::Requisition)?;
    if transition_to_next_year(state) {
        let result = determine_winner(&state.players, &state.variants);
        info!(winner = result.winner, scores = ?result.scores, "game over");
        state.result = Some(result);
        state.phase = Phase::GameOver;
        state.turn = None;
        return Ok(());
    }
    start_year(state);
    Ok(())
}

/// Enter the first phase of a freshly dealt year.
fn start_year(state: &mut GameState) {
    if state.hand_size == 0 {
        enter_plot_selection(state);
    } else if state.is_famine {
        state.trump = None;
        after_planning(state);
    } else {
        state.phase = Phase::Planning;
        state.turn = Some(state.trump_selector);
    }
}

fn after_planning(state: &mut GameState) {
    if state.variants.swap_in_year(state.year) {
        state.phase = Phase::Swap;
        state.swap = Some(SwapState { seat: 0, made: None });
        state.turn = Some(0);
    } else {
        enter_trick(state);
    }
}

fn enter_trick(state: &mut GameState) {
    state.phase = Phase::Trick;
    state.turn = Some(state.lead);
}

/// Route a resolved trick to assignment. A single-suit trick is assigned
/// automatically.
fn after_trick(state: &mut GameState, winner: PlayerId) -> Vec<Suit> {
    if let Some(auto) = generate_auto_assignment(&state.last_trick) {
        let completed = apply_assignments(state, winner, &auto);
        after_assignment(state);
        return completed;
    }
    state.pending_assignments.clear();
    state.phase = Phase::Assignment;
    state.turn = Some(winner);
    Vec::new()
}

fn after_assignment(state: &mut GameState) {
    if state.trick_count >= state.tricks_per_year() {
        enter_plot_selection(state);
    } else {
        enter_trick(state);
    }
}

/// Leftover hand cards go to the hidden plot, then requisition runs.
fn enter_plot_selection(state: &mut GameState) {
    state.phase = Phase::PlotSelection;
    for p in state.players.iter_mut() {
        let leftover = std::mem::take(&mut p.hand);
        p.plot.hidden.extend(leftover);
    }
    enter_requisition(state);
}

fn enter_requisition(state: &mut GameState) {
    let report = perform_requisition(state);
    state.requisition_log.insert(state.year, report);
    state.phase = Phase::Requisition;
    state.turn = None;
}
