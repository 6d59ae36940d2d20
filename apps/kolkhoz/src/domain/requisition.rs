//! Year-end requisition: for every failed job, reveal and exile at-risk plot
//! cards according to the active variant strategy.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::rules::THRESHOLD;
use crate::domain::state::{GameState, Plot, PlayerId};
use crate::domain::variants::Variants;
use crate::domain::{Card, Nomenclature, PerSuit, Suit};

/// Confiscation algorithm, chosen once from the variant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequisitionStrategy {
    /// Pooled reveal across all players; the globally highest card goes North.
    Mice,
    /// Reduced deck with stacks: only stack holders are at risk.
    ReducedStacking,
    /// Reduced deck: everyone at risk, per-player exile.
    Reduced,
    /// Full deck: trick winners at risk; matching hidden cards are revealed.
    Standard,
}

impl RequisitionStrategy {
    pub fn select(variants: &Variants) -> Self {
        if variants.mice {
            RequisitionStrategy::Mice
        } else if variants.stacks_enabled() {
            RequisitionStrategy::ReducedStacking
        } else if variants.reduced_deck() {
            RequisitionStrategy::Reduced
        } else {
            RequisitionStrategy::Standard
        }
    }
}

/// One observable step of a requisition, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RequisitionEvent {
    JobFailed { suit: Suit },
    HeroImmune { player: PlayerId },
    /// The trump Jack in the failed job's bucket went North in place of
    /// everyone's cards.
    DrunkardExiled { suit: Suit, card: Card },
    #[serde(rename_all = "camelCase")]
    Revealed {
        player: PlayerId,
        card: Card,
        from_hidden: bool,
    },
    Exiled { player: PlayerId, card: Card },
}

/// Everything a requisition did in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionReport {
    pub year: u8,
    pub strategy: RequisitionStrategy,
    pub failed_jobs: Vec<Suit>,
    /// Work hours per job at year end.
    pub work_hours: PerSuit<u32>,
    pub hero: Option<PlayerId>,
    pub events: Vec<RequisitionEvent>,
}

impl RequisitionReport {
    pub fn exiled(&self) -> impl Iterator<Item = (PlayerId, Card)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            RequisitionEvent::Exiled { player, card } => Some((player, card)),
            _ => None,
        })
    }
}

/// Trump face cards sitting in a failed job's bucket.
#[derive(Debug, Clone, Copy, Default)]
struct Modifiers {
    informant: bool,
    official: bool,
}

impl Modifiers {
    fn from_bucket(bucket: &[Card], trump: Option<Suit>, variants: &Variants) -> Self {
        if !variants.face_card_effects {
            return Self::default();
        }
        Self {
            informant: Nomenclature::Informant.present_in(bucket, trump),
            official: Nomenclature::Official.present_in(bucket, trump),
        }
    }
}

/// Run the requisition for every job below the threshold and return the
/// report. Exiled cards leave the players' plots and join the ledger for
/// the current year.
pub fn perform_requisition(state: &mut GameState) -> RequisitionReport {
    let strategy = RequisitionStrategy::select(&state.variants);
    let hero = find_hero(state);
    let mut report = RequisitionReport {
        year: state.year,
        strategy,
        failed_jobs: Vec::new(),
        work_hours: state.jobs.work_hours.clone(),
        hero,
        events: Vec::new(),
    };
    if let Some(player) = hero {
        report.events.push(RequisitionEvent::HeroImmune { player });
    }

    for suit in Suit::ALL {
        if state.jobs.work_hours[suit] >= THRESHOLD {
            continue;
        }
        report.failed_jobs.push(suit);
        report.events.push(RequisitionEvent::JobFailed { suit });

        if exile_drunkard(state, suit, &mut report.events) {
            continue;
        }
        let mods = Modifiers::from_bucket(&state.jobs.buckets[suit], state.trump, &state.variants);
        let mut ctx = Requisition {
            state: &mut *state,
            events: &mut report.events,
            suit,
            hero,
            mods,
        };
        match strategy {
            RequisitionStrategy::Mice => ctx.pooled(),
            RequisitionStrategy::ReducedStacking | RequisitionStrategy::Reduced => ctx.per_player(strategy),
            RequisitionStrategy::Standard => ctx.standard(),
        }
    }

    info!(
        year = report.year,
        ?strategy,
        failed = report.failed_jobs.len(),
        exiled = report.exiled().count(),
        "requisition performed"
    );
    report
}

/// Hero of the Soviet Union: the player who won every trick this year.
fn find_hero(state: &GameState) -> Option<PlayerId> {
    if !state.variants.hero_of_soviet_union {
        return None;
    }
    let required = u32::from(state.tricks_per_year());
    if required == 0 {
        return None;
    }
    state
        .players
        .iter()
        .find(|p| p.medals == required)
        .map(|p| p.index)
}

fn exile_drunkard(state: &mut GameState, suit: Suit, events: &mut Vec<RequisitionEvent>) -> bool {
    if !state.variants.face_card_effects {
        return false;
    }
    let trump = state.trump;
    let bucket = &mut state.jobs.buckets[suit];
    let Some(pos) = bucket
        .iter()
        .position(|&c| Nomenclature::of(c, trump) == Some(Nomenclature::Drunkard))
    else {
        return false;
    };
    let card = bucket.remove(pos);
    state.exiled.entry(state.year).or_default().push(card);
    events.push(RequisitionEvent::DrunkardExiled { suit, card });
    debug!(job = %suit, card = %card, "drunkard sent North");
    true
}

/// Where a matching at-risk card sits.
#[derive(Debug, Clone, Copy)]
enum Location {
    Hidden,
    Stack { index: usize, hidden: bool },
}

struct Requisition<'a> {
    state: &'a mut GameState,
    events: &'a mut Vec<RequisitionEvent>,
    suit: Suit,
    hero: Option<PlayerId>,
    mods: Modifiers,
}

impl Requisition<'_> {
    fn is_vulnerable(&self, strategy: RequisitionStrategy, idx: PlayerId) -> bool {
        if let Some(hero) = self.hero {
            return idx != hero;
        }
        let p = self.state.player(idx);
        match strategy {
            RequisitionStrategy::Mice | RequisitionStrategy::Reduced => true,
            RequisitionStrategy::ReducedStacking => {
                self.mods.informant || p.plot.stacks.iter().any(|s| !s.is_empty())
            }
            RequisitionStrategy::Standard => {
                self.state.variants.northern_style || p.has_won_trick_this_year || self.mods.informant
            }
        }
    }

    fn vulnerable_players(&self, strategy: RequisitionStrategy) -> Vec<PlayerId> {
        (0..self.state.num_players() as PlayerId)
            .filter(|&i| self.is_vulnerable(strategy, i))
            .collect()
    }

    /// Matching hidden cards, then matching stack cards when stacks are on.
    fn matching(&self, idx: PlayerId) -> Vec<(Card, Location)> {
        let plot = &self.state.player(idx).plot;
        let suit = self.suit;
        let mut found: Vec<(Card, Location)> = plot
            .hidden
            .iter()
            .filter(|c| c.suit == suit)
            .map(|&c| (c, Location::Hidden))
            .collect();
        if self.state.variants.stacks_enabled() {
            for (index, stack) in plot.stacks.iter().enumerate() {
                for &c in stack.revealed.iter().filter(|c| c.suit == suit) {
                    found.push((c, Location::Stack { index, hidden: false }));
                }
                for &c in stack.hidden.iter().filter(|c| c.suit == suit) {
                    found.push((c, Location::Stack { index, hidden: true }));
                }
            }
        }
        found
    }

    /// Reveal all matches with an informant, otherwise only the highest.
    fn reveal_matching(&mut self, idx: PlayerId) -> Vec<Card> {
        let mut found = self.matching(idx);
        if !self.mods.informant {
            found = found.into_iter().max_by_key(|(c, _)| c.value).into_iter().collect();
        }
        for &(card, loc) in &found {
            self.reveal(idx, card, loc);
        }
        // Drop stacks the reveal emptied.
        self.state.players[idx as usize].plot.stacks.retain(|s| !s.is_empty());
        found.into_iter().map(|(c, _)| c).collect()
    }

    fn reveal(&mut self, idx: PlayerId, card: Card, loc: Location) {
        let plot = &mut self.state.players[idx as usize].plot;
        let from_hidden = match loc {
            Location::Hidden => {
                plot.hidden.retain(|&c| c != card);
                true
            }
            Location::Stack { index, hidden } => {
                let stack = &mut plot.stacks[index];
                if hidden {
                    stack.hidden.retain(|&c| c != card);
                } else {
                    stack.revealed.retain(|&c| c != card);
                }
                hidden
            }
        };
        plot.revealed.push(card);
        self.events.push(RequisitionEvent::Revealed {
            player: idx,
            card,
            from_hidden,
        });
    }

    fn exile(&mut self, idx: PlayerId, card: Card) {
        remove_from_plot(&mut self.state.players[idx as usize].plot, card);
        self.state.exiled.entry(self.state.year).or_default().push(card);
        self.events.push(RequisitionEvent::Exiled { player: idx, card });
        debug!(seat = idx, card = %card, "card sent North");
    }

    /// Exile the highest of `cards` and, with an official, the second highest.
    fn exile_top(&mut self, mut cards: Vec<(PlayerId, Card)>) {
        cards.sort_by(|a, b| b.1.value.cmp(&a.1.value));
        let take = if self.mods.official { 2 } else { 1 };
        for (idx, card) in cards.into_iter().take(take) {
            self.exile(idx, card);
        }
    }

    fn pooled(&mut self) {
        let mut pool = Vec::new();
        for idx in self.vulnerable_players(RequisitionStrategy::Mice) {
            pool.extend(self.reveal_matching(idx).into_iter().map(|c| (idx, c)));
        }
        self.exile_top(pool);
    }

    fn per_player(&mut self, strategy: RequisitionStrategy) {
        let vulnerable = self.vulnerable_players(strategy);
        for &idx in &vulnerable {
            self.reveal_matching(idx);
        }
        for idx in vulnerable {
            let suit = self.suit;
            let cards: Vec<(PlayerId, Card)> = self
                .state
                .player(idx)
                .plot
                .revealed
                .iter()
                .filter(|c| c.suit == suit)
                .map(|&c| (idx, c))
                .collect();
            self.exile_top(cards);
        }
    }

    fn standard(&mut self) {
        let suit = self.suit;
        for idx in self.vulnerable_players(RequisitionStrategy::Standard) {
            let hidden: Vec<Card> = self
                .state
                .player(idx)
                .plot
                .hidden
                .iter()
                .copied()
                .filter(|c| c.suit == suit)
                .collect();
            let to_reveal: Vec<Card> = if self.mods.informant {
                hidden
            } else {
                hidden.into_iter().max_by_key(|c| c.value).into_iter().collect()
            };
            for card in to_reveal {
                self.reveal(idx, card, Location::Hidden);
            }

            let cards: Vec<(PlayerId, Card)> = self
                .state
                .player(idx)
                .plot
                .revealed
                .iter()
                .filter(|c| c.suit == suit)
                .map(|&c| (idx, c))
                .collect();
            self.exile_top(cards);
        }
    }
}

fn remove_from_plot(plot: &mut Plot, card: Card) {
    if let Some(pos) = plot.revealed.iter().position(|&c| c == card) {
        plot.revealed.remove(pos);
        return;
    }
    if let Some(pos) = plot.hidden.iter().position(|&c| c == card) {
        plot.hidden.remove(pos);
        return;
    }
    for stack in plot.stacks.iter_mut() {
        if let Some(pos) = stack.revealed.iter().position(|&c| c == card) {
            stack.revealed.remove(pos);
            return;
        }
        if let Some(pos) = stack.hidden.iter().position(|&c| c == card) {
            stack.hidden.remove(pos);
            return;
        }
    }
}
