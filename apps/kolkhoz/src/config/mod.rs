//! Game setup from the process environment.

use std::env;

use crate::domain::variants::{GameConfig, Variants};
use crate::error::AppError;

pub const PLAYERS_VAR: &str = "KOLKHOZ_PLAYERS";
pub const SEED_VAR: &str = "KOLKHOZ_SEED";
pub const HUMAN_SEATS_VAR: &str = "KOLKHOZ_HUMAN_SEATS";
pub const VARIANTS_VAR: &str = "KOLKHOZ_VARIANTS";

impl GameConfig {
    /// Build a config from `KOLKHOZ_*` variables. Unset variables keep the
    /// defaults; malformed ones are a config error.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = GameConfig::default();

        let num_players = match lookup(PLAYERS_VAR) {
            Some(raw) => parse_number(PLAYERS_VAR, &raw)?,
            None => defaults.num_players,
        };
        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_number(SEED_VAR, &raw)?,
            None => defaults.seed,
        };
        let human_seats = match lookup(HUMAN_SEATS_VAR) {
            Some(raw) => parse_seats(&raw)?,
            None => defaults.human_seats,
        };
        let variants = match lookup(VARIANTS_VAR) {
            Some(raw) => serde_json::from_str::<Variants>(&raw)
                .map_err(|e| AppError::config(format!("{VARIANTS_VAR} is not a valid variants object: {e}")))?,
            None => defaults.variants,
        };

        let config = GameConfig {
            num_players,
            seed,
            human_seats,
            variants,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'")))
}

fn parse_seats(raw: &str) -> Result<Vec<u8>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_number(HUMAN_SEATS_VAR, s))
        .collect()
}
