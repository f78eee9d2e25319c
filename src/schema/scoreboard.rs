//! Mode-specific end-of-game scoreboards.
//!
//! Each mode renders a different set of counters and scores its teams
//! differently: Hardpoint accrues points continuously toward 250, while
//! Search and Destroy and Overload are round-based with small win
//! thresholds. The bounds here encode that difference so a Hardpoint
//! score can never pass itself off as a round count.

use serde::{Deserialize, Serialize};

use super::checks;
use super::error::{Validate, ValidationError};
use super::weapons::{MAX_ELIMINATIONS, MAX_RATIO};

/// Highest plausible individual score on any scoreboard.
pub const MAX_PLAYER_SCORE: u32 = 25_000;
/// Hardpoint team score: points accrued on the hill, first to 250.
pub const MAX_HARDPOINT_TEAM_SCORE: u32 = 250;
/// Search and Destroy team score: rounds won, first to 6.
pub const MAX_SND_TEAM_SCORE: u32 = 6;
/// Overload team score: rounds won, first to 3.
pub const MAX_OVERLOAD_TEAM_SCORE: u32 = 3;
/// Longest hill time a single match can produce, in seconds.
pub const MAX_HILL_TIME_SECS: u32 = 600;

fn validate_common(
    player: &str,
    eliminations: u32,
    deaths: u32,
    elimination_death_ratio: f64,
    score: u32,
) -> Result<(), ValidationError> {
    checks::non_empty("player", player)?;
    checks::at_most("eliminations", eliminations, MAX_ELIMINATIONS)?;
    checks::at_most("deaths", deaths, MAX_ELIMINATIONS)?;
    checks::ratio("elimination_death_ratio", elimination_death_ratio, MAX_RATIO)?;
    checks::at_most("score", score, MAX_PLAYER_SCORE)?;
    Ok(())
}

/// Scoreboard row for a Hardpoint match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardpointScoreboard {
    pub player: String,
    pub eliminations: u32,
    pub deaths: u32,
    pub elimination_death_ratio: f64,
    pub score: u32,
    pub friendly_score: u32,
    pub enemy_score: u32,
    /// Seconds spent on the hill.
    pub time: u32,
    pub objective_captures: u32,
    pub objective_kills: u32,
    pub captures: u32,
}

impl Validate for HardpointScoreboard {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_common(
            &self.player,
            self.eliminations,
            self.deaths,
            self.elimination_death_ratio,
            self.score,
        )?;
        checks::at_most("friendly_score", self.friendly_score, MAX_HARDPOINT_TEAM_SCORE)?;
        checks::at_most("enemy_score", self.enemy_score, MAX_HARDPOINT_TEAM_SCORE)?;
        checks::at_most("time", self.time, MAX_HILL_TIME_SECS)?;
        checks::at_most("objective_captures", self.objective_captures, MAX_ELIMINATIONS)?;
        checks::at_most("objective_kills", self.objective_kills, MAX_ELIMINATIONS)?;
        checks::at_most("captures", self.captures, MAX_ELIMINATIONS)?;
        Ok(())
    }
}

/// Scoreboard row for a Search and Destroy match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchAndDestroyScoreboard {
    pub player: String,
    pub eliminations: u32,
    pub deaths: u32,
    pub elimination_death_ratio: f64,
    pub score: u32,
    pub friendly_score: u32,
    pub enemy_score: u32,
    pub plants: u32,
    pub defuses: u32,
    pub objective_kills: u32,
    pub objective_score: u32,
}

impl Validate for SearchAndDestroyScoreboard {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_common(
            &self.player,
            self.eliminations,
            self.deaths,
            self.elimination_death_ratio,
            self.score,
        )?;
        checks::at_most("friendly_score", self.friendly_score, MAX_SND_TEAM_SCORE)?;
        checks::at_most("enemy_score", self.enemy_score, MAX_SND_TEAM_SCORE)?;
        checks::at_most("plants", self.plants, MAX_ELIMINATIONS)?;
        checks::at_most("defuses", self.defuses, MAX_ELIMINATIONS)?;
        checks::at_most("objective_kills", self.objective_kills, MAX_ELIMINATIONS)?;
        checks::at_most("objective_score", self.objective_score, MAX_PLAYER_SCORE)?;
        Ok(())
    }
}

/// Scoreboard row for an Overload match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverloadScoreboard {
    pub player: String,
    pub eliminations: u32,
    pub deaths: u32,
    pub elimination_death_ratio: f64,
    pub score: u32,
    pub friendly_score: u32,
    pub enemy_score: u32,
    pub overloads: u32,
    pub overload_devices_carrier_killed: u32,
}

impl Validate for OverloadScoreboard {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_common(
            &self.player,
            self.eliminations,
            self.deaths,
            self.elimination_death_ratio,
            self.score,
        )?;
        checks::at_most("friendly_score", self.friendly_score, MAX_OVERLOAD_TEAM_SCORE)?;
        checks::at_most("enemy_score", self.enemy_score, MAX_OVERLOAD_TEAM_SCORE)?;
        checks::at_most("overloads", self.overloads, MAX_ELIMINATIONS)?;
        checks::at_most(
            "overload_devices_carrier_killed",
            self.overload_devices_carrier_killed,
            MAX_ELIMINATIONS,
        )?;
        Ok(())
    }
}
