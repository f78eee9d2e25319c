//! The discriminated match record.
//!
//! `game_mode` and the scoreboard travel together inside [`ModeStats`],
//! a tagged enum flattened into the record. A Hardpoint tag carrying a
//! Search and Destroy scoreboard is therefore unrepresentable: the pairing
//! is fixed at the type level, and mismatched JSON fails to parse before
//! any range check runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{GameMap, GameMode, Team};
use super::error::{Validate, ValidationError};
use super::scoreboard::{HardpointScoreboard, OverloadScoreboard, SearchAndDestroyScoreboard};
use super::weapons::{MeleeWeaponStats, PrimaryWeaponStats, SecondaryWeaponStats};

/// Mode tag plus the scoreboard shape that tag makes legal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game_mode")]
pub enum ModeStats {
    #[serde(rename = "HARDPOINT")]
    Hardpoint { scoreboard: HardpointScoreboard },
    #[serde(rename = "SEARCH AND DESTROY")]
    SearchAndDestroy { scoreboard: SearchAndDestroyScoreboard },
    #[serde(rename = "OVERLOAD")]
    Overload { scoreboard: OverloadScoreboard },
}

impl ModeStats {
    pub fn game_mode(&self) -> GameMode {
        match self {
            ModeStats::Hardpoint { .. } => GameMode::Hardpoint,
            ModeStats::SearchAndDestroy { .. } => GameMode::SearchAndDestroy,
            ModeStats::Overload { .. } => GameMode::Overload,
        }
    }
}

impl Validate for ModeStats {
    /// Dispatches on the discriminant and checks only the payload that
    /// discriminant makes legal.
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ModeStats::Hardpoint { scoreboard } => scoreboard.validate(),
            ModeStats::SearchAndDestroy { scoreboard } => scoreboard.validate(),
            ModeStats::Overload { scoreboard } => scoreboard.validate(),
        }
        .map_err(|e| e.prefixed("scoreboard"))
    }
}

/// One player's statistics for one completed match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub primary_weapon_stats: PrimaryWeaponStats,
    pub secondary_weapon_stats: SecondaryWeaponStats,
    pub melee_weapon_stats: MeleeWeaponStats,
    pub map: GameMap,
    pub team: Team,
    #[serde(flatten)]
    pub mode: ModeStats,
}

impl MatchRecord {
    /// Parse a record from untrusted JSON (typically model output).
    ///
    /// Shape errors — unknown enum values, a scoreboard that does not
    /// match the `game_mode` tag, missing fields — surface here as
    /// validation failures. Range checks are a separate pass via
    /// [`Validate::validate`].
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map_err(|e| ValidationError::new("match_record", e.to_string()))
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode.game_mode()
    }
}

impl Validate for MatchRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        self.primary_weapon_stats
            .validate()
            .map_err(|e| e.prefixed("primary_weapon_stats"))?;
        self.secondary_weapon_stats
            .validate()
            .map_err(|e| e.prefixed("secondary_weapon_stats"))?;
        self.melee_weapon_stats
            .validate()
            .map_err(|e| e.prefixed("melee_weapon_stats"))?;
        self.mode.validate()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::fixtures::hardpoint_record;

    #[test]
    fn round_trips_with_flattened_mode_tag() {
        let record = hardpoint_record();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["game_mode"], "HARDPOINT");
        assert_eq!(value["scoreboard"]["captures"], 3);

        let back = MatchRecord::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn mismatched_tag_and_scoreboard_fails_to_parse() {
        let mut value = serde_json::to_value(hardpoint_record()).unwrap();
        // Hardpoint tag, Search and Destroy scoreboard shape.
        value["scoreboard"] = json!({
            "player": "FakePlayer",
            "eliminations": 12,
            "deaths": 8,
            "elimination_death_ratio": 1.5,
            "score": 4000,
            "friendly_score": 6,
            "enemy_score": 4,
            "plants": 2,
            "defuses": 1,
            "objective_kills": 3,
            "objective_score": 500,
        });
        assert!(MatchRecord::from_value(value).is_err());
    }

    #[test]
    fn unknown_game_mode_fails_to_parse() {
        let mut value = serde_json::to_value(hardpoint_record()).unwrap();
        value["game_mode"] = json!("GUN GAME");
        assert!(MatchRecord::from_value(value).is_err());
    }

    #[test]
    fn validate_prefixes_nested_fields() {
        let mut record = hardpoint_record();
        record.primary_weapon_stats.damage_dealt = 10_001;
        let err = record.validate().unwrap_err();
        assert_eq!(err.field, "primary_weapon_stats.damage_dealt");

        let mut record = hardpoint_record();
        if let ModeStats::Hardpoint { scoreboard } = &mut record.mode {
            scoreboard.friendly_score = 251;
        }
        let err = record.validate().unwrap_err();
        assert_eq!(err.field, "scoreboard.friendly_score");
    }
}
