//! Schema layer: every type that crosses a component boundary, plus the
//! validation that guards those crossings.
//!
//! Validation is two-pass. Shape comes first: records parse through a
//! tagged union so a scoreboard that contradicts its `game_mode` never
//! exists as a value. Ranges come second: [`Validate`] runs the
//! declarative per-field checks and reports the first offending field by
//! dotted path.

mod checks;
mod enums;
mod error;
mod query;
mod record;
mod scoreboard;
mod stored;
mod weapons;

pub use enums::{GameMap, GameMode, PrimaryWeapon, SecondaryWeapon, Team};
pub use error::{Validate, ValidationError};
pub use query::{QueryPlan, QueryStage, StageOperator};
pub use record::{MatchRecord, ModeStats};
pub use scoreboard::{
    HardpointScoreboard, OverloadScoreboard, SearchAndDestroyScoreboard, MAX_HARDPOINT_TEAM_SCORE,
    MAX_HILL_TIME_SECS, MAX_OVERLOAD_TEAM_SCORE, MAX_PLAYER_SCORE, MAX_SND_TEAM_SCORE,
};
pub use stored::StoredMatch;
pub use weapons::{
    MeleeWeaponStats, PrimaryWeaponStats, SecondaryWeaponStats, MAX_DAMAGE, MAX_ELIMINATIONS,
    MAX_RATIO,
};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Canned records shared by unit tests across the crate.

    use super::*;

    pub(crate) fn hardpoint_record() -> MatchRecord {
        MatchRecord {
            primary_weapon_stats: PrimaryWeaponStats {
                primary_weapon_name: PrimaryWeapon::M15Mod0,
                eliminations: 50,
                elimination_death_ratio: 2.5,
                damage_dealt: 5000,
                headshot_kills: 20,
                headshot_percentage: 40.0,
                accuracy_percentage: 30.0,
            },
            secondary_weapon_stats: SecondaryWeaponStats {
                secondary_weapon_name: SecondaryWeapon::Jaeger45,
                eliminations: 20,
                elimination_death_ratio: 1.0,
                damage_dealt: 2000,
                headshot_kills: 5,
                headshot_percentage: 25.0,
                accuracy_percentage: 20.0,
            },
            melee_weapon_stats: MeleeWeaponStats {
                melee_weapon_name: "Combat Knife".into(),
                kill_death_ratio: 3.0,
                damage_dealt: 300,
            },
            map: GameMap::Scar,
            team: Team::Guild,
            mode: ModeStats::Hardpoint {
                scoreboard: HardpointScoreboard {
                    player: "FakePlayer".into(),
                    eliminations: 50,
                    deaths: 25,
                    elimination_death_ratio: 2.0,
                    score: 10_000,
                    friendly_score: 150,
                    enemy_score: 100,
                    time: 120,
                    objective_captures: 5,
                    objective_kills: 15,
                    captures: 3,
                },
            },
        }
    }
}
