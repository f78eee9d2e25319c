//! Per-weapon-slot performance figures.

use serde::{Deserialize, Serialize};

use super::checks;
use super::enums::{PrimaryWeapon, SecondaryWeapon};
use super::error::{Validate, ValidationError};

/// Hard ceilings for a single match.
pub const MAX_ELIMINATIONS: u32 = 200;
pub const MAX_DAMAGE: u32 = 10_000;
pub const MAX_RATIO: f64 = 200.0;

/// Stats for the primary weapon slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimaryWeaponStats {
    pub primary_weapon_name: PrimaryWeapon,
    pub eliminations: u32,
    pub elimination_death_ratio: f64,
    pub damage_dealt: u32,
    pub headshot_kills: u32,
    pub headshot_percentage: f64,
    pub accuracy_percentage: f64,
}

/// Stats for the secondary weapon slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecondaryWeaponStats {
    pub secondary_weapon_name: SecondaryWeapon,
    pub eliminations: u32,
    pub elimination_death_ratio: f64,
    pub damage_dealt: u32,
    pub headshot_kills: u32,
    pub headshot_percentage: f64,
    pub accuracy_percentage: f64,
}

/// Stats for the melee slot. The screen shows no headshot or accuracy
/// figures for melee, and melee names are free-form — there are too many
/// to enumerate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeleeWeaponStats {
    pub melee_weapon_name: String,
    pub kill_death_ratio: f64,
    pub damage_dealt: u32,
}

fn validate_slot(
    eliminations: u32,
    elimination_death_ratio: f64,
    damage_dealt: u32,
    headshot_kills: u32,
    headshot_percentage: f64,
    accuracy_percentage: f64,
) -> Result<(), ValidationError> {
    checks::at_most("eliminations", eliminations, MAX_ELIMINATIONS)?;
    checks::ratio("elimination_death_ratio", elimination_death_ratio, MAX_RATIO)?;
    checks::at_most("damage_dealt", damage_dealt, MAX_DAMAGE)?;
    checks::at_most("headshot_kills", headshot_kills, MAX_ELIMINATIONS)?;
    checks::percentage("headshot_percentage", headshot_percentage)?;
    checks::percentage("accuracy_percentage", accuracy_percentage)?;
    Ok(())
}

impl Validate for PrimaryWeaponStats {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_slot(
            self.eliminations,
            self.elimination_death_ratio,
            self.damage_dealt,
            self.headshot_kills,
            self.headshot_percentage,
            self.accuracy_percentage,
        )
    }
}

impl Validate for SecondaryWeaponStats {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_slot(
            self.eliminations,
            self.elimination_death_ratio,
            self.damage_dealt,
            self.headshot_kills,
            self.headshot_percentage,
            self.accuracy_percentage,
        )
    }
}

impl Validate for MeleeWeaponStats {
    fn validate(&self) -> Result<(), ValidationError> {
        checks::non_empty("melee_weapon_name", &self.melee_weapon_name)?;
        checks::ratio("kill_death_ratio", self.kill_death_ratio, MAX_RATIO)?;
        checks::at_most("damage_dealt", self.damage_dealt, MAX_DAMAGE)?;
        Ok(())
    }
}
