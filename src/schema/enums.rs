//! Closed vocabularies extracted from the scoreboard screen.
//!
//! Serialized forms match the exact strings the game renders, including
//! spaces ("SEARCH AND DESTROY") and diacritics ("JÄGER 45") — the
//! translator is schema-constrained to these, so a misread screenshot
//! fails parsing instead of producing a novel map or weapon.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Map the match was played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMap {
    #[serde(rename = "SCAR")]
    Scar,
    #[serde(rename = "RAID")]
    Raid,
    #[serde(rename = "EXPOSURE")]
    Exposure,
    #[serde(rename = "DEN")]
    Den,
    #[serde(rename = "COLOSSUS")]
    Colossus,
    #[serde(rename = "BLACKHEART")]
    Blackheart,
}

impl GameMap {
    pub const ALL: [GameMap; 6] = [
        GameMap::Scar,
        GameMap::Raid,
        GameMap::Exposure,
        GameMap::Den,
        GameMap::Colossus,
        GameMap::Blackheart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMap::Scar => "SCAR",
            GameMap::Raid => "RAID",
            GameMap::Exposure => "EXPOSURE",
            GameMap::Den => "DEN",
            GameMap::Colossus => "COLOSSUS",
            GameMap::Blackheart => "BLACKHEART",
        }
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game mode tag. The mode-specific scoreboard shape hangs off this
/// discriminant in [`super::ModeStats`]; this standalone enum exists for
/// places that talk about the mode without a scoreboard attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "HARDPOINT")]
    Hardpoint,
    #[serde(rename = "SEARCH AND DESTROY")]
    SearchAndDestroy,
    #[serde(rename = "OVERLOAD")]
    Overload,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::Hardpoint,
        GameMode::SearchAndDestroy,
        GameMode::Overload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Hardpoint => "HARDPOINT",
            GameMode::SearchAndDestroy => "SEARCH AND DESTROY",
            GameMode::Overload => "OVERLOAD",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team of the tracked player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "TEAM GUILD")]
    Guild,
    #[serde(rename = "JSOC")]
    Jsoc,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Guild, Team::Jsoc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Guild => "TEAM GUILD",
            Team::Jsoc => "JSOC",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary weapon slot: assault rifles, SMGs, and snipers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryWeapon {
    #[serde(rename = "M15 MOD 0")]
    M15Mod0,
    #[serde(rename = "PEACEKEEPER MK1")]
    PeacekeeperMk1,
    #[serde(rename = "DRAVEC 45")]
    Dravec45,
    #[serde(rename = "VS RECON")]
    VsRecon,
}

impl PrimaryWeapon {
    pub const ALL: [PrimaryWeapon; 4] = [
        PrimaryWeapon::M15Mod0,
        PrimaryWeapon::PeacekeeperMk1,
        PrimaryWeapon::Dravec45,
        PrimaryWeapon::VsRecon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryWeapon::M15Mod0 => "M15 MOD 0",
            PrimaryWeapon::PeacekeeperMk1 => "PEACEKEEPER MK1",
            PrimaryWeapon::Dravec45 => "DRAVEC 45",
            PrimaryWeapon::VsRecon => "VS RECON",
        }
    }
}

impl fmt::Display for PrimaryWeapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary weapon slot: pistols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryWeapon {
    #[serde(rename = "JÄGER 45")]
    Jaeger45,
    #[serde(rename = "CODA 9")]
    Coda9,
}

impl SecondaryWeapon {
    pub const ALL: [SecondaryWeapon; 2] = [SecondaryWeapon::Jaeger45, SecondaryWeapon::Coda9];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecondaryWeapon::Jaeger45 => "JÄGER 45",
            SecondaryWeapon::Coda9 => "CODA 9",
        }
    }
}

impl fmt::Display for SecondaryWeapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
