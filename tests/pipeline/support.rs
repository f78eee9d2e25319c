//! Test doubles: canned translator, failing store, recording chat.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use debrief::{
    ChatError, ChatSurface, GameMap, HardpointScoreboard, MatchRecord, MatchStore,
    MeleeWeaponStats, ModeStats, PrimaryWeapon, PrimaryWeaponStats, QueryPlan, SecondaryWeapon,
    SecondaryWeaponStats, StoreError, StoredMatch, Team, Translator, TranslatorError,
};

/// Install a test logger once; respects `RUST_LOG` for verbose runs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A known-good Hardpoint record, the same shape a live extraction
/// produces.
pub fn sample_record() -> MatchRecord {
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

/// A stored match for seeding, with a deterministic timestamp derived
/// from `n` so recency sorts are predictable.
pub fn seeded_match(owner_id: u64, n: u32) -> StoredMatch {
    StoredMatch::new(
        sample_record(),
        owner_id,
        1000 + u64::from(n),
        42,
        seeded_time(n),
    )
}

pub fn seeded_time(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 1, 12, 0, n).unwrap()
}

/// Translator that answers from a can instead of a model endpoint.
pub struct FakeTranslator {
    record: MatchRecord,
    plan: QueryPlan,
    fail: bool,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self {
            record: sample_record(),
            plan: QueryPlan::from_value(json!({
                "stages": [{ "operator": "$match", "expression": { "owner_id": 123 } }]
            }))
            .unwrap(),
            fail: false,
        }
    }

    /// Answer every call with an unreachable-endpoint error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Use a specific plan for `translate_query`.
    pub fn with_plan(mut self, plan: QueryPlan) -> Self {
        self.plan = plan;
        self
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn extract_match(
        &self,
        _image_one: &[u8],
        _image_two: Option<&[u8]>,
    ) -> Result<MatchRecord, TranslatorError> {
        if self.fail {
            return Err(TranslatorError::Unreachable("fake outage".into()));
        }
        Ok(self.record.clone())
    }

    async fn translate_query(&self, _question: &str) -> Result<QueryPlan, TranslatorError> {
        if self.fail {
            return Err(TranslatorError::Unreachable("fake outage".into()));
        }
        Ok(self.plan.clone())
    }
}

/// Store that refuses every operation, for short-circuit tests.
pub struct FailingStore;

#[async_trait]
impl MatchStore for FailingStore {
    async fn append(&self, _record: &StoredMatch) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("fake store outage".into()))
    }

    async fn run_query(&self, _plan: &QueryPlan) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("fake store outage".into()))
    }
}

/// Chat surface that records every reply it is asked to deliver.
#[derive(Default)]
pub struct RecordingChat {
    messages: Mutex<Vec<(u64, String)>>,
}

impl RecordingChat {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(u64, String)> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatSurface for RecordingChat {
    async fn send(&self, channel_id: u64, text: &str) -> Result<(), ChatError> {
        self.messages
            .lock()
            .unwrap()
            .push((channel_id, text.to_string()));
        Ok(())
    }
}
