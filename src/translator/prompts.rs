//! Fixed prompts and response-shape constraints for the model capability.

use serde_json::{json, Value};

use crate::schema::{GameMap, GameMode, PrimaryWeapon, SecondaryWeapon, StageOperator, Team};

/// Instructional prompt sent with the scoreboard screenshots.
pub const MATCH_ANALYSIS_PROMPT: &str = "\
Here are up to two screenshots of a player's post-match results screen. \
The first image shows the end-of-game scoreboard and the second, when \
present, shows the weapon stats page. Extract the statistics for the \
highlighted player on the scoreboard only. Be careful to distinguish \
zeros and eights: the zeros tend to have a dot in the middle of them.";

/// System prompt for natural-language-to-query translation.
///
/// Embeds the stored-document field inventory so the model cannot invent
/// field names, enumerates the operator allow-list, and forbids anything
/// that writes. The response shape is additionally machine-checked by
/// [`query_plan_schema`] and re-validated by [`crate::schema::QueryPlan`]
/// on the way back in.
pub const DB_QUERY_PROMPT: &str = "\
You translate a player's question about their match history into a JSON \
aggregation pipeline over a collection of match documents. Each document \
has exactly these fields:

  owner_id (integer), message_id (integer), channel_id (integer),
  created_at (ISO-8601 timestamp),
  stats.map, stats.team, stats.game_mode,
  stats.primary_weapon_stats.{primary_weapon_name, eliminations, \
elimination_death_ratio, damage_dealt, headshot_kills, \
headshot_percentage, accuracy_percentage},
  stats.secondary_weapon_stats.{secondary_weapon_name, eliminations, \
elimination_death_ratio, damage_dealt, headshot_kills, \
headshot_percentage, accuracy_percentage},
  stats.melee_weapon_stats.{melee_weapon_name, kill_death_ratio, \
damage_dealt},
  stats.scoreboard.{player, eliminations, deaths, \
elimination_death_ratio, score, friendly_score, enemy_score, plus \
mode-specific counters such as time, objective_captures, captures, \
plants, defuses, objective_score, overloads, \
overload_devices_carrier_killed}

Respond with {\"stages\": [{\"operator\": ..., \"expression\": ...}, ...]}. \
The only allowed operators are $match, $group, $project, $sort, $limit, \
$skip and $unwind. Group accumulators are limited to $sum, $avg, $min, \
$max, $count, $first and $last. Never use an operator that writes, \
updates or deletes ($out, $merge, $set and friends are forbidden and \
will be rejected). Use only the field names listed above. When the \
question says \"my\" or \"me\", filter on the owner_id value you are \
given. When the question implies recency, sort by created_at descending \
before limiting.";

fn weapon_slot_schema(name_field: &str, names: Vec<&'static str>) -> Value {
    json!({
        "type": "object",
        "properties": {
            name_field: { "type": "string", "enum": names },
            "eliminations": { "type": "integer", "minimum": 0 },
            "elimination_death_ratio": { "type": "number", "minimum": 0 },
            "damage_dealt": { "type": "integer", "minimum": 0 },
            "headshot_kills": { "type": "integer", "minimum": 0 },
            "headshot_percentage": { "type": "number", "minimum": 0 },
            "accuracy_percentage": { "type": "number", "minimum": 0 },
        },
        "required": [
            name_field,
            "eliminations",
            "elimination_death_ratio",
            "damage_dealt",
            "headshot_kills",
            "headshot_percentage",
            "accuracy_percentage",
        ],
    })
}

fn scoreboard_schema(extra: &[&str]) -> Value {
    let mut properties = json!({
        "player": { "type": "string" },
        "eliminations": { "type": "integer", "minimum": 0 },
        "deaths": { "type": "integer", "minimum": 0 },
        "elimination_death_ratio": { "type": "number", "minimum": 0 },
        "score": { "type": "integer", "minimum": 0 },
        "friendly_score": { "type": "integer", "minimum": 0 },
        "enemy_score": { "type": "integer", "minimum": 0 },
    });
    let mut required = vec![
        "player",
        "eliminations",
        "deaths",
        "elimination_death_ratio",
        "score",
        "friendly_score",
        "enemy_score",
    ];
    for field in extra {
        properties[*field] = json!({ "type": "integer", "minimum": 0 });
        required.push(*field);
    }
    json!({ "type": "object", "properties": properties, "required": required })
}

fn record_variant(mode: GameMode, scoreboard: Value) -> Value {
    let primary_names: Vec<_> = PrimaryWeapon::ALL.iter().map(|w| w.as_str()).collect();
    let secondary_names: Vec<_> = SecondaryWeapon::ALL.iter().map(|w| w.as_str()).collect();
    let maps: Vec<_> = GameMap::ALL.iter().map(|m| m.as_str()).collect();
    let teams: Vec<_> = Team::ALL.iter().map(|t| t.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            "primary_weapon_stats": weapon_slot_schema("primary_weapon_name", primary_names),
            "secondary_weapon_stats": weapon_slot_schema("secondary_weapon_name", secondary_names),
            "melee_weapon_stats": {
                "type": "object",
                "properties": {
                    "melee_weapon_name": { "type": "string" },
                    "kill_death_ratio": { "type": "number", "minimum": 0 },
                    "damage_dealt": { "type": "integer", "minimum": 0 },
                },
                "required": ["melee_weapon_name", "kill_death_ratio", "damage_dealt"],
            },
            "map": { "type": "string", "enum": maps },
            "team": { "type": "string", "enum": teams },
            "game_mode": { "type": "string", "enum": [mode.as_str()] },
            "scoreboard": scoreboard,
        },
        "required": [
            "primary_weapon_stats",
            "secondary_weapon_stats",
            "melee_weapon_stats",
            "map",
            "team",
            "game_mode",
            "scoreboard",
        ],
    })
}

/// Response-shape constraint for match extraction: one variant per game
/// mode, each pinning `game_mode` to a single value and the scoreboard
/// to that mode's counter set.
pub(crate) fn match_record_schema() -> Value {
    json!({
        "anyOf": [
            record_variant(
                GameMode::Hardpoint,
                scoreboard_schema(&["time", "objective_captures", "objective_kills", "captures"]),
            ),
            record_variant(
                GameMode::SearchAndDestroy,
                scoreboard_schema(&["plants", "defuses", "objective_kills", "objective_score"]),
            ),
            record_variant(
                GameMode::Overload,
                scoreboard_schema(&["overloads", "overload_devices_carrier_killed"]),
            ),
        ]
    })
}

/// Response-shape constraint for query translation.
pub(crate) fn query_plan_schema() -> Value {
    let operators: Vec<_> = StageOperator::ALL.iter().map(|op| op.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            "stages": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "operator": { "type": "string", "enum": operators },
                        "expression": {
                            "anyOf": [
                                { "type": "object" },
                                { "type": "integer" },
                                { "type": "number" },
                                { "type": "string" },
                            ]
                        },
                    },
                    "required": ["operator", "expression"],
                },
            },
        },
        "required": ["stages"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_prompt_names_every_allowed_operator() {
        for op in StageOperator::ALL {
            assert!(
                DB_QUERY_PROMPT.contains(op.as_str()),
                "prompt is missing {}",
                op.as_str()
            );
        }
        assert!(DB_QUERY_PROMPT.contains("forbidden"));
    }

    #[test]
    fn query_prompt_embeds_document_fields() {
        for field in ["owner_id", "created_at", "stats.game_mode", "kill_death_ratio"] {
            assert!(DB_QUERY_PROMPT.contains(field), "prompt is missing {}", field);
        }
    }

    #[test]
    fn record_schema_has_one_variant_per_mode() {
        let schema = match_record_schema();
        let variants = schema["anyOf"].as_array().unwrap();
        assert_eq!(variants.len(), 3);
        for variant in variants {
            let modes = variant["properties"]["game_mode"]["enum"].as_array().unwrap();
            assert_eq!(modes.len(), 1);
        }
    }
}
