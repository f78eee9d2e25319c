//! Constrained aggregation-query intermediate representation.
//!
//! This is the only channel through which natural-language input reaches
//! the store. The operator set is a closed enum of seven read-only
//! stages; write operators are not representable, so there is nothing to
//! blocklist. Plans arrive from an untrusted model, so parsing reports
//! the offending stage index instead of a generic decode error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Validate, ValidationError};

/// The seven read-only aggregation operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageOperator {
    #[serde(rename = "$match")]
    Match,
    #[serde(rename = "$group")]
    Group,
    #[serde(rename = "$project")]
    Project,
    #[serde(rename = "$sort")]
    Sort,
    #[serde(rename = "$limit")]
    Limit,
    #[serde(rename = "$skip")]
    Skip,
    #[serde(rename = "$unwind")]
    Unwind,
}

impl StageOperator {
    pub const ALL: [StageOperator; 7] = [
        StageOperator::Match,
        StageOperator::Group,
        StageOperator::Project,
        StageOperator::Sort,
        StageOperator::Limit,
        StageOperator::Skip,
        StageOperator::Unwind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageOperator::Match => "$match",
            StageOperator::Group => "$group",
            StageOperator::Project => "$project",
            StageOperator::Sort => "$sort",
            StageOperator::Limit => "$limit",
            StageOperator::Skip => "$skip",
            StageOperator::Unwind => "$unwind",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        StageOperator::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

/// One aggregation stage: an operator and its expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryStage {
    pub operator: StageOperator,
    pub expression: Value,
}

/// An ordered, validated sequence of aggregation stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryPlan {
    pub stages: Vec<QueryStage>,
}

impl QueryPlan {
    /// Parse a plan from untrusted JSON.
    ///
    /// Walks the structure by hand so an out-of-allow-list operator is
    /// reported as `stages[i].operator` with the full allow-list, rather
    /// than as an opaque enum-variant decode failure.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut root) = value else {
            return Err(ValidationError::new("query_plan", "must be a JSON object"));
        };
        let Some(stages) = root.remove("stages") else {
            return Err(ValidationError::new("stages", "missing required field"));
        };
        let Value::Array(raw_stages) = stages else {
            return Err(ValidationError::new("stages", "must be an array"));
        };

        let mut parsed = Vec::with_capacity(raw_stages.len());
        for (i, raw) in raw_stages.into_iter().enumerate() {
            let Value::Object(mut stage) = raw else {
                return Err(ValidationError::new(
                    format!("stages[{}]", i),
                    "must be an object with operator and expression",
                ));
            };
            let operator = match stage.remove("operator") {
                Some(Value::String(op)) => StageOperator::from_str(&op).ok_or_else(|| {
                    ValidationError::new(
                        format!("stages[{}].operator", i),
                        format!(
                            "{} is not an allowed operator (allowed: {})",
                            op,
                            allow_list()
                        ),
                    )
                })?,
                _ => {
                    return Err(ValidationError::new(
                        format!("stages[{}].operator", i),
                        "missing or non-string operator",
                    ))
                }
            };
            let Some(expression) = stage.remove("expression") else {
                return Err(ValidationError::new(
                    format!("stages[{}].expression", i),
                    "missing required field",
                ));
            };
            parsed.push(QueryStage {
                operator,
                expression,
            });
        }

        let plan = Self { stages: parsed };
        plan.validate()?;
        Ok(plan)
    }
}

impl Validate for QueryPlan {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.stages.is_empty() {
            return Err(ValidationError::new("stages", "must contain at least one stage"));
        }
        Ok(())
    }
}

fn allow_list() -> String {
    StageOperator::ALL
        .iter()
        .map(|op| op.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
