//! In-process interpreter for the seven-operator aggregation pipeline.
//!
//! Operates on plain JSON documents. Semantics follow the document-store
//! originals closely enough that a plan written for one runs on the
//! other: dotted field paths, `$`-prefixed references in expressions,
//! stable sorts, and group accumulators over the resolved values.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::schema::{QueryPlan, StageOperator};

use super::StoreError;

pub(crate) fn run(mut docs: Vec<Value>, plan: &QueryPlan) -> Result<Vec<Value>, StoreError> {
    for (i, stage) in plan.stages.iter().enumerate() {
        let context = |msg: String| StoreError::BadPlan(format!("stage {} ({}): {}", i, stage.operator.as_str(), msg));
        docs = match stage.operator {
            StageOperator::Match => apply_match(docs, &stage.expression).map_err(context)?,
            StageOperator::Sort => apply_sort(docs, &stage.expression).map_err(context)?,
            StageOperator::Skip => {
                let n = expect_count(&stage.expression).map_err(context)?;
                docs.into_iter().skip(n).collect()
            }
            StageOperator::Limit => {
                let n = expect_count(&stage.expression).map_err(context)?;
                docs.into_iter().take(n).collect()
            }
            StageOperator::Project => apply_project(docs, &stage.expression).map_err(context)?,
            StageOperator::Unwind => apply_unwind(docs, &stage.expression).map_err(context)?,
            StageOperator::Group => apply_group(docs, &stage.expression).map_err(context)?,
        };
    }
    Ok(docs)
}

/// Resolve a dotted path inside a document.
fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Resolve an expression argument: `"$path"` references a document
/// field, anything else is a literal.
fn resolve(doc: &Value, arg: &Value) -> Value {
    match arg {
        Value::String(s) if s.starts_with('$') => {
            lookup(doc, &s[1..]).cloned().unwrap_or(Value::Null)
        }
        other => other.clone(),
    }
}

/// Order two JSON scalars. Numbers compare numerically regardless of
/// integer/float representation; mixed types do not compare.
fn cmp_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    cmp_values(a, b) == Some(Ordering::Equal)
}

fn condition_holds(actual: Option<&Value>, condition: &Value) -> Result<bool, String> {
    let comparators = match condition {
        Value::Object(map) if map.keys().any(|k| k.starts_with('$')) => map,
        literal => {
            return Ok(actual.is_some_and(|v| values_equal(v, literal)));
        }
    };

    for (op, operand) in comparators {
        let holds = match op.as_str() {
            "$eq" => actual.is_some_and(|v| values_equal(v, operand)),
            "$ne" => !actual.is_some_and(|v| values_equal(v, operand)),
            "$gt" => compare(actual, operand, |o| o == Ordering::Greater),
            "$gte" => compare(actual, operand, |o| o != Ordering::Less),
            "$lt" => compare(actual, operand, |o| o == Ordering::Less),
            "$lte" => compare(actual, operand, |o| o != Ordering::Greater),
            "$in" => match operand {
                Value::Array(options) => {
                    actual.is_some_and(|v| options.iter().any(|o| values_equal(v, o)))
                }
                _ => return Err("$in requires an array operand".into()),
            },
            other => return Err(format!("unsupported comparison operator {}", other)),
        };
        if !holds {
            return Ok(false);
        }
    }
    Ok(true)
}

fn compare(actual: Option<&Value>, operand: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    actual
        .and_then(|v| cmp_values(v, operand))
        .is_some_and(accept)
}

fn apply_match(docs: Vec<Value>, expr: &Value) -> Result<Vec<Value>, String> {
    let Value::Object(conditions) = expr else {
        return Err("expression must be an object of field conditions".into());
    };
    let mut kept = Vec::new();
    for doc in docs {
        let mut all = true;
        for (path, condition) in conditions {
            if !condition_holds(lookup(&doc, path), condition)? {
                all = false;
                break;
            }
        }
        if all {
            kept.push(doc);
        }
    }
    Ok(kept)
}

fn apply_sort(mut docs: Vec<Value>, expr: &Value) -> Result<Vec<Value>, String> {
    let Value::Object(keys) = expr else {
        return Err("expression must be an object of field: 1|-1".into());
    };
    let mut specs = Vec::new();
    for (path, direction) in keys {
        let descending = match direction.as_i64() {
            Some(1) => false,
            Some(-1) => true,
            _ => return Err(format!("sort direction for {} must be 1 or -1", path)),
        };
        specs.push((path.clone(), descending));
    }
    // Stable sorts applied least-significant-key first give multi-key
    // ordering without a composite comparator.
    for (path, descending) in specs.iter().rev() {
        docs.sort_by(|a, b| {
            let ordering = match (lookup(a, path), lookup(b, path)) {
                (Some(x), Some(y)) => cmp_values(x, y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            };
            if *descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
    Ok(docs)
}

fn expect_count(expr: &Value) -> Result<usize, String> {
    expr.as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| "expression must be a non-negative integer".into())
}

fn apply_project(docs: Vec<Value>, expr: &Value) -> Result<Vec<Value>, String> {
    let Value::Object(spec) = expr else {
        return Err("expression must be an object of field: 1|0".into());
    };
    let mut included = Vec::new();
    let mut excluded = Vec::new();
    for (path, flag) in spec {
        match flag {
            Value::Number(n) if n.as_i64() == Some(1) => included.push(path.as_str()),
            Value::Number(n) if n.as_i64() == Some(0) => excluded.push(path.as_str()),
            Value::Bool(true) => included.push(path.as_str()),
            Value::Bool(false) => excluded.push(path.as_str()),
            _ => return Err(format!("projection for {} must be 1 or 0", path)),
        }
    }

    let projected = docs
        .into_iter()
        .map(|doc| {
            if included.is_empty() {
                // Exclusion mode: keep everything but the listed paths.
                let mut out = doc;
                for path in &excluded {
                    remove_path(&mut out, path);
                }
                out
            } else {
                // Inclusion mode: rebuild from the listed paths; _id rides
                // along unless explicitly excluded.
                let mut out = Value::Object(Map::new());
                if !excluded.contains(&"_id") {
                    if let Some(id) = doc.get("_id") {
                        out["_id"] = id.clone();
                    }
                }
                for path in &included {
                    if let Some(value) = lookup(&doc, path) {
                        insert_path(&mut out, path, value.clone());
                    }
                }
                out
            }
        })
        .collect();
    Ok(projected)
}

fn remove_path(doc: &mut Value, path: &str) {
    let Some((parent_path, leaf)) = path.rsplit_once('.') else {
        if let Value::Object(map) = doc {
            map.remove(path);
        }
        return;
    };
    let mut current = doc;
    for segment in parent_path.split('.') {
        match current.get_mut(segment) {
            Some(next) => current = next,
            None => return,
        }
    }
    if let Value::Object(map) = current {
        map.remove(leaf);
    }
}

fn insert_path(doc: &mut Value, path: &str, value: Value) {
    let mut current = doc;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current[segment] = value;
            return;
        }
        if current.get(segment).map_or(true, |v| !v.is_object()) {
            current[segment] = Value::Object(Map::new());
        }
        current = &mut current[segment];
    }
}

fn apply_unwind(docs: Vec<Value>, expr: &Value) -> Result<Vec<Value>, String> {
    let Value::String(raw) = expr else {
        return Err("expression must be a field path string".into());
    };
    let path = raw.strip_prefix('$').unwrap_or(raw);

    let mut unwound = Vec::new();
    for doc in docs {
        // Documents without an array at the path drop out, matching the
        // default behavior of the document stores this mirrors.
        let Some(Value::Array(items)) = lookup(&doc, path).cloned() else {
            continue;
        };
        for item in items {
            let mut copy = doc.clone();
            insert_path(&mut copy, path, item);
            unwound.push(copy);
        }
    }
    Ok(unwound)
}

fn apply_group(docs: Vec<Value>, expr: &Value) -> Result<Vec<Value>, String> {
    let Value::Object(spec) = expr else {
        return Err("expression must be an object with an _id key".into());
    };
    let Some(key_spec) = spec.get("_id") else {
        return Err("group expression requires an _id key".into());
    };

    // Bucket documents by the serialized group key, preserving
    // first-seen order.
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, (Value, Vec<Value>)> = HashMap::new();
    for doc in docs {
        let key = resolve(&doc, key_spec);
        let token = key.to_string();
        buckets
            .entry(token.clone())
            .or_insert_with(|| {
                order.push(token);
                (key, Vec::new())
            })
            .1
            .push(doc);
    }

    let mut rows = Vec::with_capacity(order.len());
    for token in order {
        let (key, members) = &buckets[&token];
        let mut row = Map::new();
        row.insert("_id".into(), key.clone());
        for (name, accumulator) in spec {
            if name == "_id" {
                continue;
            }
            row.insert(name.clone(), accumulate(members, accumulator)?);
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

fn accumulate(members: &[Value], accumulator: &Value) -> Result<Value, String> {
    let Value::Object(spec) = accumulator else {
        return Err("accumulator must be an object like {\"$sum\": ...}".into());
    };
    if spec.len() != 1 {
        return Err("accumulator must have exactly one operator".into());
    }
    let (op, arg) = spec.iter().next().ok_or("empty accumulator")?;

    let resolved: Vec<Value> = members.iter().map(|doc| resolve(doc, arg)).collect();
    let numbers: Vec<f64> = resolved.iter().filter_map(Value::as_f64).collect();

    let result = match op.as_str() {
        "$sum" => number(numbers.iter().sum()),
        "$avg" => {
            if numbers.is_empty() {
                Value::Null
            } else {
                number(numbers.iter().sum::<f64>() / numbers.len() as f64)
            }
        }
        "$min" => extreme(&resolved, Ordering::Less),
        "$max" => extreme(&resolved, Ordering::Greater),
        "$count" => number(members.len() as f64),
        "$first" => resolved.first().cloned().unwrap_or(Value::Null),
        "$last" => resolved.last().cloned().unwrap_or(Value::Null),
        other => return Err(format!("unsupported accumulator {}", other)),
    };
    Ok(result)
}

fn extreme(values: &[Value], keep: Ordering) -> Value {
    let mut best: Option<&Value> = None;
    for value in values {
        if value.is_null() {
            continue;
        }
        match best {
            None => best = Some(value),
            Some(current) => {
                if cmp_values(value, current) == Some(keep) {
                    best = Some(value);
                }
            }
        }
    }
    best.cloned().unwrap_or(Value::Null)
}

/// Render a whole-number float as a JSON integer.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
