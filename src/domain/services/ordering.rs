//! Canonical Ordering Service
//!
//! A total order over JSON values, used to sort the bundle so its content
//! never depends on the order names were supplied in or on directory
//! iteration order.
//!
//! ## Rules
//!
//! 1. Type rank: null < bool < number < string < array < object
//! 2. Numbers compare by exact mathematical value, so an integer and a
//!    float never round into each other; `-0.0` equals `0`
//! 3. Strings compare byte-wise
//! 4. Arrays compare element-wise, a shorter prefix sorts first
//! 5. Objects compare their entries in ascending key order, so source key
//!    order never matters

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

use crate::domain::entities::ParsedEntity;

/// Compare two JSON values under the canonical order
pub fn canonical_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Value::Array(x), Value::Array(y)) => compare_arrays(x, y),
        (Value::Object(x), Value::Object(y)) => compare_objects(x, y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Sort parsed entities in place under the canonical order.
///
/// Equal values fall back to the entity name.
pub fn sort_entities(entities: &mut [ParsedEntity]) {
    entities.sort_by(|a, b| {
        canonical_cmp(a.value(), b.value()).then_with(|| a.name().cmp(b.name()))
    });
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (exact_int(a), exact_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => cmp_int_float(x, float(b)),
        (None, Some(y)) => cmp_int_float(y, float(a)).reverse(),
        (None, None) => normalize_zero(float(a)).total_cmp(&normalize_zero(float(b))),
    }
}

fn exact_int(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float(n: &Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

/// `-0.0` and `0.0` must tie, since both equal the integer `0`.
fn normalize_zero(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

/// Compare an integer with a float without rounding either.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    // 2^64 and -2^63 bound every integer JSON can hold as i64 or u64
    const ABOVE_ALL: f64 = 18_446_744_073_709_551_616.0;
    const BELOW_ALL: f64 = -9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= ABOVE_ALL {
        return Ordering::Less;
    }
    if f < BELOW_ALL {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.total_cmp(&normalize_zero(f - whole)),
        ord => ord,
    }
}

fn compare_arrays(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = canonical_cmp(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    let a = sorted_entries(a);
    let b = sorted_entries(b);
    for ((ka, va), (kb, vb)) in a.iter().zip(&b) {
        let ord = ka
            .as_bytes()
            .cmp(kb.as_bytes())
            .then_with(|| canonical_cmp(va, vb));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|(x, _), (y, _)| x.as_bytes().cmp(y.as_bytes()));
    entries
}
