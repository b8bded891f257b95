//! Property tests for the canonical value ordering.

use std::cmp::Ordering;

use proptest::prelude::*;
use serde_json::{json, Value};

use servicepack::{canonical_cmp, sort_entities, EntityName, ParsedEntity};

/// Integers from here on no longer round-trip through `f64`
const TWO_POW_53: i64 = 9_007_199_254_740_992;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        any::<u64>().prop_map(|n| json!(n)),
        (-4i64..=4).prop_map(|d| json!(TWO_POW_53 + d)),
        (-4i64..=4).prop_map(|d| json!((TWO_POW_53 + d) as f64)),
        (-4i64..=4).prop_map(|d| json!((TWO_POW_53 + d) as f64 + 0.5)),
        prop_oneof![Just(-0.0f64), Just(0.0), Just(1.0e19), Just(-1.0e19)].prop_map(|f| json!(f)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every value is equal to itself.
    #[test]
    fn property_ordering_is_reflexive(v in value()) {
        prop_assert_eq!(canonical_cmp(&v, &v), Ordering::Equal);
    }

    /// PROPERTY: swapping operands reverses the result.
    #[test]
    fn property_ordering_is_antisymmetric(a in value(), b in value()) {
        prop_assert_eq!(canonical_cmp(&a, &b), canonical_cmp(&b, &a).reverse());
    }

    /// PROPERTY: a <= b and b <= c implies a <= c, and a == b == c implies a == c.
    #[test]
    fn property_ordering_is_transitive(a in value(), b in value(), c in value()) {
        let ab = canonical_cmp(&a, &b);
        let bc = canonical_cmp(&b, &c);
        let ac = canonical_cmp(&a, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(ac, Ordering::Greater);
        }
        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(ac, Ordering::Equal);
        }
    }

    /// PROPERTY: transitivity holds among numbers that straddle the `f64`
    /// precision limit.
    #[test]
    fn property_number_ordering_is_transitive(
        a in leaf(), b in leaf(), c in leaf(),
    ) {
        let ab = canonical_cmp(&a, &b);
        let bc = canonical_cmp(&b, &c);
        let ac = canonical_cmp(&a, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(ac, Ordering::Greater);
        }
        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(ac, Ordering::Equal);
        }
    }

    /// PROPERTY: the sorted result does not depend on the input order.
    #[test]
    fn property_sort_is_independent_of_request_order(
        values in proptest::collection::vec(value(), 0..8),
        seed in any::<u64>(),
    ) {
        let entities: Vec<ParsedEntity> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| ParsedEntity::new(EntityName::new(format!("s{i}")).unwrap(), v))
            .collect();

        let mut forward = entities.clone();
        let mut rotated = entities;
        let len = rotated.len().max(1);
        rotated.rotate_left((seed as usize) % len);
        rotated.reverse();

        sort_entities(&mut forward);
        sort_entities(&mut rotated);

        prop_assert_eq!(forward, rotated);
    }
}
