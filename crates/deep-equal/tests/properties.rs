//! Property tests: reflexivity over NaN-free values, symmetry over arbitrary
//! pairs, and stability of repeated JSON conversion.

use deep_equal::deep_equal;
use deep_equal_value::Value;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        // Finite numbers only: NaN deliberately breaks reflexivity.
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..6).prop_map(Value::object),
        ]
    })
}

fn json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        (-1000i64..1000).prop_map(serde_json::Value::from),
        "[a-z]{0,6}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(serde_json::Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..5).prop_map(|pairs| {
                serde_json::Value::Object(pairs.into_iter().collect())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn reflexive_without_nan(val in value()) {
        prop_assert!(deep_equal(&val, &val));
    }

    #[test]
    fn symmetric(a in value(), b in value()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn independent_conversions_of_same_json_are_equal(j in json()) {
        let a = Value::from(&j);
        let b = Value::from(&j);
        prop_assert!(deep_equal(&a, &b));
    }

    #[test]
    fn shared_handle_is_reflexive(val in value()) {
        prop_assert!(deep_equal(&val, &val.clone()));
    }
}
