/// Property-based tests using proptest
/// Wire fidelity must hold for any enum string and any undeclared key
use proptest::prelude::*;
use serde_json::{json, Value};
use straddle_client::model::prelude::*;
use straddle_client::models::*;

/// Arbitrary JSON leaves and shallow containers
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

// Property: any enum string parses and comes back byte-for-byte
proptest! {
    #[test]
    fn unknown_enum_strings_round_trip(status in "\\PC{0,24}") {
        let balance = PaykeyBalance::from_json(json!({"status": status.clone()})).unwrap();

        prop_assert_eq!(balance.status().map(|s| s.as_str()), Some(status.as_str()));

        let text = serde_json::to_string(&balance).unwrap();
        let back: PaykeyBalance = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&back, &balance);

        let known = ["pending", "completed", "failed"].contains(&status.as_str());
        prop_assert_eq!(balance.validate().is_ok(), known);
    }

    #[test]
    fn enum_equality_matches_wire_string(a in "[a-z_]{1,10}", b in "[a-z_]{1,10}") {
        let left = ApiEnum::<PaymentStatus>::from_raw(a.clone());
        let right = ApiEnum::<PaymentStatus>::from_raw(b.clone());
        prop_assert_eq!(left == right, a == b);
    }
}

// Property: undeclared keys survive serialize then deserialize untouched
proptest! {
    #[test]
    fn extra_keys_survive_round_trip(
        extras in prop::collection::btree_map("x_[a-z]{1,8}", json_value(), 0..6)
    ) {
        let mut payload = serde_json::Map::new();
        payload.insert("id".to_string(), json!("fe_1"));
        payload.insert("amount".to_string(), json!(2500));
        payload.insert("trace_number".to_string(), Value::Null);
        for (key, value) in &extras {
            payload.insert(key.clone(), value.clone());
        }
        let payload = Value::Object(payload);

        let event = FundingEvent::from_json(payload.clone()).unwrap();
        prop_assert_eq!(event.to_json(), payload);

        let back: FundingEvent = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        prop_assert_eq!(&back, &event);
        for key in extras.keys() {
            prop_assert!(back.has_field(key));
        }
        prop_assert!(back.trace_number().is_null());
    }

    #[test]
    fn builder_only_emits_set_keys(amount in any::<i64>(), set_currency in any::<bool>()) {
        let mut builder = ChargeCreateParams::builder().amount(amount);
        if set_currency {
            builder = builder.currency("USD");
        }
        let params = builder.build().unwrap();

        let expected = if set_currency { 2 } else { 1 };
        prop_assert_eq!(params.raw().len(), expected);
        prop_assert_eq!(params.amount(), Some(amount));
    }
}
