use crate::{
    entity,
    types::{Float64, Timestamp},
    value::{Value, ValueMap},
};

///
/// Gadget
///
/// Covers every field shape the engine handles: optional scalars, a locked
/// row with no setter, lists, a nested record, a record list, an untyped
/// map, and a passthrough value.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Gadget {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub weight: Option<Float64>,
    pub rank: Option<i64>,
    pub serial: Option<String>,
    pub tags: Vec<String>,
    pub part: Option<Part>,
    pub parts: Vec<Part>,
    pub labels: ValueMap,
    pub extra: Value,
    pub created_at: Option<Timestamp>,
}

entity! {
    Gadget {
        name: "gadget",
        fields: [
            name => name: Option<String>,
            enabled => enabled: Option<bool>,
            weight => weight: Option<Float64>,
            rank => rank: Option<i64>,
            serial => serial: Option<String> [readonly],
            tags => tags: Vec<String>,
            part => part: Option<Part>,
            parts => parts: Vec<Part>,
            labels => labels: ValueMap,
            extra => extra: Value,
            createdAt => created_at: Option<Timestamp>,
        ],
    }
}

///
/// Part
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Part {
    pub code: Option<String>,
    pub count: Option<u64>,
}

entity! {
    Part {
        name: "part",
        fields: [
            code => code: Option<String>,
            count => count: Option<u64>,
        ],
    }
}

///
/// Account
///
/// Identity-field override: keys on `email`, not `name`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Account {
    pub email: Option<String>,
    pub name: Option<String>,
}

entity! {
    Account {
        name: "account",
        id_field: "email",
        fields: [
            email => email: Option<String>,
            name => name: Option<String>,
        ],
    }
}

pub(crate) fn part_values(code: &str, count: u64) -> ValueMap {
    let mut values = ValueMap::new();
    values.insert("code", Value::from(code));
    values.insert("count", Value::from(count));
    values
}

pub(crate) fn gadget_values() -> ValueMap {
    let mut values = ValueMap::new();
    values.insert("name", Value::from("widget-9"));
    values.insert("enabled", Value::from(true));
    values.insert("rank", Value::from(-2_i64));
    values.insert(
        "tags",
        Value::List(vec![Value::from("alpha"), Value::from("beta")]),
    );
    values.insert("part", Value::Map(part_values("p-1", 3)));
    values.insert(
        "parts",
        Value::List(vec![
            Value::Map(part_values("p-2", 1)),
            Value::Map(part_values("p-3", 4)),
        ]),
    );
    values.insert("createdAt", Value::from(1_383_233_887_000_u64));
    values
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        copy::DeepCopy,
        hydrate::HydrateError,
        model::FieldKind,
        traits::{Entity, EntityIdentity},
        value::ValueKind,
    };

    #[test]
    fn test_hydrates_matching_keys_and_defaults_the_rest() {
        let gadget = Gadget::from_values(gadget_values()).unwrap();

        assert_eq!(gadget.name.as_deref(), Some("widget-9"));
        assert_eq!(gadget.enabled, Some(true));
        assert_eq!(gadget.rank, Some(-2));
        assert_eq!(gadget.tags, vec!["alpha", "beta"]);
        assert_eq!(gadget.created_at, Some(Timestamp::from_millis(1_383_233_887_000)));

        let part = gadget.part.as_ref().unwrap();
        assert_eq!(part.code.as_deref(), Some("p-1"));
        assert_eq!(part.count, Some(3));
        assert_eq!(gadget.parts.len(), 2);

        // no matching key: left at default
        assert_eq!(gadget.weight, None);
        assert!(gadget.labels.is_empty());
        assert_eq!(gadget.extra, Value::Null);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut values = gadget_values();
        values.insert("zzz", Value::from("whatever"));
        values.insert("anotherUnknown", Value::Bool(false));

        let gadget = Gadget::from_values(values).unwrap();
        assert_eq!(gadget, Gadget::from_values(gadget_values()).unwrap());
    }

    #[test]
    fn test_rows_without_setters_are_skipped() {
        let mut values = ValueMap::new();
        values.insert("name", Value::from("widget-9"));
        values.insert("serial", Value::from("sn-123"));

        let gadget = Gadget::from_values(values).unwrap();
        assert_eq!(gadget.serial, None, "locked row never hydrates");
        assert_eq!(gadget.name.as_deref(), Some("widget-9"));
    }

    #[test]
    fn test_null_reads_as_unset() {
        let mut values = ValueMap::new();
        values.insert("name", Value::Null);
        values.insert("enabled", Value::Null);

        let gadget = Gadget::from_values(values).unwrap();
        assert_eq!(gadget.name, None);
        assert_eq!(gadget.enabled, None);
    }

    #[test]
    fn test_type_mismatch_carries_full_path() {
        let mut values = ValueMap::new();
        values.insert(
            "parts",
            Value::List(vec![
                Value::Map(part_values("ok", 1)),
                Value::Map({
                    let mut bad = ValueMap::new();
                    bad.insert("code", Value::Bool(false));
                    bad
                }),
            ]),
        );

        let error = Gadget::from_values(values).unwrap_err();
        assert_eq!(
            error,
            HydrateError::TypeMismatch {
                entity: "gadget",
                path: {
                    let mut path = crate::hydrate::FieldPath::new();
                    path.push_front(crate::hydrate::PathSegment::Field("code"));
                    path.push_front(crate::hydrate::PathSegment::Index(1));
                    path.push_front(crate::hydrate::PathSegment::Field("parts"));
                    path
                },
                expected: FieldKind::Text,
                found: ValueKind::Bool,
            }
        );
        assert_eq!(
            error.to_string(),
            "gadget: field `parts[1].code` expected text, found bool"
        );
    }

    #[test]
    fn test_scalar_mismatch_fails_fast() {
        let mut values = ValueMap::new();
        values.insert("enabled", Value::from("yes"));

        let error = Gadget::from_values(values).unwrap_err();
        assert_eq!(
            error.to_string(),
            "gadget: field `enabled` expected bool, found text"
        );
    }

    #[test]
    fn test_identity_reads_the_declared_field() {
        let gadget = Gadget::from_values(gadget_values()).unwrap();
        assert_eq!(gadget.id(), Some("widget-9".to_string()));
        assert_eq!(Gadget::ID_FIELD, "name");

        let unset = Gadget::default();
        assert_eq!(unset.id(), None);
    }

    #[test]
    fn test_identity_override_uses_email() {
        let mut values = ValueMap::new();
        values.insert("email", Value::from("a@example.com"));
        values.insert("name", Value::from("a_example_com"));

        let account = Account::from_values(values).unwrap();
        assert_eq!(account.id(), Some("a@example.com".to_string()));
        assert_eq!(account.name.as_deref(), Some("a_example_com"));
    }

    #[test]
    fn test_to_values_round_trips_present_fields() {
        let gadget = Gadget::from_values(gadget_values()).unwrap();
        let values = gadget.to_values();

        assert_eq!(values.get("name"), Some(&Value::from("widget-9")));
        assert_eq!(values.get("rank"), Some(&Value::from(-2_i64)));
        assert!(values.get("weight").is_none(), "unset fields are omitted");
        assert!(values.get("extra").is_none(), "null passthrough is omitted");

        let again = Gadget::from_values(values).unwrap();
        assert_eq!(again, gadget);
    }

    #[test]
    fn test_field_value_reads_through_the_table() {
        let gadget = Gadget::from_values(gadget_values()).unwrap();
        assert_eq!(gadget.field_value("enabled"), Some(Value::Bool(true)));
        assert_eq!(gadget.field_value("nope"), None);
        assert_eq!(Gadget::default().field_value("enabled"), None);
    }

    #[test]
    fn test_models_are_well_formed() {
        assert!(Gadget::model().check().is_ok());
        assert!(Part::model().check().is_ok());
        assert!(Account::model().check().is_ok());

        assert_eq!(
            Gadget::model().field_kind("parts"),
            Some(FieldKind::List(&FieldKind::Record("part")))
        );
    }

    #[test]
    fn test_deep_copy_round_trips() {
        let gadget = Gadget::from_values(gadget_values()).unwrap();
        assert_eq!(gadget.deep_copy().deep_copy(), gadget);
    }

    #[test]
    fn test_deep_copy_isolates_nested_state() {
        let original = Gadget::from_values(gadget_values()).unwrap();
        let snapshot = original.clone();

        let mut copy = original.deep_copy();
        copy.part.as_mut().unwrap().code = Some("mutated".to_string());
        copy.parts.push(Part::default());
        copy.tags.push("extra".to_string());

        assert_eq!(original, snapshot, "copy mutations never reach the source");
        assert_ne!(copy, original);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::{copy::DeepCopy, traits::Entity};
    use proptest::prelude::*;

    fn arb_text() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,7}"
    }

    prop_compose! {
        fn arb_part()(
            code in proptest::option::of(arb_text()),
            count in proptest::option::of(any::<u64>()),
        ) -> Part {
            Part { code, count }
        }
    }

    prop_compose! {
        fn arb_gadget()(
            name in proptest::option::of(arb_text()),
            enabled in proptest::option::of(any::<bool>()),
            rank in proptest::option::of(any::<i64>()),
            tags in proptest::collection::vec(arb_text(), 0..4),
            part in proptest::option::of(arb_part()),
            parts in proptest::collection::vec(arb_part(), 0..4),
        ) -> Gadget {
            Gadget {
                name,
                enabled,
                rank,
                tags,
                part,
                parts,
                ..Gadget::default()
            }
        }
    }

    proptest! {
        #[test]
        fn deep_copy_round_trips(gadget in arb_gadget()) {
            prop_assert_eq!(&gadget.deep_copy().deep_copy(), &gadget);
        }

        #[test]
        fn deep_copy_isolates_lists(gadget in arb_gadget()) {
            let snapshot = gadget.clone();
            let mut copy = gadget.deep_copy();
            copy.tags.push("sentinel".to_string());
            copy.parts.push(Part::default());

            prop_assert_eq!(&gadget, &snapshot);
        }

        #[test]
        fn hydration_applies_exactly_the_matching_subset(
            name in proptest::option::of(arb_text()),
            rank in proptest::option::of(any::<i64>()),
        ) {
            let mut values = ValueMap::new();
            if let Some(name) = &name {
                values.insert("name", Value::from(name.as_str()));
            }
            if let Some(rank) = rank {
                values.insert("rank", Value::from(rank));
            }

            let gadget = Gadget::from_values(values).unwrap();
            prop_assert_eq!(&gadget.name, &name);
            prop_assert_eq!(gadget.rank, rank);
            prop_assert_eq!(gadget.enabled, None);
            prop_assert!(gadget.tags.is_empty());
        }

        #[test]
        fn unknown_keys_never_affect_the_result(
            unknown in proptest::collection::vec("[A-Z]{1,6}", 0..5),
        ) {
            let mut values = gadget_values();
            for key in unknown {
                values.insert(key, Value::from("noise"));
            }

            let gadget = Gadget::from_values(values).unwrap();
            prop_assert_eq!(&gadget, &Gadget::from_values(gadget_values()).unwrap());
        }
    }
}
