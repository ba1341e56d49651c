//! Conversion of raw inputs into canonical form.
//!
//! The conversion never fails and may drop information:
//!
//! - mappings and sequences keep every entry, recursing into children;
//! - objects keep only their structured properties (sequences, mappings,
//!   nested objects, opaque handles), so an object holding only scalars
//!   becomes an empty container;
//! - opaque handles become empty containers;
//! - scalars pass through.

use crate::key::Key;
use crate::value::{CanonicalValue, Container, InputValue};

/// Normalize `value` into a [`CanonicalValue`]. Never fails.
pub fn normalize(value: &InputValue) -> CanonicalValue {
    match value {
        InputValue::Scalar(s) => CanonicalValue::Scalar(s.clone()),
        InputValue::List(items) => CanonicalValue::Container(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (Key::from(i), normalize(item)))
                .collect(),
        ),
        InputValue::Map(entries) => {
            let mut container = Container::with_capacity(entries.len());
            for (key, item) in entries {
                // Later duplicates overwrite the value but keep the first position.
                container.insert(key.clone().canonical(), normalize(item));
            }
            CanonicalValue::Container(container)
        }
        InputValue::Object { properties, .. } => {
            let mut container = Container::new();
            for (name, item) in properties {
                if matches!(item, InputValue::Scalar(_)) {
                    continue;
                }
                container.insert(Key::parse(name), normalize(item));
            }
            CanonicalValue::Container(container)
        }
        InputValue::Opaque(_) => CanonicalValue::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Scalar;
    use proptest::prelude::*;

    fn obj(properties: Vec<(&str, InputValue)>) -> InputValue {
        InputValue::Object {
            class: "Thing".into(),
            properties: properties
                .into_iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(
            normalize(&InputValue::from("x")),
            CanonicalValue::Scalar(Scalar::from("x"))
        );
        assert_eq!(normalize(&InputValue::null()), CanonicalValue::from(Scalar::Null));
    }

    #[test]
    fn lists_are_keyed_by_position() {
        let value = normalize(&InputValue::List(vec!["a".into(), "b".into()]));
        let c = value.as_container().unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(&Key::Index(1)), Some(&CanonicalValue::from(Scalar::from("b"))));
    }

    #[test]
    fn scalar_only_object_becomes_empty_container() {
        let value = normalize(&obj(vec![("name", "x".into()), ("size", 3i64.into())]));
        assert_eq!(value, CanonicalValue::empty());
    }

    #[test]
    fn object_keeps_structured_properties() {
        let value = normalize(&obj(vec![
            ("name", "x".into()),
            ("tags", InputValue::List(vec!["t".into()])),
            ("handle", InputValue::Opaque("stream".into())),
        ]));
        let c = value.as_container().unwrap();
        let keys: Vec<String> = c.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["tags", "handle"]);
        assert_eq!(c.get(&Key::from("handle")), Some(&CanonicalValue::empty()));
    }

    #[test]
    fn nested_objects_in_maps_are_normalized() {
        let value = normalize(&InputValue::map([
            ("plain", InputValue::from(1i64)),
            ("inner", obj(vec![("x", 1i64.into())])),
        ]));
        let c = value.as_container().unwrap();
        assert_eq!(c.get(&Key::from("plain")), Some(&CanonicalValue::from(Scalar::Int(1))));
        assert_eq!(c.get(&Key::from("inner")), Some(&CanonicalValue::empty()));
    }

    #[test]
    fn duplicate_keys_keep_first_position_last_value() {
        let value = normalize(&InputValue::map([
            ("a", InputValue::from(1i64)),
            ("b", InputValue::from(2i64)),
            ("a", InputValue::from(3i64)),
        ]));
        let c = value.as_container().unwrap();
        assert_eq!(c.get_index(0), Some((&Key::from("a"), &CanonicalValue::from(Scalar::Int(3)))));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn direct_decimal_names_share_the_index_slot() {
        let value = normalize(&InputValue::Map(vec![
            (Key::Index(0), InputValue::from("a")),
            (Key::Name("0".into()), InputValue::from("b")),
            (Key::Name("x".into()), InputValue::from("c")),
        ]));
        let c = value.as_container().unwrap();
        let keys: Vec<&Key> = c.keys().collect();
        assert_eq!(keys, vec![&Key::Index(0), &Key::Name("x".into())]);
        assert_eq!(c.get(&Key::Index(0)), Some(&CanonicalValue::from(Scalar::from("b"))));
    }

    #[test]
    fn opaque_top_level_is_empty() {
        assert_eq!(
            normalize(&InputValue::Opaque("resource".into())),
            CanonicalValue::empty()
        );
    }

    fn arb_scalar() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            Just(Scalar::Null),
            any::<bool>().prop_map(Scalar::Bool),
            any::<i64>().prop_map(Scalar::Int),
            (-1.0e6..1.0e6f64).prop_map(Scalar::Float),
            "[a-z0-9]{0,6}".prop_map(Scalar::Str),
        ]
    }

    fn arb_input() -> impl Strategy<Value = InputValue> {
        let leaf = prop_oneof![
            arb_scalar().prop_map(InputValue::Scalar),
            "[a-z]{1,4}".prop_map(InputValue::Opaque),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..5).prop_map(InputValue::List),
                prop::collection::vec(("[a-z0-9]{1,3}", inner.clone()), 0..5)
                    .prop_map(InputValue::map),
                prop::collection::vec(("[a-z]{1,3}", inner), 0..5).prop_map(|properties| {
                    InputValue::Object {
                        class: "Generated".into(),
                        properties,
                    }
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in arb_input()) {
            let once = normalize(&input);
            let twice = normalize(&InputValue::from(once.clone()));
            prop_assert_eq!(once, twice);
        }
    }
}
