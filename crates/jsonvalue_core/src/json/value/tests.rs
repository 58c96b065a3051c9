use proptest::prelude::*;
use serde_json::{Number, Value, json};

use crate::json::{DecodeError, JsonKind, JsonPath, JsonValue, ReadOptions};

fn assert_all_coercions_absent(value: &JsonValue) {
	assert!(value.as_mapping().is_none());
	assert!(value.as_sequence().is_none());
	assert!(value.as_str().is_none());
	assert!(value.as_number().is_none());
	assert!(value.as_bool().is_none());
	assert!(value.as_optional_bool().is_none());
}

#[test]
fn chained_navigation_reaches_nested_number() {
	let root = JsonValue::from_bytes(br#"{"a":[1,2,3]}"#);
	assert!(root.error().is_none());
	assert_eq!(root.kind(), JsonKind::Object);
	assert_eq!(root.at("a").at(1).as_number(), Some(&Number::from(2)));
	assert_eq!(root.at("a").at(1_usize).as_i64(), Some(2));
}

#[test]
fn navigation_through_missing_path_is_absent() {
	let root = JsonValue::from_bytes(br#"{"a":1}"#);
	let leaf = root.at("missing").at(0).at("deeper");
	assert!(leaf.as_str().is_none());
	assert!(leaf.is_absent());
	assert_eq!(leaf.kind(), JsonKind::Null);
	assert!(leaf.error().is_none());
}

#[test]
fn optional_bool_distinguishes_false_from_missing() {
	let root = JsonValue::from_bytes(br#"{"flag":false}"#);
	assert_eq!(root.at("flag").as_optional_bool(), Some(false));
	assert_eq!(root.at("absentFlag").as_optional_bool(), None);
	assert_ne!(root.at("flag").as_optional_bool(), root.at("absentFlag").as_optional_bool());
}

#[test]
fn out_of_range_index_is_absent_without_error() {
	let three = JsonValue::from_object(json!([10, 20, 30]));
	let miss = three.at(5);
	assert!(miss.is_absent());
	assert_eq!(miss.kind(), JsonKind::Null);
	assert!(miss.error().is_none());
	assert!(three.at(-1).is_absent());
	assert_eq!(three.at(2).as_u64(), Some(30));
}

#[test]
fn wrong_flavor_keys_are_absent() {
	let object = JsonValue::from_object(json!({"0": "zero"}));
	assert!(object.at(0).is_absent());
	assert_eq!(object.at("0").as_str(), Some("zero"));

	let array = JsonValue::from_object(json!(["x"]));
	assert!(array.at("0").is_absent());

	let scalar = JsonValue::from_object(json!("text"));
	assert!(scalar.at(0).is_absent());
	assert!(scalar.at("text").is_absent());
}

#[test]
fn invalid_bytes_record_error_and_every_coercion_is_absent() {
	let root = JsonValue::from_bytes(b"{not json");
	assert_eq!(root.kind(), JsonKind::Unknown);
	assert!(root.underlying().is_none());
	assert!(matches!(root.error(), Some(DecodeError::Syntax { .. })));
	assert_all_coercions_absent(&root);
	assert!(root.len().is_none());
}

#[test]
fn children_of_failed_decode_carry_no_error() {
	let root = JsonValue::from_bytes(b"[1,");
	assert!(root.error().is_some());

	let child = root.at(0);
	assert!(child.error().is_none());
	assert!(child.is_absent());
}

#[test]
fn fragment_root_respects_options() {
	let strict = JsonValue::from_bytes(b"true");
	assert_eq!(strict.kind(), JsonKind::Unknown);
	assert_eq!(strict.error(), Some(&DecodeError::FragmentNotAllowed { kind: JsonKind::Bool }));

	let lenient = JsonValue::from_bytes_with(b"true", &ReadOptions::lenient());
	assert!(lenient.error().is_none());
	assert_eq!(lenient.as_bool(), Some(true));
}

#[test]
fn json_null_is_present_but_missing_is_not() {
	let root = JsonValue::from_text(r#"{"gone":null}"#);
	let null = root.at("gone");
	assert_eq!(null.kind(), JsonKind::Null);
	assert!(null.is_present());
	assert!(null.is_null());

	let missing = root.at("other");
	assert_eq!(missing.kind(), JsonKind::Null);
	assert!(!missing.is_present());
	assert!(!missing.is_null());
	assert_all_coercions_absent(&null);
}

#[test]
fn coercions_require_exact_kind() {
	let root = JsonValue::from_object(json!({"n": 1.5, "s": "1.5", "b": true, "a": [], "o": {}}));
	assert_eq!(root.at("n").as_f64(), Some(1.5));
	assert!(root.at("n").as_i64().is_none());
	assert!(root.at("n").as_str().is_none());
	assert!(root.at("s").as_number().is_none());
	assert!(root.at("b").as_number().is_none());
	assert_eq!(root.at("a").as_sequence(), Some(&[][..]));
	assert!(root.at("a").as_mapping().is_none());
	assert!(root.at("o").as_mapping().is_some_and(|map| map.is_empty()));
	assert!(root.at("o").as_sequence().is_none());
}

#[test]
fn absent_value_defaults() {
	let absent = JsonValue::absent();
	assert_eq!(absent, JsonValue::default());
	assert_eq!(absent.kind(), JsonKind::Null);
	assert!(absent.error().is_none());
	assert!(absent.at("x").at(0).is_absent());
}

#[test]
fn set_error_replaces_slot() {
	let mut value = JsonValue::from_bytes(b"");
	assert!(matches!(value.error(), Some(DecodeError::UnexpectedEof { .. })));

	value.set_error(DecodeError::DepthExceeded { max_depth: 1, depth: 2 });
	assert_eq!(value.error(), Some(&DecodeError::DepthExceeded { max_depth: 1, depth: 2 }));
}

#[test]
fn navigation_leaves_parent_untouched() {
	let root = JsonValue::from_object(json!({"a": {"b": 1}}));
	let before = root.clone();
	let _child = root.at("a").at("b");
	assert_eq!(root, before);
}

#[test]
fn path_lookup_matches_chained_at() {
	let root = JsonValue::from_object(json!({"users": [{"name": "ada"}, {"name": "lin", "tags": ["x"]}]}));
	assert_eq!(root.lookup("users[1].name").as_str(), Some("lin"));
	assert_eq!(root.lookup("users[1].tags[0]"), root.at("users").at(1).at("tags").at(0));
	assert!(root.lookup("users[9].name").is_absent());
	assert!(root.lookup("users..name").is_absent());

	let path = JsonPath::parse("users[0]").expect("path parses");
	assert_eq!(root.at_path(&path).at("name").as_str(), Some("ada"));
	assert!(JsonValue::absent().at_path(&path).is_absent());
}

#[test]
fn empty_path_steps_return_root() {
	let root = JsonValue::from_object(json!([1]));
	let path = JsonPath { steps: Vec::new() };
	assert_eq!(root.at_path(&path), root);
}

#[test]
fn iterators_wrap_children() {
	let root = JsonValue::from_object(json!({"list": [1, "two", null], "map": {"k": false}}));

	let kinds: Vec<JsonKind> = root.at("list").members().map(|item| item.kind()).collect();
	assert_eq!(kinds, vec![JsonKind::Number, JsonKind::String, JsonKind::Null]);
	assert_eq!(root.at("list").members().len(), 3);
	assert_eq!(root.at("list").len(), Some(3));

	let map = root.at("map");
	let entries: Vec<(&str, Option<bool>)> = map.entries().map(|(key, value)| (key, value.as_optional_bool())).collect();
	assert_eq!(entries, vec![("k", Some(false))]);

	assert_eq!(root.keys().collect::<Vec<_>>(), vec!["list", "map"]);
	assert_eq!(root.at("list").members().count(), 3);
	assert_eq!(root.at("list").entries().count(), 0);
	assert_eq!(root.at("map").members().count(), 0);
	assert_eq!(root.at("map").is_empty(), Some(false));
	assert_eq!(root.at("missing").is_empty(), None);
}

#[test]
fn values_are_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<JsonValue>();
}

fn arb_object() -> impl Strategy<Value = serde_json::Map<String, Value>> {
	let leaf = prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<i64>().prop_map(Value::from),
		any::<u64>().prop_map(Value::from),
		"[ -~]{0,6}".prop_map(Value::String),
	];
	prop::collection::btree_map("[a-z]{1,5}", leaf, 0..8).prop_map(|map| map.into_iter().collect())
}

proptest! {
	#[test]
	fn mapping_view_preserves_keys_and_values(map in arb_object()) {
		let wrapped = JsonValue::from_object(Value::Object(map.clone()));
		let view = wrapped.as_mapping().expect("object kind");
		prop_assert_eq!(view, &map);
		for (key, value) in &map {
			let child = wrapped.at(key.as_str());
			prop_assert_eq!(child.underlying(), Some(value));
		}
	}

	#[test]
	fn kind_is_stable_across_clones(map in arb_object()) {
		let wrapped = JsonValue::from_object(Value::Object(map));
		prop_assert_eq!(wrapped.kind(), wrapped.clone().kind());
		prop_assert_eq!(wrapped.kind(), JsonKind::Object);
	}
}
