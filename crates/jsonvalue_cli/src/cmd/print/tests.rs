use serde_json::json;

use crate::cmd::print::{PrintOptions, Rendered};

#[test]
fn renders_nested_object_with_indentation() {
	let value = json!({"name": "lamp", "tags": ["a", "b"], "stock": {"n": 2}, "none": null});
	let text = Rendered::new(&value, PrintOptions::default()).to_string();
	let expected = "{\n  name = \"lamp\"\n  none = null\n  stock = \n    {\n      n = 2\n    }\n  tags = \n    [\n      \"a\"\n      \"b\"\n    ]\n}\n";
	assert_eq!(text, expected);
}

#[test]
fn truncates_long_arrays_and_strings() {
	let options = PrintOptions {
		max_array_items: 2,
		max_string_len: 3,
		..PrintOptions::default()
	};
	let value = json!(["abcdef", 2, 3, 4]);
	let text = Rendered::new(&value, options).to_string();
	assert_eq!(text, "[\n  \"abc...\"\n  2\n  ... 2 more\n]\n");
}

#[test]
fn stops_at_print_depth() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let value = json!({"deep": {"x": [1]}, "list": [1, 2, 3]});
	let text = Rendered::new(&value, options).to_string();
	assert!(text.contains("{ ... 1 members }"), "{text}");
	assert!(text.contains("[... 3 items]"), "{text}");
}

#[test]
fn empty_containers_render_inline() {
	let value = json!({"a": [], "o": {}});
	let text = Rendered::new(&value, PrintOptions::default()).to_string();
	assert_eq!(text, "{\n  a = []\n  o = {}\n}\n");
}
