use jsonvalue::json::{JsonError, JsonKind, JsonValue, Result};
use serde::Serialize;

use crate::cmd::InputArgs;
use crate::cmd::util::select;

#[derive(Debug, Serialize, PartialEq)]
struct ChildRow {
	#[serde(skip_serializing_if = "Option::is_none")]
	key: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	index: Option<usize>,
	kind: JsonKind,
}

/// List children of the selected object or array.
pub fn run(input: &InputArgs, json: bool) -> Result<()> {
	let selection = select(input)?;
	let rows = child_rows(&selection.value);

	if json {
		let text = serde_json::to_string(&rows).map_err(|err| JsonError::Io(err.into()))?;
		println!("{text}");
		return Ok(());
	}

	if rows.is_empty() && !selection.value.kind().is_container() {
		println!("{} has no children ({})", selection.label, selection.value.kind());
		return Ok(());
	}
	for row in &rows {
		match (&row.key, row.index) {
			(Some(key), _) => println!("{key}\t{}", row.kind),
			(None, Some(index)) => println!("[{index}]\t{}", row.kind),
			(None, None) => {}
		}
	}
	Ok(())
}

fn child_rows(value: &JsonValue) -> Vec<ChildRow> {
	match value.kind() {
		JsonKind::Object => value
			.entries()
			.map(|(key, child)| ChildRow {
				key: Some(key.to_owned()),
				index: None,
				kind: child.kind(),
			})
			.collect(),
		JsonKind::Array => value
			.members()
			.enumerate()
			.map(|(index, child)| ChildRow {
				key: None,
				index: Some(index),
				kind: child.kind(),
			})
			.collect(),
		_ => Vec::new(),
	}
}

#[cfg(test)]
mod tests {
	use jsonvalue::json::{JsonKind, JsonValue};
	use serde_json::json;

	use super::{ChildRow, child_rows};

	#[test]
	fn object_rows_carry_keys() {
		let rows = child_rows(&JsonValue::from_object(json!({"a": 1, "b": [true]})));
		assert_eq!(
			rows,
			vec![
				ChildRow {
					key: Some("a".to_owned()),
					index: None,
					kind: JsonKind::Number,
				},
				ChildRow {
					key: Some("b".to_owned()),
					index: None,
					kind: JsonKind::Array,
				},
			]
		);
	}

	#[test]
	fn array_rows_carry_indices() {
		let rows = child_rows(&JsonValue::from_object(json!(["x", null])));
		assert_eq!(rows.iter().map(|row| row.index).collect::<Vec<_>>(), vec![Some(0), Some(1)]);
		assert_eq!(rows[1].kind, JsonKind::Null);
	}

	#[test]
	fn scalars_and_missing_have_no_rows() {
		assert!(child_rows(&JsonValue::from_object(json!(3))).is_empty());
		assert!(child_rows(&JsonValue::absent()).is_empty());
	}
}
