use jsonvalue::json::{JsonError, JsonKind, Result};
use serde::Serialize;
use serde_json::Value;

use crate::cmd::InputArgs;
use crate::cmd::print::{PrintOptions, Rendered};
use crate::cmd::util::select;

#[derive(Serialize)]
struct GetReport<'a> {
	path: &'a str,
	kind: JsonKind,
	present: bool,
	value: Option<&'a Value>,
}

/// Print the selected value as text, or a JSON report with `json`.
pub fn run(input: &InputArgs, json: bool, print_options: PrintOptions) -> Result<()> {
	let selection = select(input)?;
	let value = &selection.value;

	if json {
		let report = GetReport {
			path: &selection.label,
			kind: value.kind(),
			present: value.is_present(),
			value: value.underlying(),
		};
		let text = serde_json::to_string_pretty(&report).map_err(|err| JsonError::Io(err.into()))?;
		println!("{text}");
		return Ok(());
	}

	println!("path: {}", selection.label);
	println!("kind: {}", value.kind());
	match value.underlying() {
		Some(inner) => {
			println!("value:");
			print!("{}", Rendered::new(inner, print_options));
		}
		None => println!("value: <missing>"),
	}
	Ok(())
}
