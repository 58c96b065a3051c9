use std::io::Read;
use std::path::Path;

use jsonvalue::json::{JsonPath, JsonValue, ReadOptions, Result};

use crate::cmd::InputArgs;

/// Value picked out of an input document.
pub(crate) struct Selection {
	/// Canonical path text, or `<root>` when no path was given.
	pub label: String,
	/// Wrapped value at the path; absent when the path does not resolve.
	pub value: JsonValue,
}

/// Read raw bytes from a file, or stdin for `-`.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	if path == Path::new("-") {
		let mut buf = Vec::new();
		std::io::stdin().lock().read_to_end(&mut buf)?;
		return Ok(buf);
	}
	Ok(std::fs::read(path)?)
}

/// Map command flags onto decoder options.
pub(crate) fn read_options(input: &InputArgs) -> ReadOptions {
	ReadOptions {
		allow_fragments: input.fragments,
		max_depth: input.max_depth,
	}
}

/// Decode the input and follow `--at`, surfacing a decode failure as an error.
pub(crate) fn select(input: &InputArgs) -> Result<Selection> {
	let bytes = read_input(&input.path)?;
	let root = JsonValue::from_bytes_with(&bytes, &read_options(input));
	if let Some(err) = root.error() {
		return Err(err.clone().into());
	}

	match input.at.as_deref() {
		Some(text) => {
			let path = JsonPath::parse(text)?;
			tracing::debug!(path = %path, "selecting");
			Ok(Selection {
				label: path.to_string(),
				value: root.at_path(&path),
			})
		}
		None => Ok(Selection {
			label: "<root>".to_owned(),
			value: root,
		}),
	}
}
