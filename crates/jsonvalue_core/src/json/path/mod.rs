use std::fmt;

use serde_json::Value;

use crate::json::{JsonError, JsonIndex, Result};

/// One parsed operation in a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select an object member by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed path expression such as `users[0].name` or `["a.b"][2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl JsonPath {
	/// Parse dotted key syntax with optional `[index]` and `["key"]` selectors.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || JsonError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes.get(idx) == Some(&b'[')) {
				// Only a leading selector may stand without a key before it.
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let step = if bytes.get(idx) == Some(&b'"') {
					let (key, next) = parse_quoted(input, idx + 1).ok_or_else(invalid)?;
					idx = next;
					PathStep::Key(key)
				} else {
					let n_start = idx;
					while idx < bytes.len() && bytes[idx].is_ascii_digit() {
						idx += 1;
					}
					if idx == n_start {
						return Err(invalid());
					}
					PathStep::Index(input[n_start..idx].parse::<usize>().map_err(|_| invalid())?)
				};
				if bytes.get(idx) != Some(&b']') {
					return Err(invalid());
				}
				steps.push(step);
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

/// Read a `"`-terminated key starting after the opening quote.
///
/// Returns the unescaped key and the index just past the closing quote.
fn parse_quoted(input: &str, start: usize) -> Option<(String, usize)> {
	let mut out = String::new();
	let mut chars = input[start..].char_indices();
	while let Some((offset, ch)) = chars.next() {
		match ch {
			'"' => return Some((out, start + offset + 1)),
			'\\' => match chars.next()? {
				(_, escaped @ ('"' | '\\')) => out.push(escaped),
				_ => return None,
			},
			other => out.push(other),
		}
	}
	None
}

fn is_plain_key(key: &str) -> bool {
	!key.is_empty() && !key.contains(['.', '[', ']', '"', '\\'])
}

impl fmt::Display for JsonPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (pos, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Key(key) if is_plain_key(key) => {
					if pos > 0 {
						f.write_str(".")?;
					}
					f.write_str(key)?;
				}
				PathStep::Key(key) => {
					f.write_str("[\"")?;
					for ch in key.chars() {
						if matches!(ch, '"' | '\\') {
							f.write_str("\\")?;
						}
						write!(f, "{ch}")?;
					}
					f.write_str("\"]")?;
				}
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

impl std::str::FromStr for JsonPath {
	type Err = JsonError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

impl JsonIndex for PathStep {
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
		match self {
			PathStep::Key(key) => key.select(value),
			PathStep::Index(index) => index.select(value),
		}
	}
}
