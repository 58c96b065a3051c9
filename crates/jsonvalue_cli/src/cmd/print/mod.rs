use std::fmt;

use serde_json::Value;

/// Output truncation and formatting limits for rendered values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Indented, truncated text view of a decoded value.
pub struct Rendered<'a> {
	value: &'a Value,
	options: PrintOptions,
}

impl<'a> Rendered<'a> {
	/// Render `value` under `options`.
	pub fn new(value: &'a Value, options: PrintOptions) -> Self {
		Self { value, options }
	}

	fn write_value(&self, f: &mut fmt::Formatter<'_>, value: &Value, indent: usize, depth: u32) -> fmt::Result {
		let pad = " ".repeat(indent);
		let options = self.options;
		match value {
			Value::Null => writeln!(f, "{pad}null"),
			Value::Bool(v) => writeln!(f, "{pad}{v}"),
			Value::Number(v) => writeln!(f, "{pad}{v}"),
			Value::String(v) => writeln!(f, "{pad}\"{}\"", truncate(v, options.max_string_len)),
			Value::Array(items) => {
				if items.is_empty() {
					return writeln!(f, "{pad}[]");
				}
				if depth >= options.max_print_depth {
					return writeln!(f, "{pad}[... {} items]", items.len());
				}
				writeln!(f, "{pad}[")?;
				for item in items.iter().take(options.max_array_items) {
					self.write_value(f, item, indent + 2, depth + 1)?;
				}
				if items.len() > options.max_array_items {
					writeln!(f, "{pad}  ... {} more", items.len() - options.max_array_items)?;
				}
				writeln!(f, "{pad}]")
			}
			Value::Object(map) => {
				if map.is_empty() {
					return writeln!(f, "{pad}{{}}");
				}
				if depth >= options.max_print_depth {
					return writeln!(f, "{pad}{{ ... {} members }}", map.len());
				}
				writeln!(f, "{pad}{{")?;
				for (key, member) in map.iter().take(options.max_members_per_object) {
					write!(f, "{pad}  {key} = ")?;
					if matches!(member, Value::Object(inner) if !inner.is_empty()) || matches!(member, Value::Array(inner) if !inner.is_empty()) {
						writeln!(f)?;
						self.write_value(f, member, indent + 4, depth + 1)?;
					} else {
						self.write_value(f, member, 0, depth + 1)?;
					}
				}
				if map.len() > options.max_members_per_object {
					writeln!(f, "{pad}  ... {} more members", map.len() - options.max_members_per_object)?;
				}
				writeln!(f, "{pad}}}")
			}
		}
	}
}

impl fmt::Display for Rendered<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_value(f, self.value, 0, 0)
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
