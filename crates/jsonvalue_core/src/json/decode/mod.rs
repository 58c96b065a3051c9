use serde_json::Value;

use crate::json::{DecodeError, JsonKind, ReadOptions};

/// Decode raw bytes into a native value tree.
///
/// `serde_json` does the parsing; this seam adds the root-fragment and
/// nesting-depth rules from `options`.
pub fn decode(data: &[u8], options: &ReadOptions) -> std::result::Result<Value, DecodeError> {
	let value: Value = serde_json::from_slice(data)?;

	let kind = JsonKind::classify(&value);
	if !options.allow_fragments && !kind.is_container() {
		return Err(DecodeError::FragmentNotAllowed { kind });
	}

	if let Some(max_depth) = options.max_depth {
		let depth = nesting_depth(&value);
		if depth > max_depth {
			return Err(DecodeError::DepthExceeded { max_depth, depth });
		}
	}

	Ok(value)
}

/// Count container levels; scalars are depth 0, `[]` and `{}` are depth 1.
pub(crate) fn nesting_depth(value: &Value) -> usize {
	let mut max = 0_usize;
	let mut stack = vec![(value, 0_usize)];

	while let Some((item, depth)) = stack.pop() {
		match item {
			Value::Array(items) => {
				max = max.max(depth + 1);
				stack.extend(items.iter().map(|child| (child, depth + 1)));
			}
			Value::Object(map) => {
				max = max.max(depth + 1);
				stack.extend(map.values().map(|child| (child, depth + 1)));
			}
			_ => {}
		}
	}

	max
}
