//! Wrapped JSON value with kind-checked navigation and coercion.
//!
//! Missing paths and kind mismatches are absence (`None` or an absent
//! [`JsonValue`]), never errors. Only a failed decode populates the error slot.

use serde_json::{Map, Number, Value};

use crate::json::{DecodeError, JsonIndex, JsonKind, JsonPath, ReadOptions, decode};

/// One decoded JSON value plus its classification and error slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonValue {
	underlying: Option<Value>,
	kind: JsonKind,
	error: Option<DecodeError>,
}

impl JsonValue {
	/// Wrap an already-decoded value. Never fails.
	pub fn from_object(value: Value) -> Self {
		Self {
			kind: JsonKind::classify(&value),
			underlying: Some(value),
			error: None,
		}
	}

	/// Value with nothing underneath; kind is `Null`.
	pub fn absent() -> Self {
		Self::default()
	}

	/// Decode `data` with default [`ReadOptions`].
	pub fn from_bytes(data: &[u8]) -> Self {
		Self::from_bytes_with(data, &ReadOptions::default())
	}

	/// Decode `data` with explicit options.
	///
	/// On failure the result has kind `Unknown`, no underlying value, and the
	/// decoder's failure in [`error`](Self::error).
	pub fn from_bytes_with(data: &[u8], options: &ReadOptions) -> Self {
		match decode(data, options) {
			Ok(value) => {
				let out = Self::from_object(value);
				tracing::trace!(kind = %out.kind, len = data.len(), "decoded json");
				out
			}
			Err(err) => {
				tracing::debug!(error = %err, len = data.len(), "json decode failed");
				Self {
					underlying: None,
					kind: JsonKind::Unknown,
					error: Some(err),
				}
			}
		}
	}

	/// Decode UTF-8 text with default [`ReadOptions`].
	pub fn from_text(text: &str) -> Self {
		Self::from_bytes(text.as_bytes())
	}

	/// Decode UTF-8 text with explicit options.
	pub fn from_text_with(text: &str, options: &ReadOptions) -> Self {
		Self::from_bytes_with(text.as_bytes(), options)
	}

	/// Classification fixed at construction.
	pub fn kind(&self) -> JsonKind {
		self.kind
	}

	/// Most recent decode failure recorded on this instance.
	pub fn error(&self) -> Option<&DecodeError> {
		self.error.as_ref()
	}

	/// Replace the error slot.
	pub fn set_error(&mut self, error: DecodeError) {
		self.error = Some(error);
	}

	/// Borrow the wrapped native value.
	pub fn underlying(&self) -> Option<&Value> {
		self.underlying.as_ref()
	}

	/// Unwrap into the native value.
	pub fn into_inner(self) -> Option<Value> {
		self.underlying
	}

	/// Whether a value exists here, including a JSON `null` literal.
	pub fn is_present(&self) -> bool {
		self.underlying.is_some()
	}

	/// Whether nothing exists here (missing path or failed decode).
	pub fn is_absent(&self) -> bool {
		self.underlying.is_none()
	}

	/// Whether this is an explicit JSON `null`.
	pub fn is_null(&self) -> bool {
		matches!(self.underlying, Some(Value::Null))
	}

	/// Select a child by array index or object key.
	///
	/// Out-of-range indices, missing keys, and keys of the wrong flavor all
	/// return [`absent`](Self::absent) with no error set, so chains such as
	/// `v.at("a").at(0).at("b")` never need intermediate checks.
	pub fn at<I: JsonIndex>(&self, index: I) -> Self {
		match self.underlying.as_ref().and_then(|value| index.select(value)) {
			Some(child) => Self::from_object(child.clone()),
			None => Self::absent(),
		}
	}

	/// Follow every step of `path` with [`at`](Self::at).
	pub fn at_path(&self, path: &JsonPath) -> Self {
		let Some(mut current) = self.underlying.as_ref() else {
			return Self::absent();
		};
		for step in &path.steps {
			match step.select(current) {
				Some(child) => current = child,
				None => return Self::absent(),
			}
		}
		Self::from_object(current.clone())
	}

	/// Parse `path` and follow it; an unparsable path is absent.
	pub fn lookup(&self, path: &str) -> Self {
		match JsonPath::parse(path) {
			Ok(path) => self.at_path(&path),
			Err(_) => Self::absent(),
		}
	}

	/// Mapping view when kind is `Object`.
	pub fn as_mapping(&self) -> Option<&Map<String, Value>> {
		match (self.kind, self.underlying.as_ref()) {
			(JsonKind::Object, Some(Value::Object(map))) => Some(map),
			_ => None,
		}
	}

	/// Ordered sequence view when kind is `Array`.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match (self.kind, self.underlying.as_ref()) {
			(JsonKind::Array, Some(Value::Array(items))) => Some(items),
			_ => None,
		}
	}

	/// Text when kind is `String`.
	pub fn as_str(&self) -> Option<&str> {
		match (self.kind, self.underlying.as_ref()) {
			(JsonKind::String, Some(Value::String(text))) => Some(text),
			_ => None,
		}
	}

	/// Number when kind is `Number`.
	pub fn as_number(&self) -> Option<&Number> {
		match (self.kind, self.underlying.as_ref()) {
			(JsonKind::Number, Some(Value::Number(number))) => Some(number),
			_ => None,
		}
	}

	/// Number as `i64` when it is integral and in range.
	pub fn as_i64(&self) -> Option<i64> {
		self.as_number()?.as_i64()
	}

	/// Number as `u64` when it is a non-negative integer.
	pub fn as_u64(&self) -> Option<u64> {
		self.as_number()?.as_u64()
	}

	/// Number as `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		self.as_number()?.as_f64()
	}

	/// Boolean when kind is `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		match (self.kind, self.underlying.as_ref()) {
			(JsonKind::Bool, Some(Value::Bool(flag))) => Some(*flag),
			_ => None,
		}
	}

	/// Tri-state boolean: `Some(false)` is a present `false`, `None` is absence.
	///
	/// Same result as [`as_bool`](Self::as_bool); the name marks call sites
	/// that must not read absence as `false`.
	pub fn as_optional_bool(&self) -> Option<bool> {
		self.as_bool()
	}

	/// Element or member count for arrays and objects.
	pub fn len(&self) -> Option<usize> {
		match self.underlying.as_ref()? {
			Value::Array(items) => Some(items.len()),
			Value::Object(map) => Some(map.len()),
			_ => None,
		}
	}

	/// Whether an array or object has no children; `None` for other kinds.
	pub fn is_empty(&self) -> Option<bool> {
		self.len().map(|len| len == 0)
	}

	/// Object keys; empty for other kinds.
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.as_mapping().into_iter().flat_map(|map| map.keys().map(String::as_str))
	}

	/// Wrapped array elements; empty for other kinds.
	pub fn members(&self) -> Members<'_> {
		Members {
			inner: self.as_sequence().unwrap_or_default().iter(),
		}
	}

	/// Wrapped object members; empty for other kinds.
	pub fn entries(&self) -> Entries<'_> {
		Entries {
			inner: self.as_mapping().map(|map| map.iter()),
		}
	}
}

impl From<Value> for JsonValue {
	fn from(value: Value) -> Self {
		Self::from_object(value)
	}
}

/// Iterator over array elements as [`JsonValue`]s.
#[derive(Debug, Clone)]
pub struct Members<'a> {
	inner: std::slice::Iter<'a, Value>,
}

impl Iterator for Members<'_> {
	type Item = JsonValue;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().cloned().map(JsonValue::from_object)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for Members<'_> {}

/// Iterator over object members as `(key, JsonValue)` pairs.
pub struct Entries<'a> {
	inner: Option<serde_json::map::Iter<'a>>,
}

impl<'a> Iterator for Entries<'a> {
	type Item = (&'a str, JsonValue);

	fn next(&mut self) -> Option<Self::Item> {
		let (key, value) = self.inner.as_mut()?.next()?;
		Some((key.as_str(), JsonValue::from_object(value.clone())))
	}
}

#[cfg(test)]
mod tests;
