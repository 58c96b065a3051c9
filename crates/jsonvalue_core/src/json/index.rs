use serde_json::Value;

/// Key type accepted by [`JsonValue::at`](crate::json::JsonValue::at).
///
/// Integers select array elements, strings select object members. A key of
/// the wrong flavor for the value, or one that does not resolve, yields `None`.
pub trait JsonIndex {
	/// Borrow the child this key selects, if any.
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl JsonIndex for usize {
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
		match value {
			Value::Array(items) => items.get(*self),
			_ => None,
		}
	}
}

macro_rules! converted_index {
	($($ty:ty),*) => {
		$(
			impl JsonIndex for $ty {
				fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
					usize::try_from(*self).ok()?.select(value)
				}
			}
		)*
	};
}

converted_index!(i32, i64, isize, u32, u64);

impl JsonIndex for str {
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
		match value {
			Value::Object(map) => map.get(self),
			_ => None,
		}
	}
}

impl JsonIndex for String {
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
		self.as_str().select(value)
	}
}

impl<T: JsonIndex + ?Sized> JsonIndex for &T {
	fn select<'v>(&self, value: &'v Value) -> Option<&'v Value> {
		(**self).select(value)
	}
}
