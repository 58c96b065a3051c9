use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// JSON shape of a wrapped value, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
	/// String-keyed mapping.
	Object,
	/// Ordered sequence.
	Array,
	/// Text value.
	String,
	/// Integral or fractional number.
	Number,
	/// Boolean literal.
	Bool,
	/// JSON `null`, or no value at all.
	#[default]
	Null,
	/// Shape could not be determined, e.g. after a failed decode.
	Unknown,
}

impl JsonKind {
	/// All kinds in classification precedence order.
	pub const ALL: [JsonKind; 7] = [
		JsonKind::Object,
		JsonKind::Array,
		JsonKind::String,
		JsonKind::Number,
		JsonKind::Bool,
		JsonKind::Null,
		JsonKind::Unknown,
	];

	/// Classify a decoded value by its runtime shape.
	///
	/// `Bool` must be checked before `Number`: some decoders model booleans as
	/// a numeric subtype. `serde_json` keeps them distinct, but the arm order
	/// below still holds that precedence.
	pub fn classify(value: &Value) -> Self {
		match value {
			Value::Object(_) => Self::Object,
			Value::Array(_) => Self::Array,
			Value::String(_) => Self::String,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::Null => Self::Null,
		}
	}

	/// Classify an optional value; `None` is the absent marker.
	pub fn of(value: Option<&Value>) -> Self {
		value.map_or(Self::Null, Self::classify)
	}

	/// Lowercase label used in output and messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::Array => "array",
			Self::String => "string",
			Self::Number => "number",
			Self::Bool => "bool",
			Self::Null => "null",
			Self::Unknown => "unknown",
		}
	}

	/// Whether the kind holds children (object or array).
	pub fn is_container(self) -> bool {
		matches!(self, Self::Object | Self::Array)
	}

	/// Whether the kind is a leaf scalar (string, number, bool).
	pub fn is_scalar(self) -> bool {
		matches!(self, Self::String | Self::Number | Self::Bool)
	}
}

impl fmt::Display for JsonKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
