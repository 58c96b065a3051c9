use thiserror::Error;

use crate::json::JsonKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Decoder failure recorded in a [`JsonValue`](crate::json::JsonValue) error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// Input is not syntactically valid JSON.
	#[error("syntax error at line {line}, column {column}: {message}")]
	Syntax {
		/// Decoder-provided description.
		message: String,
		/// One-based line of the failure.
		line: usize,
		/// One-based column of the failure.
		column: usize,
	},
	/// Input ended before a complete value was read.
	#[error("unexpected end of input at line {line}, column {column}")]
	UnexpectedEof {
		/// One-based line where input ended.
		line: usize,
		/// One-based column where input ended.
		column: usize,
	},
	/// Input was well-formed but not representable as a value tree.
	#[error("invalid data at line {line}, column {column}: {message}")]
	Data {
		/// Decoder-provided description.
		message: String,
		/// One-based line of the failure.
		line: usize,
		/// One-based column of the failure.
		column: usize,
	},
	/// Top-level scalar rejected because fragments are disabled.
	#[error("top-level {kind} not allowed without fragments enabled")]
	FragmentNotAllowed {
		/// Kind of the rejected root value.
		kind: JsonKind,
	},
	/// Decoded tree nests deeper than the configured ceiling.
	#[error("nesting depth {depth} exceeds limit {max_depth}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
		/// Observed container depth.
		depth: usize,
	},
}

impl DecodeError {
	/// Human-readable failure description without location prefix.
	pub fn message(&self) -> String {
		match self {
			Self::Syntax { message, .. } | Self::Data { message, .. } => message.clone(),
			Self::UnexpectedEof { .. } => "unexpected end of input".to_owned(),
			Self::FragmentNotAllowed { kind } => format!("top-level {kind} not allowed"),
			Self::DepthExceeded { max_depth, depth } => format!("depth {depth} exceeds {max_depth}"),
		}
	}

	/// One-based `(line, column)` when the decoder reported a position.
	pub fn location(&self) -> Option<(usize, usize)> {
		match self {
			Self::Syntax { line, column, .. } | Self::Data { line, column, .. } | Self::UnexpectedEof { line, column } => Some((*line, *column)),
			Self::FragmentNotAllowed { .. } | Self::DepthExceeded { .. } => None,
		}
	}
}

impl From<serde_json::Error> for DecodeError {
	fn from(err: serde_json::Error) -> Self {
		let (line, column) = (err.line(), err.column());
		match err.classify() {
			serde_json::error::Category::Eof => Self::UnexpectedEof { line, column },
			serde_json::error::Category::Data => Self::Data {
				message: strip_position(&err),
				line,
				column,
			},
			serde_json::error::Category::Syntax | serde_json::error::Category::Io => Self::Syntax {
				message: strip_position(&err),
				line,
				column,
			},
		}
	}
}

/// Errors produced by fallible operations around the wrapper.
#[derive(Debug, Error)]
pub enum JsonError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input bytes failed to decode.
	#[error("decode: {0}")]
	Decode(#[from] DecodeError),
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
}

// serde_json appends " at line N column M" to its Display output.
fn strip_position(err: &serde_json::Error) -> String {
	let text = err.to_string();
	match text.rfind(" at line ") {
		Some(at) => text[..at].to_owned(),
		None => text,
	}
}
