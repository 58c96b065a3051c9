mod decode;
mod error;
mod index;
mod kind;
mod options;
mod path;
mod value;

/// Decoder seam over `serde_json`.
pub use decode::decode;
/// Error and result aliases.
pub use error::{DecodeError, JsonError, Result};
/// Navigation key trait for `JsonValue::at`.
pub use index::JsonIndex;
/// JSON shape classification.
pub use kind::JsonKind;
/// Decoder behavior switches.
pub use options::ReadOptions;
/// Dotted key path parser types.
pub use path::{JsonPath, PathStep};
/// Wrapped value and its child iterators.
pub use value::{Entries, JsonValue, Members};
