/// Behavior switches for decoding raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
	/// Accept a scalar (`42`, `"x"`, `true`, `null`) as the root value.
	pub allow_fragments: bool,
	/// Maximum container nesting depth; `None` leaves only the decoder's own ceiling.
	pub max_depth: Option<usize>,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			allow_fragments: false,
			max_depth: None,
		}
	}
}

impl ReadOptions {
	/// Object or array roots only.
	pub fn strict() -> Self {
		Self::default()
	}

	/// Any JSON value accepted at the root.
	pub fn lenient() -> Self {
		Self {
			allow_fragments: true,
			max_depth: None,
		}
	}

	/// Copy of these options with a nesting ceiling.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}
}
