use std::path::PathBuf;

use clap::Args;

/// Selected-value report command.
pub mod get;
/// Kind-only query command.
pub mod kind;
/// Child listing command.
pub mod keys;
/// Truncating value renderer.
pub mod print;
/// Input loading and path selection shared by commands.
pub mod util;

/// Input document and selection flags shared by every command.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
	/// JSON file to read, or `-` for stdin.
	pub path: PathBuf,
	/// Path to select, e.g. `items[0].title`.
	#[arg(long)]
	pub at: Option<String>,
	/// Accept a scalar document root.
	#[arg(long)]
	pub fragments: bool,
	/// Reject documents nested deeper than this.
	#[arg(long)]
	pub max_depth: Option<usize>,
}
