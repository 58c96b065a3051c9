#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::InputArgs;

#[derive(Parser)]
#[command(name = "jsonvalue", about = "Inspect JSON documents by path")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the kind of the selected value.
	Kind {
		#[command(flatten)]
		input: InputArgs,
	},
	/// Print the selected value.
	Get {
		#[command(flatten)]
		input: InputArgs,
		#[arg(long)]
		json: bool,
		#[arg(long, default_value_t = 16)]
		max_items: usize,
		#[arg(long, default_value_t = 6)]
		max_depth_print: u32,
	},
	/// List object keys or array indices with child kinds.
	Keys {
		#[command(flatten)]
		input: InputArgs,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> jsonvalue::json::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Kind { input } => cmd::kind::run(&input),
		Commands::Get {
			input,
			json,
			max_items,
			max_depth_print,
		} => {
			let print_options = cmd::print::PrintOptions {
				max_array_items: max_items,
				max_print_depth: max_depth_print,
				..cmd::print::PrintOptions::default()
			};
			cmd::get::run(&input, json, print_options)
		}
		Commands::Keys { input, json } => cmd::keys::run(&input, json),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
