use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line configuration of the generator.
///
/// The five positionals keep their historical order:
/// `windowLength initialText textLength mode filename`.
#[derive(Debug, Clone, Parser)]
#[command(name = "charlm")]
#[command(about = "Train a character-level Markov model on a file and generate text from a seed")]
pub struct Config {
	/// Model order: number of characters in a window (>= 1)
	#[arg(value_parser = clap::value_parser!(u64).range(1..))]
	pub window_length: u64,

	/// Seed text; generation continues from its last window
	pub initial_text: String,

	/// Number of characters to try to generate
	pub text_length: usize,

	/// "fixed" for a reproducible run (seed 20), anything else for a random one
	pub mode: String,

	/// Corpus file, read fully as text
	pub filename: PathBuf,

	/// Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
	#[arg(long, default_value = "warn")]
	pub log_level: LevelFilter,

	/// Print the trained table to stderr before generating
	#[arg(long)]
	pub show_table: bool,
}
