mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use log::info;
use rs_charlm_core::model::language_model::LanguageModel;
use rs_charlm_core::model::random_source::RandomMode;

fn main() -> Result<()> {
	let config = Config::parse();

	// RUST_LOG wins over --log-level when set
	let mut logger_builder = env_logger::Builder::new();
	logger_builder.filter_level(config.log_level);
	logger_builder.parse_default_env();
	logger_builder.init();

	let window_length = usize::try_from(config.window_length).context("Window length is too large")?;
	let mode = RandomMode::from_mode(&config.mode);
	info!("window length {}, mode {:?}", window_length, mode);

	let mut model = LanguageModel::new(window_length, mode)?;
	model
		.train_file(&config.filename)
		.with_context(|| format!("Failed to train on {}", config.filename.display()))?;

	if config.show_table {
		eprint!("{}", model);
	}

	println!("{}", model.generate(&config.initial_text, config.text_length));

	Ok(())
}
