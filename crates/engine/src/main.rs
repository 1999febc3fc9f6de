// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Match replay tool
//!
//! Builds a scorer from configuration, applies a JSON Lines match script
//! and prints the resulting score and state:
//! - Configuration from `SCOREKEEPER_*` variables, or a file given as the
//!   first argument
//! - Script from the configured path, or stdin

use std::{
	fs::File,
	io::{self, BufReader},
};

use anyhow::{Context, Result};
use tracing::info;

use scorekeeper_engine::{
	ScorerFactory, ScoringEngine, config::ReplayConfig, logging, script,
};

fn main() -> Result<()> {
	// Initialize logging first
	logging::init_logging()?;

	let config = match std::env::args().nth(1) {
		Some(path) => ReplayConfig::from_file(&path)
			.with_context(|| format!("Failed to load config from {}", path))?,
		None => ReplayConfig::from_env().unwrap_or_else(|_| {
			info!(target: "replay", "Using default configuration");
			ReplayConfig::default()
		}),
	};

	info!(target: "replay", "Sport: {}", config.sport);

	let mut scorer = ScorerFactory::create(&config.sport, config.overrides.as_ref())
		.context("Failed to create scorer")?;

	let commands = match &config.script {
		Some(path) => {
			let file = File::open(path)
				.with_context(|| format!("Failed to open script {}", path.display()))?;
			script::parse_script(BufReader::new(file))?
		}
		None => script::parse_script(io::stdin().lock())?,
	};

	info!(target: "replay", "Applying {} commands", commands.len());
	for command in commands {
		if config.verbose_logging {
			info!(target: "replay", ?command, "Command");
		}
		script::apply(&mut scorer, command);
	}

	let state = serde_json::to_string_pretty(&scorer.state()).context("Failed to encode state")?;
	println!("{}", scorer.score());
	println!("{}", state);

	info!(
		target: "replay",
		events = scorer.events().len(),
		over = scorer.is_match_over(),
		"Replay complete"
	);
	Ok(())
}
