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

//! JSON Lines match scripts
//!
//! A script is one command per line, for example:
//!
//! ```text
//! # first rally
//! {"op":"point","side":"a"}
//! {"op":"undo"}
//! {"op":"advance_time","seconds":60}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use scorekeeper_sdk::types::Side;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::scorer::{MatchScorer, ScoringEngine};

/// Error types for reading match scripts
#[derive(Debug, Error)]
pub enum ScriptError {
	#[error("Line {line}: {source}")]
	Parse {
		line: usize,
		#[source]
		source: serde_json::Error,
	},
	#[error("Failed to read script: {0}")]
	Io(#[from] std::io::Error),
}

/// One scripted call into a scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
	Point { side: Side },
	Undo,
	Reset,
	AdvanceTime { seconds: u64 },
	EndPeriod,
	EndMatch,
}

/// Parse a whole script
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<ScriptCommand>, ScriptError> {
	let mut commands = Vec::new();

	for (idx, line) in reader.lines().enumerate() {
		let line = line?;
		let trimmed = line.trim();
		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}

		let command = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse {
			line: idx + 1,
			source,
		})?;
		commands.push(command);
	}

	Ok(commands)
}

/// Apply one command to a scorer
///
/// Football-only commands sent to another sport are ignored.
pub fn apply(scorer: &mut MatchScorer, command: ScriptCommand) {
	let sport = scorer.sport();
	debug!(?command, %sport, "Applying script command");

	match command {
		ScriptCommand::Point { side } => scorer.add_point(side),
		ScriptCommand::Undo => scorer.undo_last(),
		ScriptCommand::Reset => scorer.reset(),
		ScriptCommand::AdvanceTime { seconds } => match scorer.as_football_mut() {
			Some(football) => football.advance_time(seconds),
			None => warn!(%sport, "advance_time is football only, ignoring"),
		},
		ScriptCommand::EndPeriod => match scorer.as_football_mut() {
			Some(football) => football.end_period(),
			None => warn!(%sport, "end_period is football only, ignoring"),
		},
		ScriptCommand::EndMatch => match scorer.as_football_mut() {
			Some(football) => football.end_match(),
			None => warn!(%sport, "end_match is football only, ignoring"),
		},
	}
}
