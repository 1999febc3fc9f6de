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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rules::SportConfigPatch;

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log directory component name
pub const LOG_COMPONENT_NAME: &str = "scorekeeper";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

/// Default sport when none is configured
pub const DEFAULT_SPORT: &str = "badminton";

/// Replay tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
	/// Sport tag handed to the factory
	pub sport: String,
	/// JSON Lines match script; stdin when unset
	pub script: Option<PathBuf>,
	/// Rule overrides merged over the sport defaults
	pub overrides: Option<SportConfigPatch>,
	/// Log every applied command at debug level
	pub verbose_logging: bool,
}

impl Default for ReplayConfig {
	fn default() -> Self {
		Self {
			sport: DEFAULT_SPORT.to_string(),
			script: None,
			overrides: None,
			verbose_logging: false,
		}
	}
}

impl ReplayConfig {
	/// Load configuration from environment variables
	///
	/// Reads `SCOREKEEPER_SPORT`, `SCOREKEEPER_SCRIPT` and
	/// `SCOREKEEPER_VERBOSE_LOGGING`. Rule overrides can only come from a file.
	pub fn from_env() -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix("SCOREKEEPER"))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file, with environment variables on top
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix("SCOREKEEPER"))
			.build()?;

		cfg.try_deserialize()
	}
}
