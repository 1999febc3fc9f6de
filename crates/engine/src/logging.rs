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

//! Logging initialization for the replay tool
//!
//! # Configuration
//!
//! - `RUST_LOG`: Log level filter (default: `info`)
//!   - Can be set per module: `RUST_LOG=scorekeeper_engine=debug`
//!
//! - `LOG_DIR`: Root directory for log files (default: `{project_root}/logs`)
//!   - Log files are created in `{LOG_DIR}/scorekeeper/`
//!
//! - `LOG_TO_CONSOLE`: Also write to stderr (default: `false`)
//!   - Set to `true`, `1`, or `yes` to enable
//!
//! # Log File Format
//!
//! - Rotation: one file per day (UTC), e.g. `scorekeeper.2026-01-03.log`
//! - Format: UTC timestamp, thread ID, log level, target, message

use std::{
	env,
	path::{Path, PathBuf},
	sync::OnceLock,
};

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::{
	non_blocking,
	rolling::{self, Rotation},
};
use tracing_subscriber::{
	EnvFilter, fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt,
};

use crate::config::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_TO_CONSOLE, LOG_COMPONENT_NAME};

// Store log guard to prevent log loss on program exit
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Find the workspace root by walking up to a Cargo.toml with `[workspace]`
fn find_project_root() -> PathBuf {
	let start = env::var("CARGO_MANIFEST_DIR")
		.map(PathBuf::from)
		.or_else(|_| env::current_dir())
		.unwrap_or_else(|_| PathBuf::from("."));

	let mut current = start.clone();
	loop {
		let cargo_toml = current.join("Cargo.toml");
		if let Ok(content) = std::fs::read_to_string(&cargo_toml)
			&& content.contains("[workspace]")
		{
			return current;
		}
		match current.parent() {
			Some(parent) => current = parent.to_path_buf(),
			None => return start,
		}
	}
}

/// Log root from `LOG_DIR`, or `{project_root}/logs`
fn log_root() -> PathBuf {
	env::var("LOG_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|_| find_project_root().join("logs"))
}

/// Daily-rolling file writer in `log_dir`
fn setup_file_logging(log_dir: &Path) -> Result<non_blocking::NonBlocking> {
	let file_appender = rolling::RollingFileAppender::builder()
		.rotation(Rotation::DAILY)
		.filename_prefix(LOG_COMPONENT_NAME.to_string())
		.filename_suffix(".log")
		.build(log_dir)
		.with_context(|| {
			format!(
				"Failed to create rolling file appender in {}",
				log_dir.display()
			)
		})?;

	let (file_writer, guard) = non_blocking(file_appender);
	LOG_GUARD.set(guard).ok();

	Ok(file_writer)
}

fn console_enabled() -> bool {
	env::var("LOG_TO_CONSOLE")
		.map(|v| v == "true" || v == "1" || v == "yes")
		.unwrap_or(DEFAULT_LOG_TO_CONSOLE)
}

/// Initialize logging with file output and optional console output
///
/// Must be called at most once per process.
pub fn init_logging() -> Result<()> {
	dotenv::dotenv().ok();

	let log_level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

	let log_dir = log_root().join(LOG_COMPONENT_NAME);
	std::fs::create_dir_all(&log_dir)
		.with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

	let file_writer = setup_file_logging(&log_dir)?;
	let log_to_console = console_enabled();

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

	let subscriber = Registry::default().with(filter).with(
		fmt::layer()
			.with_writer(file_writer)
			.with_timer(fmt::time::UtcTime::rfc_3339())
			.with_thread_ids(true)
			.with_target(true)
			.with_ansi(false),
	);

	if log_to_console {
		subscriber
			.with(
				fmt::layer()
					.with_writer(std::io::stderr)
					.with_timer(fmt::time::UtcTime::rfc_3339())
					.with_target(true)
					.with_ansi(true),
			)
			.try_init()
			.context("Failed to install tracing subscriber")?;
	} else {
		subscriber
			.try_init()
			.context("Failed to install tracing subscriber")?;
	}

	info!(target: "replay", "Log level: {}", log_level);
	info!(target: "replay", "Log directory: {}", log_dir.display());
	if log_to_console {
		info!(target: "replay", "Console output: enabled");
	}

	Ok(())
}
