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

use scorekeeper_sdk::types::Sport;
use thiserror::Error;
use tracing::info;

use crate::{
	event::MatchEvent,
	rules::{SportConfig, SportConfigPatch},
	scorer::MatchScorer,
};

/// Error types for scorer construction and config validation
///
/// This is the only failure in the scoring engine; every scoring call
/// after construction is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("Sport is required")]
	MissingSport,
	#[error("Unknown sport: {0}")]
	UnknownSport(String),
	#[error("Config is for {configured}, but {requested} was requested")]
	SportMismatch { requested: Sport, configured: String },
	#[error("{field} must be at least 1, got {value}")]
	OutOfRange { field: &'static str, value: u32 },
	#[error("Football needs at least one period")]
	NoPeriods,
}

fn parse_sport(tag: &str) -> Result<Sport, ConfigError> {
	tag.parse()
		.map_err(|_| ConfigError::UnknownSport(tag.trim().to_string()))
}

fn at_least_one(field: &'static str, value: Option<u32>) -> Result<(), ConfigError> {
	match value {
		Some(value) if value < 1 => Err(ConfigError::OutOfRange { field, value }),
		_ => Ok(()),
	}
}

/// Builds configured scorers from a sport tag
///
/// Configs are merged and validated exactly once, here; a scorer never sees
/// an invalid or partially merged config.
pub struct ScorerFactory;

impl ScorerFactory {
	/// Create a scorer for `sport`, with optional rule overrides
	pub fn create(
		sport: &str,
		overrides: Option<&SportConfigPatch>,
	) -> Result<MatchScorer, ConfigError> {
		let config = Self::resolve_config(sport, overrides)?;
		info!(
			sport = %config.sport,
			best_of = config.best_of,
			"Creating scorer"
		);
		Ok(MatchScorer::from_config(config))
	}

	/// Rebuild a scorer from a persisted event log
	pub fn restore(config: SportConfig, events: &[MatchEvent]) -> Result<MatchScorer, ConfigError> {
		Self::validate_config(&SportConfigPatch::from(&config))?;
		info!(
			sport = %config.sport,
			events = events.len(),
			"Restoring scorer from event log"
		);
		Ok(MatchScorer::from_events(config, events))
	}

	/// Merge `overrides` over the defaults for `sport` and validate the result
	pub fn resolve_config(
		sport: &str,
		overrides: Option<&SportConfigPatch>,
	) -> Result<SportConfig, ConfigError> {
		let sport = parse_sport(sport)?;

		let config = match overrides {
			Some(patch) => {
				if let Some(tag) = &patch.sport
					&& parse_sport(tag)? != sport
				{
					return Err(ConfigError::SportMismatch {
						requested: sport,
						configured: tag.clone(),
					});
				}
				SportConfig::default_for(sport).merge(patch)
			}
			None => SportConfig::default_for(sport),
		};

		Self::validate_config(&SportConfigPatch::from(&config))?;
		Ok(config)
	}

	/// The closed set of sports this engine scores
	pub fn supported_sports() -> &'static [Sport] {
		&Sport::ALL
	}

	/// Built-in rules for a sport tag
	pub fn default_config(sport: &str) -> Result<SportConfig, ConfigError> {
		parse_sport(sport).map(SportConfig::default_for)
	}

	/// Check a (possibly partial) config
	///
	/// Fails when the sport tag is missing or unknown, or when `bestOf`,
	/// `winUnitsTo` or `mustWinBy` is present and below 1. Tiebreak
	/// parameters and football periods are checked when present.
	pub fn validate_config(config: &SportConfigPatch) -> Result<(), ConfigError> {
		let tag = config.sport.as_deref().ok_or(ConfigError::MissingSport)?;
		let sport = parse_sport(tag)?;

		at_least_one("bestOf", config.best_of)?;
		at_least_one("winUnitsTo", config.win_units_to)?;
		at_least_one("mustWinBy", config.must_win_by)?;

		if let Some(Some(tie_break)) = config.tie_break {
			at_least_one("tieBreak.trigger", Some(tie_break.trigger))?;
			at_least_one("tieBreak.target", Some(tie_break.target))?;
			at_least_one("tieBreak.margin", Some(tie_break.margin))?;
		}

		if sport == Sport::Football
			&& config.periods.as_ref().is_some_and(|periods| periods.is_empty())
		{
			return Err(ConfigError::NoPeriods);
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scorer::ScoringEngine;

	#[test]
	fn test_create_every_supported_sport() {
		for sport in ScorerFactory::supported_sports() {
			let scorer = ScorerFactory::create(sport.as_str(), None).unwrap();
			assert_eq!(scorer.sport(), *sport);
			assert!(!scorer.is_match_over());
		}
	}

	#[test]
	fn test_unknown_sport_rejected() {
		let err = ScorerFactory::create("cricket", None).unwrap_err();
		assert_eq!(err, ConfigError::UnknownSport("cricket".to_string()));
	}

	#[test]
	fn test_overrides_win_per_field() {
		let patch = SportConfigPatch {
			best_of: Some(5),
			win_units_to: Some(15),
			..SportConfigPatch::default()
		};
		let scorer = ScorerFactory::create("badminton", Some(&patch)).unwrap();

		let config = scorer.config();
		assert_eq!(config.best_of, 5);
		assert_eq!(config.win_units_to, Some(15));
		assert_eq!(config.max_cap, Some(30));
	}

	#[test]
	fn test_out_of_range_overrides_rejected() {
		for (patch, field) in [
			(
				SportConfigPatch {
					best_of: Some(0),
					..SportConfigPatch::default()
				},
				"bestOf",
			),
			(
				SportConfigPatch {
					win_units_to: Some(0),
					..SportConfigPatch::default()
				},
				"winUnitsTo",
			),
			(
				SportConfigPatch {
					must_win_by: Some(0),
					..SportConfigPatch::default()
				},
				"mustWinBy",
			),
		] {
			let err = ScorerFactory::create("pickleball", Some(&patch)).unwrap_err();
			assert_eq!(err, ConfigError::OutOfRange { field, value: 0 });
		}
	}

	#[test]
	fn test_validate_requires_sport() {
		let err = ScorerFactory::validate_config(&SportConfigPatch::default()).unwrap_err();
		assert_eq!(err, ConfigError::MissingSport);

		let patch = SportConfigPatch {
			sport: Some("squash".to_string()),
			..SportConfigPatch::default()
		};
		assert!(matches!(
			ScorerFactory::validate_config(&patch),
			Err(ConfigError::UnknownSport(_))
		));

		assert!(ScorerFactory::validate_config(&SportConfigPatch::for_sport(Sport::Tennis)).is_ok());
	}

	#[test]
	fn test_sport_mismatch_rejected() {
		let patch = SportConfigPatch::for_sport(Sport::Tennis);
		let err = ScorerFactory::create("badminton", Some(&patch)).unwrap_err();
		assert!(matches!(err, ConfigError::SportMismatch { requested: Sport::Badminton, .. }));
	}

	#[test]
	fn test_football_without_periods_rejected() {
		let patch = SportConfigPatch {
			periods: Some(Vec::new()),
			..SportConfigPatch::default()
		};
		let err = ScorerFactory::create("football", Some(&patch)).unwrap_err();
		assert_eq!(err, ConfigError::NoPeriods);
	}

	#[test]
	fn test_default_config_is_a_copy() {
		let mut config = ScorerFactory::default_config("Volleyball").unwrap();
		config.best_of = 99;

		let fresh = ScorerFactory::default_config("volleyball").unwrap();
		assert_eq!(fresh.best_of, 5);
		assert!(ScorerFactory::default_config("polo").is_err());
	}
}
