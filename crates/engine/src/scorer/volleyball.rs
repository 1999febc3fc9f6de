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

use scorekeeper_sdk::types::{MatchState, Sport, SportDetail};

use super::{
	Command, Scorer, SportRules,
	rally::{RallyTally, UnitRule},
};
use crate::{
	event::EventDraft,
	rules::{DECIDING_SET_TARGET_KEY, DEFAULT_DECIDING_SET_TARGET, SportConfig},
};

pub type VolleyballScorer = Scorer<VolleyballRules>;

/// Volleyball: sets to 25 by 2, with a shorter deciding set
///
/// `maxCap` is a badminton rule and is ignored here.
///
/// The deciding set is identified by position alone: it is the set played
/// once `best_of - 1` sets are complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolleyballRules {
	tally: RallyTally,
}

impl VolleyballRules {
	fn is_deciding_set(&self, config: &SportConfig) -> bool {
		let completed = self.tally.units().len();
		let deciding_index = config.best_of.saturating_sub(1) as usize;
		// A finished match keeps its last set in `current`
		let in_progress = if self.tally.is_over() {
			completed.saturating_sub(1)
		} else {
			completed
		};
		config.best_of > 1 && in_progress == deciding_index
	}

	fn target(&self, config: &SportConfig) -> u32 {
		if self.is_deciding_set(config) {
			config
				.metadata_u32(DECIDING_SET_TARGET_KEY)
				.unwrap_or(DEFAULT_DECIDING_SET_TARGET)
		} else {
			config.win_units_to.unwrap_or(25)
		}
	}
}

impl SportRules for VolleyballRules {
	const SPORT: Sport = Sport::Volleyball;

	fn new(_config: &SportConfig) -> Self {
		Self::default()
	}

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft> {
		let Command::Point(side) = command else {
			return Vec::new();
		};

		let rule = UnitRule {
			target: self.target(config),
			margin: config.margin(),
			cap: None,
		};
		self.tally
			.score_point(Self::SPORT, side, rule, config.units_to_win())
	}

	fn state(&self, config: &SportConfig) -> MatchState {
		self.tally.state(
			Self::SPORT,
			SportDetail::Volleyball {
				target: self.target(config),
				deciding_set: self.is_deciding_set(config),
			},
		)
	}

	fn score(&self, config: &SportConfig) -> String {
		self.tally.summary(config, "Set")
	}

	fn is_over(&self) -> bool {
		self.tally.is_over()
	}
}
