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
use crate::{event::EventDraft, rules::SportConfig};

pub type PickleballScorer = Scorer<PickleballRules>;

/// Pickleball: rally scoring to 11 by 2, no cap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickleballRules {
	tally: RallyTally,
}

impl PickleballRules {
	fn target(config: &SportConfig) -> u32 {
		config.win_units_to.unwrap_or(11)
	}
}

impl SportRules for PickleballRules {
	const SPORT: Sport = Sport::Pickleball;

	fn new(_config: &SportConfig) -> Self {
		Self::default()
	}

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft> {
		let Command::Point(side) = command else {
			return Vec::new();
		};

		let rule = UnitRule {
			target: Self::target(config),
			margin: config.margin(),
			cap: None,
		};
		self.tally
			.score_point(Self::SPORT, side, rule, config.units_to_win())
	}

	fn state(&self, config: &SportConfig) -> MatchState {
		self.tally.state(
			Self::SPORT,
			SportDetail::Pickleball {
				target: Self::target(config),
			},
		)
	}

	fn score(&self, config: &SportConfig) -> String {
		self.tally.summary(config, "Game")
	}

	fn is_over(&self) -> bool {
		self.tally.is_over()
	}
}
