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

pub type BadmintonScorer = Scorer<BadmintonRules>;

/// Badminton: rally scoring to 21 by 2, with a golden point at the cap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadmintonRules {
	tally: RallyTally,
}

impl BadmintonRules {
	fn unit_rule(config: &SportConfig) -> UnitRule {
		UnitRule {
			target: config.win_units_to.unwrap_or(21),
			margin: config.margin(),
			cap: config.max_cap,
		}
	}

	/// Level at `cap - 1` or above in an open game: the next point wins
	fn golden_point(&self, config: &SportConfig) -> bool {
		let current = self.tally.current();
		match config.max_cap {
			Some(cap) if !self.tally.is_over() => {
				let threshold = cap.saturating_sub(1);
				current.a >= threshold && current.a == current.b
			}
			_ => false,
		}
	}
}

impl SportRules for BadmintonRules {
	const SPORT: Sport = Sport::Badminton;

	fn new(_config: &SportConfig) -> Self {
		Self::default()
	}

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft> {
		match command {
			Command::Point(side) => self.tally.score_point(
				Self::SPORT,
				side,
				Self::unit_rule(config),
				config.units_to_win(),
			),
			_ => Vec::new(),
		}
	}

	fn state(&self, config: &SportConfig) -> MatchState {
		self.tally.state(
			Self::SPORT,
			SportDetail::Badminton {
				golden_point: self.golden_point(config),
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

#[cfg(test)]
mod tests {
	use scorekeeper_sdk::types::{Side, UnitScore};

	use super::*;
	use crate::scorer::ScoringEngine;

	fn scorer() -> BadmintonScorer {
		BadmintonScorer::new(SportConfig::default_for(Sport::Badminton))
	}

	fn alternate_to(scorer: &mut BadmintonScorer, points: u32) {
		for _ in 0..points {
			scorer.add_point(Side::A);
			scorer.add_point(Side::B);
		}
	}

	#[test]
	fn test_game_to_21() {
		let mut scorer = scorer();
		for _ in 0..21 {
			scorer.add_point(Side::A);
		}

		let state = scorer.state();
		assert_eq!(state.units, vec![UnitScore::new(21, 0)]);
		assert_eq!(state.units_won, UnitScore::new(1, 0));
		assert_eq!(state.current, UnitScore::default());
		assert_eq!(scorer.score(), "Game 2: 0–0 (21–0)");
	}

	#[test]
	fn test_deuce_requires_two_point_lead() {
		let mut scorer = scorer();
		alternate_to(&mut scorer, 20);
		scorer.add_point(Side::A);
		assert!(scorer.state().units.is_empty());

		scorer.add_point(Side::A);
		assert_eq!(scorer.state().units, vec![UnitScore::new(22, 20)]);
	}

	#[test]
	fn test_golden_point_at_29_all() {
		let mut scorer = scorer();
		alternate_to(&mut scorer, 29);

		let state = scorer.state();
		assert_eq!(state.current, UnitScore::new(29, 29));
		assert_eq!(state.detail, SportDetail::Badminton { golden_point: true });

		scorer.add_point(Side::A);
		let state = scorer.state();
		assert_eq!(state.units, vec![UnitScore::new(30, 29)]);
		assert_eq!(state.detail, SportDetail::Badminton { golden_point: false });
	}

	#[test]
	fn test_cap_reached_from_29_28_wins_by_margin() {
		let mut scorer = scorer();
		alternate_to(&mut scorer, 28);
		scorer.add_point(Side::B);
		scorer.add_point(Side::B);

		assert_eq!(scorer.state().units, vec![UnitScore::new(28, 30)]);
	}

	#[test]
	fn test_cap_without_golden_point_keeps_margin() {
		let mut config = SportConfig::default_for(Sport::Badminton);
		config.must_win_by = Some(3);
		let mut scorer = BadmintonScorer::new(config);
		alternate_to(&mut scorer, 28);
		scorer.add_point(Side::A);
		scorer.add_point(Side::A);

		// B never reached 29 and the lead is short of three
		let state = scorer.state();
		assert!(state.units.is_empty());
		assert_eq!(state.current, UnitScore::new(30, 28));
		assert_eq!(state.detail, SportDetail::Badminton { golden_point: false });

		scorer.add_point(Side::B);
		assert!(scorer.state().units.is_empty());

		scorer.add_point(Side::A);
		assert_eq!(scorer.state().units, vec![UnitScore::new(31, 29)]);
	}

	#[test]
	fn test_golden_point_under_wider_margin() {
		let mut config = SportConfig::default_for(Sport::Badminton);
		config.must_win_by = Some(3);
		let mut scorer = BadmintonScorer::new(config);
		alternate_to(&mut scorer, 29);
		assert_eq!(
			scorer.state().detail,
			SportDetail::Badminton { golden_point: true }
		);

		scorer.add_point(Side::B);
		assert_eq!(scorer.state().units, vec![UnitScore::new(29, 30)]);
	}

	#[test]
	fn test_match_summary() {
		let mut scorer = scorer();
		for _ in 0..2 {
			for _ in 0..18 {
				scorer.add_point(Side::A);
				scorer.add_point(Side::B);
			}
			for _ in 0..3 {
				scorer.add_point(Side::A);
			}
		}

		assert!(scorer.is_match_over());
		assert_eq!(scorer.score(), "Player A wins 21–18, 21–18");
		assert_eq!(scorer.state().winner, Some(Side::A));
	}
}
