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

//! Shared bookkeeping for rally-scoring sports
//!
//! Badminton, volleyball and pickleball all play units to a point target
//! with a winning margin. They differ only in how the target for the
//! current unit is chosen and whether a golden-point cap applies.

use scorekeeper_sdk::types::{MatchState, Side, Sport, SportDetail, UnitScore};
use serde_json::json;
use tracing::info;

use crate::{
	event::{EventDraft, EventKind},
	rules::SportConfig,
};

/// Win condition for one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitRule {
	pub target: u32,
	pub margin: u32,
	/// Once both sides reach `cap - 1`, the next point that puts a side
	/// ahead wins the unit (golden point)
	pub cap: Option<u32>,
}

impl UnitRule {
	/// `score` already includes the point just won by `side`
	pub fn is_won_by(&self, score: UnitScore, side: Side) -> bool {
		let points = score.get(side);
		if let Some(cap) = self.cap {
			let threshold = cap.saturating_sub(1);
			let both_at_threshold =
				points > threshold && score.get(side.opponent()) >= threshold;
			if both_at_threshold && score.lead(side) > 0 {
				return true;
			}
		}
		points >= self.target && score.lead(side) >= self.margin
	}
}

/// Units played so far plus the one in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RallyTally {
	units: Vec<UnitScore>,
	units_won: UnitScore,
	current: UnitScore,
	winner: Option<Side>,
}

impl RallyTally {
	/// Score one rally for `side` under `rule`
	///
	/// Returns the point event, followed by `set_won` and `match_won`
	/// markers when the point closes a unit or the match.
	pub fn score_point(
		&mut self,
		sport: Sport,
		side: Side,
		rule: UnitRule,
		units_to_win: u32,
	) -> Vec<EventDraft> {
		let unit_number = self.units.len() + 1;
		self.current.increment(side);

		let mut drafts = vec![
			EventDraft::new(EventKind::Point, Some(side))
				.with_meta(json!({ "unit": unit_number, "score": self.current })),
		];

		if !rule.is_won_by(self.current, side) {
			return drafts;
		}

		let finished = self.current;
		self.units.push(finished);
		self.units_won.increment(side);
		info!(
			%sport,
			unit = unit_number,
			winner = side.label(),
			score = %finished,
			"Unit complete"
		);
		drafts.push(
			EventDraft::new(EventKind::SetWon, Some(side))
				.with_meta(json!({ "unit": unit_number, "score": finished })),
		);

		if self.units_won.get(side) >= units_to_win {
			self.winner = Some(side);
			info!(%sport, winner = side.label(), units = %self.units_won, "Match complete");
			drafts.push(
				EventDraft::new(EventKind::MatchWon, Some(side))
					.with_meta(json!({ "unitsWon": self.units_won })),
			);
		} else {
			self.current = UnitScore::default();
		}

		drafts
	}

	pub fn units(&self) -> &[UnitScore] {
		&self.units
	}

	pub fn current(&self) -> UnitScore {
		self.current
	}

	pub fn winner(&self) -> Option<Side> {
		self.winner
	}

	pub fn is_over(&self) -> bool {
		self.winner.is_some()
	}

	/// Build the shared part of the state snapshot
	pub fn state(&self, sport: Sport, detail: SportDetail) -> MatchState {
		MatchState {
			sport,
			over: self.is_over(),
			winner: self.winner,
			units: self.units.clone(),
			units_won: self.units_won,
			current: self.current,
			current_label: self.current.to_string(),
			detail,
		}
	}

	/// Summary such as `Game 2: 5–3 (21–18)` or `Player A wins 21–18, 21–15`
	pub fn summary(&self, config: &SportConfig, unit_name: &str) -> String {
		let completed = self
			.units
			.iter()
			.map(UnitScore::to_string)
			.collect::<Vec<_>>()
			.join(", ");

		if let Some(winner) = self.winner {
			return format!(
				"{} wins {}",
				config.participants.side_name(winner),
				completed
			);
		}

		let in_progress = format!("{} {}: {}", unit_name, self.units.len() + 1, self.current);
		if completed.is_empty() {
			in_progress
		} else {
			format!("{} ({})", in_progress, completed)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const RULE: UnitRule = UnitRule {
		target: 11,
		margin: 2,
		cap: None,
	};

	fn play(tally: &mut RallyTally, side: Side, points: u32) {
		for _ in 0..points {
			tally.score_point(Sport::Pickleball, side, RULE, 2);
		}
	}

	#[test]
	fn test_unit_rule_requires_margin() {
		assert!(!RULE.is_won_by(UnitScore::new(11, 10), Side::A));
		assert!(RULE.is_won_by(UnitScore::new(11, 9), Side::A));
		assert!(RULE.is_won_by(UnitScore::new(14, 16), Side::B));
	}

	#[test]
	fn test_unit_rule_cap_overrides_margin() {
		let rule = UnitRule {
			target: 21,
			margin: 2,
			cap: Some(30),
		};
		assert!(!rule.is_won_by(UnitScore::new(29, 29), Side::A));
		assert!(rule.is_won_by(UnitScore::new(30, 29), Side::A));
	}

	#[test]
	fn test_unit_rule_cap_needs_both_sides_at_threshold() {
		let rule = UnitRule {
			target: 21,
			margin: 3,
			cap: Some(30),
		};
		// Opponent never reached 29, so the margin still applies
		assert!(!rule.is_won_by(UnitScore::new(30, 28), Side::A));
		assert!(!rule.is_won_by(UnitScore::new(28, 30), Side::B));
		// Levelling past the threshold does not decide the unit
		assert!(!rule.is_won_by(UnitScore::new(30, 30), Side::B));
		assert!(rule.is_won_by(UnitScore::new(31, 30), Side::A));
		assert!(rule.is_won_by(UnitScore::new(31, 29), Side::A));
	}

	#[test]
	fn test_unit_completion_resets_current() {
		let mut tally = RallyTally::default();
		play(&mut tally, Side::A, 10);
		let drafts = tally.score_point(Sport::Pickleball, Side::A, RULE, 2);

		assert_eq!(drafts.len(), 2);
		assert_eq!(drafts[1].kind, EventKind::SetWon);
		assert_eq!(tally.units(), &[UnitScore::new(11, 0)]);
		assert_eq!(tally.current(), UnitScore::default());
		assert!(!tally.is_over());
	}

	#[test]
	fn test_match_completion_keeps_final_unit() {
		let mut tally = RallyTally::default();
		play(&mut tally, Side::B, 11);
		play(&mut tally, Side::B, 10);
		let drafts = tally.score_point(Sport::Pickleball, Side::B, RULE, 2);

		assert_eq!(drafts.last().unwrap().kind, EventKind::MatchWon);
		assert_eq!(tally.winner(), Some(Side::B));
		assert_eq!(tally.current(), UnitScore::new(0, 11));
	}
}
