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

use scorekeeper_sdk::types::{MatchState, Side, Sport, SportDetail, UnitScore};
use serde_json::json;
use tracing::info;

use super::{Command, Scorer, SportRules};
use crate::{
	event::{EventDraft, EventKind},
	rules::SportConfig,
};

pub type FootballScorer = Scorer<FootballRules>;

/// Format seconds as `mm:ss`
fn clock(elapsed_secs: u64) -> String {
	format!("{:02}:{:02}", elapsed_secs / 60, elapsed_secs % 60)
}

/// Football: goals accumulate until the final whistle
///
/// There is no win condition. The clock is a passive counter the caller
/// advances; only ending the last period or ending the match finishes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootballRules {
	goals: UnitScore,
	elapsed_secs: u64,
	period_index: usize,
	over: bool,
}

impl FootballRules {
	/// Side with more goals, or `None` for a draw
	pub fn leader(&self) -> Option<Side> {
		self.goals.leader()
	}

	fn period_name(&self, config: &SportConfig) -> String {
		config
			.periods
			.get(self.period_index)
			.map(|p| p.name.clone())
			.unwrap_or_else(|| format!("Period {}", self.period_index + 1))
	}

	fn snapshot(&self) -> serde_json::Value {
		json!({
			"score": self.goals,
			"elapsedSecs": self.elapsed_secs,
			"period": self.period_index,
		})
	}

	fn finish(&mut self) {
		self.over = true;
		info!(
			score = %self.goals,
			winner = self.leader().map(Side::label).unwrap_or("draw"),
			"Full time"
		);
	}

	fn end_period(&mut self, config: &SportConfig) -> EventDraft {
		let ended = self.period_name(config);
		if self.period_index + 1 < config.periods.len() {
			self.period_index += 1;
			info!(period = %ended, "Period ended");
			EventDraft::new(EventKind::PeriodEnd, None).with_meta(json!({
				"ended": ended,
				"next": self.period_name(config),
				"score": self.goals,
			}))
		} else {
			self.finish();
			EventDraft::new(EventKind::PeriodEnd, None).with_meta(json!({
				"ended": ended,
				"final": true,
				"score": self.goals,
			}))
		}
	}
}

impl SportRules for FootballRules {
	const SPORT: Sport = Sport::Football;

	fn new(_config: &SportConfig) -> Self {
		Self::default()
	}

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft> {
		match command {
			Command::Point(side) => {
				self.goals.increment(side);
				vec![EventDraft::new(EventKind::Goal, Some(side)).with_meta(self.snapshot())]
			}
			Command::AdvanceTime(0) => Vec::new(),
			Command::AdvanceTime(seconds) => {
				self.elapsed_secs = self.elapsed_secs.saturating_add(seconds);
				vec![
					EventDraft::new(EventKind::TimeAdvance { seconds }, None)
						.with_meta(self.snapshot()),
				]
			}
			Command::EndPeriod => vec![self.end_period(config)],
			Command::EndMatch => {
				self.finish();
				vec![EventDraft::new(EventKind::MatchEnd, None).with_meta(self.snapshot())]
			}
		}
	}

	fn state(&self, config: &SportConfig) -> MatchState {
		MatchState {
			sport: Self::SPORT,
			over: self.over,
			winner: if self.over { self.leader() } else { None },
			units: Vec::new(),
			units_won: UnitScore::default(),
			current: self.goals,
			current_label: self.goals.to_string(),
			detail: SportDetail::Football {
				elapsed_secs: self.elapsed_secs,
				clock: clock(self.elapsed_secs),
				period_index: self.period_index,
				period_name: self.period_name(config),
			},
		}
	}

	/// `First Half 12:30 — Team A 1 – 0 Team B`, `Full Time — Team A 2 – 1 Team B`
	fn score(&self, config: &SportConfig) -> String {
		let prefix = if self.over {
			"Full Time".to_string()
		} else {
			format!("{} {}", self.period_name(config), clock(self.elapsed_secs))
		};
		format!(
			"{} — {} {} – {} {}",
			prefix,
			config.participants.side_name(Side::A),
			self.goals.a,
			self.goals.b,
			config.participants.side_name(Side::B)
		)
	}

	fn is_over(&self) -> bool {
		self.over
	}
}

impl FootballScorer {
	/// Move the match clock forward; display only
	pub fn advance_time(&mut self, seconds: u64) {
		self.submit(Command::AdvanceTime(seconds));
	}

	/// Finish the current period, or the match after the last period
	pub fn end_period(&mut self) {
		self.submit(Command::EndPeriod);
	}

	/// Blow the final whistle and freeze the score
	pub fn end_match(&mut self) {
		self.submit(Command::EndMatch);
	}
}
