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
use tracing::{debug, info};

use super::{Command, Scorer, SportRules};
use crate::{
	event::{EventDraft, EventKind},
	rules::{SportConfig, TieBreakConfig},
};

pub type TennisScorer = Scorer<TennisRules>;

/// Points needed to take a regular game
const GAME_POINTS: u32 = 4;
/// Point margin needed to take a regular game
const GAME_MARGIN: u32 = 2;

fn call(points: u32) -> &'static str {
	match points {
		0 => "0",
		1 => "15",
		2 => "30",
		_ => "40",
	}
}

/// Per-side point calls for a regular game
///
/// Once both sides have three or more points the calls are relative:
/// level is `40`/`40` (deuce) and a one-point lead is `Ad`/`40`.
pub fn point_labels(points: UnitScore) -> [String; 2] {
	if points.a >= 3 && points.b >= 3 {
		return match points.leader() {
			None => ["40".to_string(), "40".to_string()],
			Some(Side::A) => ["Ad".to_string(), "40".to_string()],
			Some(Side::B) => ["40".to_string(), "Ad".to_string()],
		};
	}
	[call(points.a).to_string(), call(points.b).to_string()]
}

/// Game label: `Deuce`, or the two point calls joined by an en dash
pub fn game_label(points: UnitScore) -> String {
	if points.a >= 3 && points.a == points.b {
		return "Deuce".to_string();
	}
	let [a, b] = point_labels(points);
	format!("{}–{}", a, b)
}

/// Tennis: points within games, games within sets, sets within the match
///
/// When a set reaches the tiebreak trigger (6–6 by default) points go to a
/// separate tiebreak counter. The tiebreak winner takes the set 7–6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TennisRules {
	sets: Vec<UnitScore>,
	sets_won: UnitScore,
	games: UnitScore,
	points: UnitScore,
	server: Side,
	tiebreak: bool,
	tiebreak_points: UnitScore,
	winner: Option<Side>,
}

impl Default for TennisRules {
	fn default() -> Self {
		Self {
			sets: Vec::new(),
			sets_won: UnitScore::default(),
			games: UnitScore::default(),
			points: UnitScore::default(),
			server: Side::A,
			tiebreak: false,
			tiebreak_points: UnitScore::default(),
			winner: None,
		}
	}
}

impl TennisRules {
	pub fn server(&self) -> Side {
		self.server
	}

	pub fn in_tiebreak(&self) -> bool {
		self.tiebreak
	}

	fn score_regular_point(&mut self, config: &SportConfig, side: Side) -> Vec<EventDraft> {
		self.points.increment(side);
		let mut drafts = vec![
			EventDraft::new(EventKind::Point, Some(side))
				.with_meta(json!({ "points": self.points, "games": self.games })),
		];

		if self.points.get(side) >= GAME_POINTS && self.points.lead(side) >= GAME_MARGIN {
			self.points = UnitScore::default();
			self.win_game(side, &mut drafts);

			let set_target = config.win_units_to.unwrap_or(6);
			if self.games.get(side) >= set_target && self.games.lead(side) >= config.margin() {
				self.win_set(config, side, &mut drafts);
			} else if let Some(tie_break) = config.tie_break
				&& self.games == UnitScore::new(tie_break.trigger, tie_break.trigger)
			{
				debug!(games = %self.games, "Entering tiebreak");
				self.tiebreak = true;
			}
		}

		drafts
	}

	fn score_tiebreak_point(
		&mut self,
		config: &SportConfig,
		tie_break: TieBreakConfig,
		side: Side,
	) -> Vec<EventDraft> {
		self.tiebreak_points.increment(side);
		let mut drafts = vec![
			EventDraft::new(EventKind::Point, Some(side))
				.with_meta(json!({ "tiebreak": self.tiebreak_points, "games": self.games })),
		];

		if self.tiebreak_points.get(side) >= tie_break.target
			&& self.tiebreak_points.lead(side) >= tie_break.margin
		{
			debug!(tiebreak = %self.tiebreak_points, "Tiebreak complete");
			self.tiebreak = false;
			self.tiebreak_points = UnitScore::default();
			self.win_game(side, &mut drafts);
			// The tiebreak enforced its own margin
			self.win_set(config, side, &mut drafts);
		}

		drafts
	}

	fn win_game(&mut self, side: Side, drafts: &mut Vec<EventDraft>) {
		self.games.increment(side);
		self.server = self.server.opponent();
		drafts.push(
			EventDraft::new(EventKind::GameWon, Some(side))
				.with_meta(json!({ "games": self.games })),
		);
	}

	fn win_set(&mut self, config: &SportConfig, side: Side, drafts: &mut Vec<EventDraft>) {
		let set_number = self.sets.len() + 1;
		let games = self.games;
		self.sets.push(games);
		self.sets_won.increment(side);
		info!(set = set_number, winner = side.label(), games = %games, "Set complete");
		drafts.push(
			EventDraft::new(EventKind::SetWon, Some(side))
				.with_meta(json!({ "set": set_number, "games": games })),
		);

		if self.sets_won.get(side) >= config.units_to_win() {
			self.winner = Some(side);
			info!(winner = side.label(), sets = %self.sets_won, "Match complete");
			drafts.push(
				EventDraft::new(EventKind::MatchWon, Some(side))
					.with_meta(json!({ "setsWon": self.sets_won })),
			);
		} else {
			self.games = UnitScore::default();
		}
	}

	fn current_label(&self) -> String {
		if self.tiebreak {
			format!("Tiebreak {}", self.tiebreak_points)
		} else {
			game_label(self.points)
		}
	}
}

impl SportRules for TennisRules {
	const SPORT: Sport = Sport::Tennis;

	fn new(_config: &SportConfig) -> Self {
		Self::default()
	}

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft> {
		let Command::Point(side) = command else {
			return Vec::new();
		};

		match config.tie_break {
			Some(tie_break) if self.tiebreak => self.score_tiebreak_point(config, tie_break, side),
			_ => self.score_regular_point(config, side),
		}
	}

	fn state(&self, _config: &SportConfig) -> MatchState {
		MatchState {
			sport: Self::SPORT,
			over: self.winner.is_some(),
			winner: self.winner,
			units: self.sets.clone(),
			units_won: self.sets_won,
			current: self.games,
			current_label: self.current_label(),
			detail: SportDetail::Tennis {
				points: self.points,
				point_labels: point_labels(self.points),
				server: self.server,
				tiebreak: self.tiebreak,
				tiebreak_points: self.tiebreak_points,
			},
		}
	}

	/// `Set 2: 3–2, 30–15 (6–4)` in play, `Player A wins 6–4, 7–6` when done
	fn score(&self, config: &SportConfig) -> String {
		let completed = self
			.sets
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

		let in_progress = format!(
			"Set {}: {}, {}",
			self.sets.len() + 1,
			self.games,
			self.current_label()
		);
		if completed.is_empty() {
			in_progress
		} else {
			format!("{} ({})", in_progress, completed)
		}
	}

	fn is_over(&self) -> bool {
		self.winner.is_some()
	}
}
