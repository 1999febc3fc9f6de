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

//! Live match scorers
//!
//! Every sport shares the same event-sourced base, [`Scorer`]:
//! - Each caller action is appended to an [`EventLog`]
//! - Derived state lives in a sport-specific [`SportRules`] value
//! - Undo drops the last action and folds the remaining log from scratch
//!
//! Undo never reverses state incrementally; the rules only ever move
//! forward, which keeps every variant a plain left fold over the log.

mod badminton;
mod football;
mod match_scorer;
mod pickleball;
mod rally;
mod tennis;
mod volleyball;

use scorekeeper_sdk::types::{MatchState, Side, Sport};
use tracing::{debug, trace};

use crate::{
	event::{EventDraft, EventKind, EventLog, MatchEvent, now_millis},
	rules::SportConfig,
};

pub use badminton::{BadmintonRules, BadmintonScorer};
pub use football::{FootballRules, FootballScorer};
pub use match_scorer::MatchScorer;
pub use pickleball::{PickleballRules, PickleballScorer};
pub use tennis::{TennisRules, TennisScorer, game_label, point_labels};
pub use volleyball::{VolleyballRules, VolleyballScorer};

/// A caller action, as re-applied during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Point(Side),
	AdvanceTime(u64),
	EndPeriod,
	EndMatch,
}

impl Command {
	/// Recover the action behind a logged primary event
	///
	/// Derived markers map to `None`.
	pub fn from_event(event: &MatchEvent) -> Option<Self> {
		match event.kind {
			EventKind::Point | EventKind::Goal => event.side.map(Command::Point),
			EventKind::TimeAdvance { seconds } => Some(Command::AdvanceTime(seconds)),
			EventKind::PeriodEnd => Some(Command::EndPeriod),
			EventKind::MatchEnd => Some(Command::EndMatch),
			EventKind::GameWon | EventKind::SetWon | EventKind::MatchWon => None,
		}
	}
}

/// Public scoring contract shared by every sport
///
/// All calls are synchronous and total. Scoring after the match is over and
/// undoing an empty log are no-ops, not errors.
pub trait ScoringEngine {
	/// Award a point (or goal) to `side`
	fn add_point(&mut self, side: Side);

	/// Remove the most recent action and rebuild state from the rest
	fn undo_last(&mut self);

	/// Read-only snapshot of the match
	fn state(&self) -> MatchState;

	/// Human-readable score summary
	fn score(&self) -> String;

	fn is_match_over(&self) -> bool;

	/// Clear the log and return to the initial state
	fn reset(&mut self);

	/// Copy of the event log
	fn events(&self) -> Vec<MatchEvent>;

	fn config(&self) -> &SportConfig;
}

/// Sport-specific state machine driven by [`Scorer`]
///
/// Implementations only move forward. `apply` returns the events the
/// command produced, primary event first; an empty vector means the command
/// had no effect and nothing is logged.
pub trait SportRules: Sized {
	const SPORT: Sport;

	/// Initial state for a fresh match
	fn new(config: &SportConfig) -> Self;

	fn apply(&mut self, config: &SportConfig, command: Command) -> Vec<EventDraft>;

	fn state(&self, config: &SportConfig) -> MatchState;

	fn score(&self, config: &SportConfig) -> String;

	fn is_over(&self) -> bool;
}

/// Event-sourced scorer for one match
///
/// Owns the resolved config, the sport's rule state and the event log. The
/// rule state is always equal to folding the log's primary events over
/// `R::new(config)`.
#[derive(Debug, Clone)]
pub struct Scorer<R> {
	config: SportConfig,
	rules: R,
	log: EventLog,
}

impl<R: SportRules> Scorer<R> {
	/// Build a scorer from an already validated config
	///
	/// Use [`crate::ScorerFactory`] to validate and merge configs.
	pub(crate) fn new(config: SportConfig) -> Self {
		let rules = R::new(&config);
		Self {
			config,
			rules,
			log: EventLog::new(),
		}
	}

	/// Rebuild a scorer from a persisted log
	///
	/// Only primary events are re-applied; derived markers are regenerated.
	/// Events the rules would ignore live (e.g. points after the match ended)
	/// are dropped.
	pub(crate) fn restore(config: SportConfig, events: &[MatchEvent]) -> Self {
		let mut scorer = Self::new(config);
		scorer.recompute_from_events(events);
		scorer
	}

	/// Submit a caller action at the current time
	pub(crate) fn submit(&mut self, command: Command) {
		if self.rules.is_over() {
			debug!(sport = %R::SPORT, ?command, "Match is over, ignoring command");
			return;
		}

		if !self.execute(command, now_millis()) {
			debug!(sport = %R::SPORT, ?command, "Command had no effect");
		}
	}

	/// Apply a command and log whatever it produced
	fn execute(&mut self, command: Command, timestamp: i64) -> bool {
		let drafts = self.rules.apply(&self.config, command);
		if drafts.is_empty() {
			return false;
		}

		for draft in drafts {
			self.log_event(draft, timestamp);
		}
		true
	}

	fn log_event(&mut self, draft: EventDraft, timestamp: i64) {
		let seq = self.log.append(draft, timestamp);
		trace!(sport = %R::SPORT, seq, "Event logged");
	}

	/// Reset to the initial state and fold `events` back in, in order
	fn recompute_from_events(&mut self, events: &[MatchEvent]) {
		self.reset_state();

		for event in events.iter().filter(|e| !e.is_derived()) {
			let Some(command) = Command::from_event(event) else {
				continue;
			};
			if self.rules.is_over() || !self.execute(command, event.timestamp) {
				debug!(
					sport = %R::SPORT,
					seq = event.seq,
					kind = event.kind.tag(),
					"Skipping event with no effect during replay"
				);
			}
		}

		trace!(
			sport = %R::SPORT,
			events = self.log.len(),
			"Replay complete"
		);
	}

	fn reset_state(&mut self) {
		self.rules = R::new(&self.config);
		self.log.clear();
	}

	/// Borrow the sport's rule state
	pub fn rules(&self) -> &R {
		&self.rules
	}
}

impl<R: SportRules> ScoringEngine for Scorer<R> {
	fn add_point(&mut self, side: Side) {
		self.submit(Command::Point(side));
	}

	fn undo_last(&mut self) {
		let Some(removed) = self.log.pop_last_action() else {
			debug!(sport = %R::SPORT, "Nothing to undo");
			return;
		};

		debug!(
			sport = %R::SPORT,
			seq = removed.seq,
			kind = removed.kind.tag(),
			"Undoing last action"
		);

		let remaining = self.log.events();
		self.recompute_from_events(&remaining);
	}

	fn state(&self) -> MatchState {
		self.rules.state(&self.config)
	}

	fn score(&self) -> String {
		self.rules.score(&self.config)
	}

	fn is_match_over(&self) -> bool {
		self.rules.is_over()
	}

	fn reset(&mut self) {
		debug!(sport = %R::SPORT, "Resetting match");
		self.reset_state();
	}

	fn events(&self) -> Vec<MatchEvent> {
		self.log.events()
	}

	fn config(&self) -> &SportConfig {
		&self.config
	}
}
