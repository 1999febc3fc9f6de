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

mod log;

use scorekeeper_sdk::types::Side;
use serde::{Deserialize, Serialize};

pub use log::EventLog;

/// Sequence number for event ordering
///
/// Events are assigned monotonically increasing sequence numbers
/// so a persisted log replays in the order it was written.
pub type SequenceNumber = u64;

/// What happened in a [`MatchEvent`]
///
/// Primary kinds are submitted by the caller and are the only kinds replay
/// re-applies. Derived kinds are markers the engine appends after a primary
/// event completes a game, set or match; replay regenerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
	/// A rally point
	Point,
	/// A football goal
	Goal,
	/// The external match clock moved forward
	TimeAdvance { seconds: u64 },
	/// The current football period finished
	PeriodEnd,
	/// The final whistle
	MatchEnd,
	/// Derived: a tennis game was completed
	GameWon,
	/// Derived: a unit (set/game) was completed
	SetWon,
	/// Derived: a side reached the unit tally needed to win
	MatchWon,
}

impl EventKind {
	/// Whether the engine appended this event itself
	pub fn is_derived(&self) -> bool {
		matches!(
			self,
			EventKind::GameWon | EventKind::SetWon | EventKind::MatchWon
		)
	}

	pub fn tag(&self) -> &'static str {
		match self {
			EventKind::Point => "point",
			EventKind::Goal => "goal",
			EventKind::TimeAdvance { .. } => "time_advance",
			EventKind::PeriodEnd => "period_end",
			EventKind::MatchEnd => "match_end",
			EventKind::GameWon => "game_won",
			EventKind::SetWon => "set_won",
			EventKind::MatchWon => "match_won",
		}
	}
}

/// One entry of the append-only match log
///
/// The log is the single source of truth: every derived score is a pure
/// function of the sport config and the primary events in this log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
	pub seq: SequenceNumber,
	/// Milliseconds since the Unix epoch (UTC)
	pub timestamp: i64,
	#[serde(flatten)]
	pub kind: EventKind,
	pub side: Option<Side>,
	/// Opaque score snapshot taken after the event was applied
	#[serde(default)]
	pub meta: serde_json::Value,
}

impl MatchEvent {
	pub fn is_derived(&self) -> bool {
		self.kind.is_derived()
	}
}

/// An event produced by a sport's rules, before it is sequenced and logged
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
	pub kind: EventKind,
	pub side: Option<Side>,
	pub meta: serde_json::Value,
}

impl EventDraft {
	pub fn new(kind: EventKind, side: Option<Side>) -> Self {
		Self {
			kind,
			side,
			meta: serde_json::Value::Null,
		}
	}

	pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
		self.meta = meta;
		self
	}
}

/// Current UTC time in milliseconds
pub fn now_millis() -> i64 {
	chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_event_serializes_with_type_tag() {
		let event = MatchEvent {
			seq: 3,
			timestamp: 1_000,
			kind: EventKind::TimeAdvance { seconds: 90 },
			side: None,
			meta: serde_json::Value::Null,
		};

		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["type"], "time_advance");
		assert_eq!(json["seconds"], 90);

		let decoded: MatchEvent = serde_json::from_value(json).unwrap();
		assert_eq!(decoded, event);
	}

	#[test]
	fn test_derived_kinds() {
		assert!(EventKind::SetWon.is_derived());
		assert!(EventKind::MatchWon.is_derived());
		assert!(!EventKind::Point.is_derived());
		assert!(!EventKind::MatchEnd.is_derived());
		assert_eq!(EventKind::SetWon.tag(), "set_won");
	}
}
