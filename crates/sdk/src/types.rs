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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for parsing SDK values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
	#[error("Invalid side index: {0} (expected 0 or 1)")]
	InvalidSide(u8),
	#[error("Unknown sport: {0}")]
	UnknownSport(String),
}

/// One of the two competitors in a match
///
/// Sides are fixed for the whole match; ends changes are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	A,
	B,
}

impl Side {
	/// Zero-based index (A = 0, B = 1)
	pub fn index(self) -> usize {
		match self {
			Side::A => 0,
			Side::B => 1,
		}
	}

	pub fn opponent(self) -> Side {
		match self {
			Side::A => Side::B,
			Side::B => Side::A,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Side::A => "A",
			Side::B => "B",
		}
	}
}

impl TryFrom<u8> for Side {
	type Error = TypeError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Side::A),
			1 => Ok(Side::B),
			other => Err(TypeError::InvalidSide(other)),
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Supported sports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
	Badminton,
	Tennis,
	Football,
	Volleyball,
	Pickleball,
}

impl Sport {
	pub const ALL: [Sport; 5] = [
		Sport::Badminton,
		Sport::Tennis,
		Sport::Football,
		Sport::Volleyball,
		Sport::Pickleball,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Sport::Badminton => "badminton",
			Sport::Tennis => "tennis",
			Sport::Football => "football",
			Sport::Volleyball => "volleyball",
			Sport::Pickleball => "pickleball",
		}
	}
}

impl FromStr for Sport {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.trim();
		Sport::ALL
			.into_iter()
			.find(|sport| sport.as_str().eq_ignore_ascii_case(tag))
			.ok_or_else(|| TypeError::UnknownSport(tag.to_string()))
	}
}

impl fmt::Display for Sport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Participant arity for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participants {
	Singles,
	Doubles,
	Teams,
}

impl Participants {
	/// Display name for a side, e.g. "Player A" or "Team B"
	pub fn side_name(self, side: Side) -> String {
		let noun = match self {
			Participants::Singles => "Player",
			Participants::Doubles => "Pair",
			Participants::Teams => "Team",
		};
		format!("{} {}", noun, side.label())
	}
}

/// A per-side pair of counters (points, games, sets or goals)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitScore {
	pub a: u32,
	pub b: u32,
}

impl UnitScore {
	pub fn new(a: u32, b: u32) -> Self {
		Self { a, b }
	}

	pub fn get(&self, side: Side) -> u32 {
		match side {
			Side::A => self.a,
			Side::B => self.b,
		}
	}

	pub fn increment(&mut self, side: Side) {
		match side {
			Side::A => self.a += 1,
			Side::B => self.b += 1,
		}
	}

	/// How far `side` is ahead of its opponent (0 when level or behind)
	pub fn lead(&self, side: Side) -> u32 {
		self.get(side).saturating_sub(self.get(side.opponent()))
	}

	/// The side with the higher count, or `None` when level
	pub fn leader(&self) -> Option<Side> {
		match self.a.cmp(&self.b) {
			std::cmp::Ordering::Greater => Some(Side::A),
			std::cmp::Ordering::Less => Some(Side::B),
			std::cmp::Ordering::Equal => None,
		}
	}
}

impl fmt::Display for UnitScore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}–{}", self.a, self.b)
	}
}

/// Snapshot of a match, derived from the event log on demand
///
/// This is what collaborators render and broadcast. It is never stored
/// independently of the log that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
	pub sport: Sport,
	/// Whether the match has finished
	pub over: bool,
	/// Winning side; `None` is also a draw once `over` is set
	pub winner: Option<Side>,
	/// Completed units (sets/games) in order
	pub units: Vec<UnitScore>,
	/// Units won per side
	pub units_won: UnitScore,
	/// Raw score of the unit in progress
	pub current: UnitScore,
	/// Display label for the unit in progress
	pub current_label: String,
	pub detail: SportDetail,
}

/// Sport-specific part of [`MatchState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "lowercase")]
pub enum SportDetail {
	Badminton {
		/// Both sides are one point below the cap; next point wins the game
		golden_point: bool,
	},
	Tennis {
		/// Raw points in the current game
		points: UnitScore,
		/// Display labels for side A and side B ("0", "15", "30", "40", "Ad")
		point_labels: [String; 2],
		server: Side,
		tiebreak: bool,
		tiebreak_points: UnitScore,
	},
	Football {
		elapsed_secs: u64,
		/// Elapsed time formatted as `mm:ss`
		clock: String,
		period_index: usize,
		period_name: String,
	},
	Volleyball {
		/// Points needed to take the set in progress
		target: u32,
		deciding_set: bool,
	},
	Pickleball {
		target: u32,
	},
}
