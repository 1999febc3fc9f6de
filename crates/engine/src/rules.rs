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

//! Per-sport rule parameters
//!
//! A [`SportConfig`] is resolved once, when a scorer is built, and never
//! mutated afterwards. Callers customise rules through a
//! [`SportConfigPatch`], which is shallow-merged over the built-in defaults.

use std::collections::BTreeMap;

use scorekeeper_sdk::types::{Participants, Sport};
use serde::{Deserialize, Serialize};

/// Metadata key holding volleyball's deciding-set target
pub const DECIDING_SET_TARGET_KEY: &str = "decidingSetTarget";

/// Deciding-set target used when the metadata entry is absent
pub const DEFAULT_DECIDING_SET_TARGET: u32 = 15;

/// Tennis tiebreak parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakConfig {
	/// Games each at which the tiebreak starts (6 means 6–6)
	pub trigger: u32,
	/// Tiebreak points needed to win it
	pub target: u32,
	/// Required tiebreak point margin
	pub margin: u32,
}

impl Default for TieBreakConfig {
	fn default() -> Self {
		Self {
			trigger: 6,
			target: 7,
			margin: 2,
		}
	}
}

/// A named, timed period of play (football halves)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
	pub name: String,
	pub duration_secs: u64,
}

impl Period {
	pub fn new(name: impl Into<String>, duration_secs: u64) -> Self {
		Self {
			name: name.into(),
			duration_secs,
		}
	}
}

/// Fully resolved rule set for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportConfig {
	pub sport: Sport,
	pub participants: Participants,
	/// Number of units (sets/games) the match is played over
	pub best_of: u32,
	/// Points (or games, for tennis) needed to win a unit
	pub win_units_to: Option<u32>,
	/// Required winning margin for a unit
	pub must_win_by: Option<u32>,
	/// Hard point ceiling; reaching it wins the unit regardless of margin
	pub max_cap: Option<u32>,
	pub rally_scoring: bool,
	pub tie_break: Option<TieBreakConfig>,
	pub periods: Vec<Period>,
	pub metadata: BTreeMap<String, serde_json::Value>,
}

impl SportConfig {
	/// Built-in rules for a sport
	pub fn default_for(sport: Sport) -> Self {
		let base = Self {
			sport,
			participants: Participants::Singles,
			best_of: 1,
			win_units_to: None,
			must_win_by: None,
			max_cap: None,
			rally_scoring: true,
			tie_break: None,
			periods: Vec::new(),
			metadata: BTreeMap::new(),
		};

		match sport {
			Sport::Badminton => Self {
				best_of: 3,
				win_units_to: Some(21),
				must_win_by: Some(2),
				max_cap: Some(30),
				..base
			},
			Sport::Tennis => Self {
				best_of: 3,
				win_units_to: Some(6),
				must_win_by: Some(2),
				rally_scoring: false,
				tie_break: Some(TieBreakConfig::default()),
				..base
			},
			Sport::Football => Self {
				participants: Participants::Teams,
				rally_scoring: false,
				periods: vec![
					Period::new("First Half", 45 * 60),
					Period::new("Second Half", 45 * 60),
				],
				..base
			},
			Sport::Volleyball => {
				let mut metadata = BTreeMap::new();
				metadata.insert(
					DECIDING_SET_TARGET_KEY.to_string(),
					serde_json::Value::from(DEFAULT_DECIDING_SET_TARGET),
				);
				Self {
					participants: Participants::Teams,
					best_of: 5,
					win_units_to: Some(25),
					must_win_by: Some(2),
					metadata,
					..base
				}
			}
			Sport::Pickleball => Self {
				participants: Participants::Doubles,
				best_of: 3,
				win_units_to: Some(11),
				must_win_by: Some(2),
				..base
			},
		}
	}

	/// Units a side must win to take the match: `ceil(best_of / 2)`
	pub fn units_to_win(&self) -> u32 {
		self.best_of.div_ceil(2)
	}

	/// Required unit margin, defaulting to 1 when the sport sets none
	pub fn margin(&self) -> u32 {
		self.must_win_by.unwrap_or(1)
	}

	/// Read an unsigned integer from metadata
	pub fn metadata_u32(&self, key: &str) -> Option<u32> {
		self.metadata
			.get(key)
			.and_then(serde_json::Value::as_u64)
			.and_then(|v| u32::try_from(v).ok())
	}

	/// Shallow merge: every field present in the patch replaces the default
	///
	/// The patch's `sport` tag is not applied here; the factory checks it
	/// against the requested sport before merging.
	pub fn merge(&self, patch: &SportConfigPatch) -> Self {
		let mut merged = self.clone();
		if let Some(participants) = patch.participants {
			merged.participants = participants;
		}
		if let Some(best_of) = patch.best_of {
			merged.best_of = best_of;
		}
		if let Some(win_units_to) = patch.win_units_to {
			merged.win_units_to = Some(win_units_to);
		}
		if let Some(must_win_by) = patch.must_win_by {
			merged.must_win_by = Some(must_win_by);
		}
		if let Some(max_cap) = patch.max_cap {
			merged.max_cap = max_cap;
		}
		if let Some(rally_scoring) = patch.rally_scoring {
			merged.rally_scoring = rally_scoring;
		}
		if let Some(tie_break) = patch.tie_break {
			merged.tie_break = tie_break;
		}
		if let Some(periods) = &patch.periods {
			merged.periods = periods.clone();
		}
		if let Some(metadata) = &patch.metadata {
			merged.metadata = metadata.clone();
		}
		merged
	}
}

/// Partial rule set supplied by a caller
///
/// Every field is optional. `max_cap` and `tie_break` are doubly optional so
/// a patch can explicitly clear them (`"maxCap": null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportConfigPatch {
	/// Raw sport tag, validated by the factory
	pub sport: Option<String>,
	pub participants: Option<Participants>,
	pub best_of: Option<u32>,
	pub win_units_to: Option<u32>,
	pub must_win_by: Option<u32>,
	#[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
	pub max_cap: Option<Option<u32>>,
	pub rally_scoring: Option<bool>,
	#[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
	pub tie_break: Option<Option<TieBreakConfig>>,
	pub periods: Option<Vec<Period>>,
	pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl SportConfigPatch {
	pub fn for_sport(sport: Sport) -> Self {
		Self {
			sport: Some(sport.as_str().to_string()),
			..Self::default()
		}
	}
}

impl From<&SportConfig> for SportConfigPatch {
	fn from(config: &SportConfig) -> Self {
		Self {
			sport: Some(config.sport.as_str().to_string()),
			participants: Some(config.participants),
			best_of: Some(config.best_of),
			win_units_to: config.win_units_to,
			must_win_by: config.must_win_by,
			max_cap: Some(config.max_cap),
			rally_scoring: Some(config.rally_scoring),
			tie_break: Some(config.tie_break),
			periods: Some(config.periods.clone()),
			metadata: Some(config.metadata.clone()),
		}
	}
}

/// Distinguishes a missing field from an explicit `null`
mod double_option {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
	where
		T: Serialize,
		S: Serializer,
	{
		match value {
			Some(inner) => inner.serialize(serializer),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
	where
		T: Deserialize<'de>,
		D: Deserializer<'de>,
	{
		Option::<T>::deserialize(deserializer).map(Some)
	}
}
