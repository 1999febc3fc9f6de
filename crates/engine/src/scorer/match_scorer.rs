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

use scorekeeper_sdk::types::{MatchState, Side, Sport};

use super::{
	BadmintonScorer, FootballScorer, PickleballScorer, Scorer, ScoringEngine, TennisScorer,
	VolleyballScorer,
};
use crate::{event::MatchEvent, rules::SportConfig};

/// A scorer for any supported sport
///
/// This is the closed set of variants the factory hands out. Each arm is a
/// [`Scorer`] over that sport's rules; sport-specific operations are reached
/// through the arm itself (see [`MatchScorer::as_football_mut`]).
#[derive(Debug, Clone)]
pub enum MatchScorer {
	Badminton(BadmintonScorer),
	Tennis(TennisScorer),
	Football(FootballScorer),
	Volleyball(VolleyballScorer),
	Pickleball(PickleballScorer),
}

macro_rules! dispatch {
	($self:expr, $scorer:ident => $body:expr) => {
		match $self {
			MatchScorer::Badminton($scorer) => $body,
			MatchScorer::Tennis($scorer) => $body,
			MatchScorer::Football($scorer) => $body,
			MatchScorer::Volleyball($scorer) => $body,
			MatchScorer::Pickleball($scorer) => $body,
		}
	};
}

impl MatchScorer {
	/// Build the variant named by `config.sport`
	pub(crate) fn from_config(config: SportConfig) -> Self {
		match config.sport {
			Sport::Badminton => MatchScorer::Badminton(Scorer::new(config)),
			Sport::Tennis => MatchScorer::Tennis(Scorer::new(config)),
			Sport::Football => MatchScorer::Football(Scorer::new(config)),
			Sport::Volleyball => MatchScorer::Volleyball(Scorer::new(config)),
			Sport::Pickleball => MatchScorer::Pickleball(Scorer::new(config)),
		}
	}

	/// Build the variant named by `config.sport` and replay `events` into it
	pub(crate) fn from_events(config: SportConfig, events: &[MatchEvent]) -> Self {
		match config.sport {
			Sport::Badminton => MatchScorer::Badminton(Scorer::restore(config, events)),
			Sport::Tennis => MatchScorer::Tennis(Scorer::restore(config, events)),
			Sport::Football => MatchScorer::Football(Scorer::restore(config, events)),
			Sport::Volleyball => MatchScorer::Volleyball(Scorer::restore(config, events)),
			Sport::Pickleball => MatchScorer::Pickleball(Scorer::restore(config, events)),
		}
	}

	pub fn sport(&self) -> Sport {
		match self {
			MatchScorer::Badminton(_) => Sport::Badminton,
			MatchScorer::Tennis(_) => Sport::Tennis,
			MatchScorer::Football(_) => Sport::Football,
			MatchScorer::Volleyball(_) => Sport::Volleyball,
			MatchScorer::Pickleball(_) => Sport::Pickleball,
		}
	}

	/// Football clock and period controls, when this is a football match
	pub fn as_football_mut(&mut self) -> Option<&mut FootballScorer> {
		match self {
			MatchScorer::Football(scorer) => Some(scorer),
			_ => None,
		}
	}

	pub fn as_tennis(&self) -> Option<&TennisScorer> {
		match self {
			MatchScorer::Tennis(scorer) => Some(scorer),
			_ => None,
		}
	}
}

impl ScoringEngine for MatchScorer {
	fn add_point(&mut self, side: Side) {
		dispatch!(self, scorer => scorer.add_point(side))
	}

	fn undo_last(&mut self) {
		dispatch!(self, scorer => scorer.undo_last())
	}

	fn state(&self) -> MatchState {
		dispatch!(self, scorer => scorer.state())
	}

	fn score(&self) -> String {
		dispatch!(self, scorer => scorer.score())
	}

	fn is_match_over(&self) -> bool {
		dispatch!(self, scorer => scorer.is_match_over())
	}

	fn reset(&mut self) {
		dispatch!(self, scorer => scorer.reset())
	}

	fn events(&self) -> Vec<MatchEvent> {
		dispatch!(self, scorer => scorer.events())
	}

	fn config(&self) -> &SportConfig {
		dispatch!(self, scorer => scorer.config())
	}
}
