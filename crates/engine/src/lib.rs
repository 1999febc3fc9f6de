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

//! Scorekeeper Engine
//!
//! This crate provides deterministic live scoring engines for badminton,
//! tennis, football, volleyball and pickleball. Each engine consumes point
//! (or goal) events, enforces its sport's win conditions and exposes a
//! serializable state snapshot plus a human-readable summary.
//!
//! Architecture:
//! - Single-threaded, synchronous engines; callers serialize access
//! - Event sourcing: the event log is the only source of truth
//! - Undo by full replay of the remaining log
//! - Configs resolved and validated once, in [`ScorerFactory`]

pub mod config;
pub mod event;
pub mod factory;
pub mod logging;
pub mod rules;
pub mod scorer;
pub mod script;

pub use event::{EventKind, EventLog, MatchEvent, SequenceNumber};
pub use factory::{ConfigError, ScorerFactory};
pub use rules::{Period, SportConfig, SportConfigPatch, TieBreakConfig};
pub use scorer::{
	BadmintonScorer, Command, FootballScorer, MatchScorer, PickleballScorer, Scorer,
	ScoringEngine, SportRules, TennisScorer, VolleyballScorer,
};
pub use scorekeeper_sdk::types::{MatchState, Participants, Side, Sport, SportDetail, UnitScore};
