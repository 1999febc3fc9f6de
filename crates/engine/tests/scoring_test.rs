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

//! Integration tests for the scoring engines
//!
//! These tests verify:
//! - Replay determinism (re-applying the log reproduces the state)
//! - Undo round-trip from any non-terminal state
//! - Monotonic termination (a finished match stays finished until reset)
//! - Sport scenarios through the factory surface

use scorekeeper_engine::{
	EventKind, MatchScorer, ScorerFactory, ScoringEngine, Side, Sport, SportDetail, UnitScore,
};

/// Deterministic side sequence (linear congruential generator)
struct Rallies(u64);

impl Rallies {
	fn next_side(&mut self) -> Side {
		self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
		if (self.0 >> 33) % 2 == 0 {
			Side::A
		} else {
			Side::B
		}
	}
}

fn create(sport: Sport) -> MatchScorer {
	ScorerFactory::create(sport.as_str(), None).unwrap()
}

/// Re-submit every primary event in the log through the public API
fn reapply(scorer: &mut MatchScorer, events: &[scorekeeper_engine::MatchEvent]) {
	for event in events.iter().filter(|e| !e.is_derived()) {
		match event.kind {
			EventKind::Point | EventKind::Goal => scorer.add_point(event.side.unwrap()),
			EventKind::TimeAdvance { seconds } => {
				scorer.as_football_mut().unwrap().advance_time(seconds)
			}
			EventKind::PeriodEnd => scorer.as_football_mut().unwrap().end_period(),
			EventKind::MatchEnd => scorer.as_football_mut().unwrap().end_match(),
			_ => unreachable!("derived events are filtered"),
		}
	}
}

#[test]
fn test_replay_determinism_all_sports() {
	for sport in Sport::ALL {
		let mut scorer = create(sport);
		let mut rallies = Rallies(sport as u64 + 7);
		for _ in 0..150 {
			scorer.add_point(rallies.next_side());
		}
		if let Some(football) = scorer.as_football_mut() {
			football.advance_time(600);
			football.end_period();
		}

		let before = scorer.state();
		let events = scorer.events();

		scorer.reset();
		assert!(scorer.events().is_empty());
		reapply(&mut scorer, &events);

		assert_eq!(scorer.state(), before, "replay diverged for {}", sport);
	}
}

#[test]
fn test_restore_reproduces_log_exactly() {
	for sport in Sport::ALL {
		let mut scorer = create(sport);
		let mut rallies = Rallies(sport as u64 + 99);
		for _ in 0..120 {
			scorer.add_point(rallies.next_side());
		}

		let restored = ScorerFactory::restore(scorer.config().clone(), &scorer.events()).unwrap();

		assert_eq!(restored.state(), scorer.state());
		assert_eq!(restored.events(), scorer.events());
		assert_eq!(restored.score(), scorer.score());
	}
}

#[test]
fn test_undo_round_trip_from_every_state() {
	for sport in Sport::ALL {
		let mut scorer = create(sport);
		let mut rallies = Rallies(sport as u64 + 3);

		for _ in 0..200 {
			if scorer.is_match_over() {
				break;
			}
			let before_state = scorer.state();
			let before_events = scorer.events();

			let side = rallies.next_side();
			scorer.add_point(side);
			scorer.undo_last();

			assert_eq!(scorer.state(), before_state, "undo diverged for {}", sport);
			assert_eq!(scorer.events(), before_events);

			scorer.add_point(side);
		}
	}
}

#[test]
fn test_undo_across_unit_boundary() {
	let mut scorer = create(Sport::Pickleball);
	for _ in 0..10 {
		scorer.add_point(Side::A);
	}
	let before = scorer.state();

	scorer.add_point(Side::A);
	assert_eq!(scorer.state().units, vec![UnitScore::new(11, 0)]);
	assert!(scorer.events().iter().any(|e| e.kind == EventKind::SetWon));

	scorer.undo_last();
	assert_eq!(scorer.state(), before);
	assert!(scorer.events().iter().all(|e| !e.is_derived()));
}

#[test]
fn test_undo_on_empty_log_is_noop() {
	for sport in Sport::ALL {
		let mut scorer = create(sport);
		let before = scorer.state();
		scorer.undo_last();
		assert_eq!(scorer.state(), before);
		assert!(scorer.events().is_empty());
	}
}

#[test]
fn test_monotonic_termination() {
	for sport in [Sport::Badminton, Sport::Tennis, Sport::Volleyball, Sport::Pickleball] {
		let mut scorer = create(sport);
		while !scorer.is_match_over() {
			scorer.add_point(Side::B);
		}

		let final_state = scorer.state();
		let final_events = scorer.events().len();
		for _ in 0..10 {
			scorer.add_point(Side::A);
			assert!(scorer.is_match_over());
		}
		assert_eq!(scorer.state(), final_state);
		assert_eq!(scorer.events().len(), final_events);
		assert_eq!(scorer.state().winner, Some(Side::B));

		scorer.reset();
		assert!(!scorer.is_match_over());
		assert_eq!(scorer.state().units_won, UnitScore::default());
	}
}

#[test]
fn test_badminton_golden_point_through_factory() {
	let mut scorer = create(Sport::Badminton);
	for _ in 0..29 {
		scorer.add_point(Side::A);
		scorer.add_point(Side::B);
	}
	scorer.add_point(Side::A);

	let state = scorer.state();
	assert_eq!(state.units, vec![UnitScore::new(30, 29)]);
	assert_eq!(state.units_won, UnitScore::new(1, 0));
}

#[test]
fn test_badminton_lower_cap_override() {
	let patch = scorekeeper_engine::SportConfigPatch {
		win_units_to: Some(11),
		max_cap: Some(Some(15)),
		..Default::default()
	};
	let mut scorer = ScorerFactory::create("badminton", Some(&patch)).unwrap();
	for _ in 0..14 {
		scorer.add_point(Side::A);
		scorer.add_point(Side::B);
	}
	assert!(matches!(
		scorer.state().detail,
		SportDetail::Badminton { golden_point: true }
	));

	scorer.add_point(Side::B);
	assert_eq!(scorer.state().units, vec![UnitScore::new(14, 15)]);
}

#[test]
fn test_badminton_cap_only_decides_from_threshold() {
	let patch = scorekeeper_engine::SportConfigPatch {
		must_win_by: Some(3),
		..Default::default()
	};
	let mut scorer = ScorerFactory::create("badminton", Some(&patch)).unwrap();
	for _ in 0..28 {
		scorer.add_point(Side::A);
		scorer.add_point(Side::B);
	}
	scorer.add_point(Side::A);
	scorer.add_point(Side::A);

	let state = scorer.state();
	assert!(state.units.is_empty());
	assert_eq!(state.current, UnitScore::new(30, 28));

	scorer.add_point(Side::A);
	assert_eq!(scorer.state().units, vec![UnitScore::new(31, 28)]);
}

#[test]
fn test_cap_override_ignored_outside_badminton() {
	let patch = scorekeeper_engine::SportConfigPatch {
		max_cap: Some(Some(20)),
		..Default::default()
	};
	for sport in ["volleyball", "pickleball"] {
		let mut scorer = ScorerFactory::create(sport, Some(&patch)).unwrap();
		for _ in 0..20 {
			scorer.add_point(Side::A);
			scorer.add_point(Side::B);
		}
		scorer.add_point(Side::A);

		let state = scorer.state();
		assert_eq!(state.current, UnitScore::new(21, 20), "{sport}");
		assert!(state.units.is_empty(), "{sport}");
	}
}

#[test]
fn test_tennis_tiebreak_through_factory() {
	let mut scorer = create(Sport::Tennis);
	for _ in 0..6 {
		for _ in 0..4 {
			scorer.add_point(Side::A);
		}
		for _ in 0..4 {
			scorer.add_point(Side::B);
		}
	}

	let state = scorer.state();
	assert_eq!(state.current, UnitScore::new(6, 6));
	assert!(matches!(state.detail, SportDetail::Tennis { tiebreak: true, .. }));

	for _ in 0..6 {
		scorer.add_point(Side::B);
		scorer.add_point(Side::A);
	}
	scorer.add_point(Side::B);
	scorer.add_point(Side::B);

	let state = scorer.state();
	assert_eq!(state.units, vec![UnitScore::new(6, 7)]);
	assert!(matches!(state.detail, SportDetail::Tennis { tiebreak: false, .. }));
	assert_eq!(scorer.score(), "Set 2: 0–0, 0–0 (6–7)");
}

#[test]
fn test_volleyball_deciding_set_through_factory() {
	let mut scorer = create(Sport::Volleyball);
	for side in [Side::A, Side::B, Side::A, Side::B] {
		for _ in 0..25 {
			scorer.add_point(side);
		}
	}

	for _ in 0..13 {
		scorer.add_point(Side::B);
		scorer.add_point(Side::A);
	}
	scorer.add_point(Side::A);
	scorer.add_point(Side::A);

	let state = scorer.state();
	assert!(state.over);
	assert_eq!(state.winner, Some(Side::A));
	assert_eq!(state.units.last(), Some(&UnitScore::new(15, 13)));
}

#[test]
fn test_football_only_end_match_finishes() {
	let mut scorer = create(Sport::Football);
	for _ in 0..40 {
		scorer.add_point(Side::A);
		assert!(!scorer.state().over);
	}
	for _ in 0..40 {
		scorer.add_point(Side::B);
	}

	let football = scorer.as_football_mut().unwrap();
	football.end_match();

	let state = scorer.state();
	assert!(state.over);
	assert_eq!(state.winner, None);
	assert_eq!(scorer.score(), "Full Time — Team A 40 – 40 Team B");
}

#[test]
fn test_get_events_is_a_copy() {
	let mut scorer = create(Sport::Badminton);
	scorer.add_point(Side::A);

	let mut events = scorer.events();
	events.clear();
	assert_eq!(scorer.events().len(), 1);
	assert_eq!(scorer.events()[0].side, Some(Side::A));
}
