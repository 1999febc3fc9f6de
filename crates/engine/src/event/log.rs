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

use super::{EventDraft, MatchEvent, SequenceNumber};

/// Append-only, in-memory match log
///
/// The only removal is [`EventLog::pop_last_action`], which backs undo.
/// Callers outside the engine only ever see copies of the entries.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
	events: Vec<MatchEvent>,
	last_seq: SequenceNumber,
}

impl EventLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sequence and append a drafted event
	pub fn append(&mut self, draft: EventDraft, timestamp: i64) -> SequenceNumber {
		self.last_seq += 1;
		self.events.push(MatchEvent {
			seq: self.last_seq,
			timestamp,
			kind: draft.kind,
			side: draft.side,
			meta: draft.meta,
		});
		self.last_seq
	}

	/// Remove the most recent caller action
	///
	/// Trailing derived markers are dropped together with the primary event
	/// that produced them. Returns the removed primary event, or `None` when
	/// the log holds no primary event.
	pub fn pop_last_action(&mut self) -> Option<MatchEvent> {
		let idx = self.events.iter().rposition(|e| !e.is_derived())?;
		let mut removed = self.events.split_off(idx);
		self.last_seq = self.events.last().map(|e| e.seq).unwrap_or(0);
		Some(removed.swap_remove(0))
	}

	/// Copy of every entry, oldest first
	pub fn events(&self) -> Vec<MatchEvent> {
		self.events.clone()
	}

	pub fn last(&self) -> Option<&MatchEvent> {
		self.events.last()
	}

	pub fn last_sequence(&self) -> SequenceNumber {
		self.last_seq
	}

	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}

	pub fn clear(&mut self) {
		self.events.clear();
		self.last_seq = 0;
	}
}
