use serde::{Deserialize, Serialize};

use crate::event::Event;

/// An event together with its position in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent<E> {
    /// 1-based, strictly increasing position.
    pub sequence_number: u64,
    pub payload: E,
}

/// In-memory append-only event journal.
///
/// Process-local history only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventJournal<E> {
    entries: Vec<RecordedEvent<E>>,
}

impl<E> Default for EventJournal<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Event> EventJournal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event and return its sequence number.
    pub fn record(&mut self, payload: E) -> u64 {
        let sequence_number = self.last_sequence() + 1;
        self.entries.push(RecordedEvent {
            sequence_number,
            payload,
        });
        sequence_number
    }

    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence_number).unwrap_or(0)
    }

    pub fn entries(&self) -> &[RecordedEvent<E>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
