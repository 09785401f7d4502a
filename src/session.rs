//! Live editing state for form-style frontends.
//!
//! A frontend that re-renders on every field edit keeps one [`SessionState`]
//! per editing session and rebuilds the README from a fresh
//! [`AnswerRecord`] snapshot each time. Custom sections are addressed by
//! generated opaque keys, not positions, so removing one entry never
//! re-wires edits onto its neighbours.

use std::collections::HashMap;

use uuid::Uuid;

use crate::record::{AnswerRecord, CustomSection};

/// Mutable per-session editing state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    record: AnswerRecord,
    custom: Vec<(Uuid, CustomSection)>,
}

impl SessionState {
    /// Start a session from the defaults record.
    pub fn new() -> Self {
        Self::from_record(AnswerRecord::default())
    }

    /// Start a session from an existing record, assigning a key to each of
    /// its custom sections.
    pub fn from_record(record: AnswerRecord) -> Self {
        let mut state = Self {
            record,
            custom: Vec::new(),
        };
        for section in std::mem::take(&mut state.record.custom_sections) {
            state.custom.push((Uuid::new_v4(), section));
        }
        state
    }

    /// Direct access to the scalar fields for edits. Custom sections live
    /// behind the keyed API below; edits to `record.custom_sections` here
    /// are discarded at snapshot time.
    pub fn record_mut(&mut self) -> &mut AnswerRecord {
        &mut self.record
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// Append an empty custom section and return its key.
    pub fn add_section(&mut self) -> Uuid {
        let key = Uuid::new_v4();
        self.custom.push((
            key,
            CustomSection {
                title: String::new(),
                content: String::new(),
            },
        ));
        key
    }

    /// Update a custom section by key. Returns false for an unknown key.
    pub fn update_section(&mut self, key: Uuid, title: &str, content: &str) -> bool {
        match self.custom.iter_mut().find(|(k, _)| *k == key) {
            Some((_, section)) => {
                section.title = title.to_string();
                section.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a custom section by key. Returns false for an unknown key.
    pub fn remove_section(&mut self, key: Uuid) -> bool {
        let before = self.custom.len();
        self.custom.retain(|(k, _)| *k != key);
        self.custom.len() != before
    }

    /// Keys in display order, for frontends iterating their widgets.
    pub fn section_keys(&self) -> Vec<Uuid> {
        self.custom.iter().map(|(k, _)| *k).collect()
    }

    pub fn section(&self, key: Uuid) -> Option<&CustomSection> {
        self.custom.iter().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    /// Immutable snapshot for one render, custom sections in display order.
    pub fn snapshot(&self) -> AnswerRecord {
        let mut record = self.record.clone();
        record.custom_sections = self.custom.iter().map(|(_, s)| s.clone()).collect();
        record
    }

    /// Replace the whole session with fresh defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Per-session isolation for a multi-user host: each session id owns its
/// own state, created on first access.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, session_id: &str) -> &mut SessionState {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionState::new)
    }

    pub fn remove(&mut self, session_id: &str) -> Option<SessionState> {
        self.sessions.remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
