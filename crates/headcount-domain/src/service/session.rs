//! Attendance session service
//!
//! One session covers one running front-end: a live tally plus the ordered
//! history of records saved so far. Save and reset are separate actions;
//! saving snapshots the tally without clearing it, and a full reset zeroes
//! the tally without touching the history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use headcount_types::{AttendanceRecord, Category, Tally};

/// Session state owned by the UI controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceSession {
    /// Live tally for the current service
    tally: Tally,
    /// Records saved during this session, append-only, in insertion order
    #[serde(default)]
    history: Vec<AttendanceRecord>,
}

impl AttendanceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn history(&self) -> &[AttendanceRecord] {
        &self.history
    }

    pub fn increment(&mut self, category: Category) {
        self.tally.increment(category);
    }

    pub fn decrement(&mut self, category: Category) {
        self.tally.decrement(category);
    }

    pub fn reset_category(&mut self, category: Category) {
        self.tally.reset(category);
    }

    /// Zero all counts and clear the service name; already-saved records persist
    pub fn reset_all(&mut self) {
        self.tally.reset_all();
    }

    pub fn set_service_name(&mut self, name: impl Into<String>) {
        self.tally.set_service_name(name);
    }

    /// Snapshot the tally into an immutable record and append it to history
    ///
    /// Returns the new record. History length grows by exactly one; the
    /// tally itself is left untouched.
    pub fn save_record(&mut self, now: DateTime<Utc>) -> AttendanceRecord {
        let record = AttendanceRecord::from_tally(&self.tally, now);
        self.history.push(record.clone());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headcount_types::DEFAULT_SERVICE_NAME;

    fn sample_session() -> AttendanceSession {
        let mut session = AttendanceSession::new();
        session.set_service_name("Sunday AM");
        for _ in 0..3 {
            session.increment(Category::Gents);
        }
        for _ in 0..5 {
            session.increment(Category::Ladies);
        }
        for _ in 0..2 {
            session.increment(Category::Kids);
        }
        session
    }

    #[test]
    fn test_save_appends_one_record() {
        let mut session = sample_session();
        let before = session.history().len();

        let record = session.save_record(Utc::now());
        assert_eq!(session.history().len(), before + 1);
        assert_eq!(record.service_name, "Sunday AM");
        assert_eq!(record.gents, 3);
        assert_eq!(record.ladies, 5);
        assert_eq!(record.kids, 2);
        assert_eq!(record.total(), 10);
    }

    #[test]
    fn test_save_leaves_tally_intact() {
        let mut session = sample_session();
        session.save_record(Utc::now());
        assert_eq!(session.tally().total(), 10);
        assert_eq!(session.tally().service_name, "Sunday AM");
    }

    #[test]
    fn test_reset_does_not_touch_history() {
        let mut session = sample_session();
        session.save_record(Utc::now());
        session.save_record(Utc::now());

        session.reset_all();
        assert_eq!(session.tally().total(), 0);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].total(), 10);
    }

    #[test]
    fn test_reset_single_category() {
        let mut session = sample_session();
        session.reset_category(Category::Ladies);
        assert_eq!(session.tally().count(Category::Ladies), 0);
        assert_eq!(session.tally().total(), 5);
        // Single-category reset keeps the service name
        assert_eq!(session.tally().service_name, "Sunday AM");
    }

    #[test]
    fn test_counts_never_negative() {
        let mut session = AttendanceSession::new();
        session.increment(Category::Kids);
        session.decrement(Category::Kids);
        session.decrement(Category::Kids);
        session.decrement(Category::Gents);
        assert_eq!(session.tally().count(Category::Kids), 0);
        assert_eq!(session.tally().count(Category::Gents), 0);
        assert_eq!(session.tally().total(), 0);
    }

    #[test]
    fn test_blank_service_name_defaults_on_save() {
        let mut session = AttendanceSession::new();
        session.increment(Category::Gents);
        let record = session.save_record(Utc::now());
        assert_eq!(record.service_name, DEFAULT_SERVICE_NAME);
    }
}
