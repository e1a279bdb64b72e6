//! Repository trait definitions for data persistence

use headcount_types::{AttendanceRecord, Error};

/// Repository for the saved attendance history table
pub trait HistoryRepository {
    /// Overwrite the stored table with the full history, in insertion order
    fn replace_all(&self, records: &[AttendanceRecord]) -> Result<(), Error>;

    /// Load all stored records, in insertion order
    fn load_all(&self) -> Result<Vec<AttendanceRecord>, Error>;
}
