//! Persistence implementations
//!
//! File-based implementations of the repository traits: the history table as
//! a CSV file and the live session as a JSON file.

mod csv_history_repo;
mod session_repo;

pub use csv_history_repo::CsvHistoryRepository;
pub use session_repo::FileSessionRepository;
