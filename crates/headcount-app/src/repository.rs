//! Repository adapters for persistence layer

use headcount_infra::{CsvHistoryRepository, FileSessionRepository};
use headcount_types::Result;

use crate::config::Config;

/// Open the file-based session repository
pub fn open_session_repo(config: &Config) -> Result<FileSessionRepository> {
    FileSessionRepository::open(config.data_dir()?)
}

/// Open the CSV history repository
pub fn open_history_repo(config: &Config) -> Result<CsvHistoryRepository> {
    Ok(CsvHistoryRepository::new(config.history_csv_path()?))
}
