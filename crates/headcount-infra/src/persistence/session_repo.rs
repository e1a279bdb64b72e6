//! File-based session repository
//!
//! Persists the live [`AttendanceSession`] as a JSON file under the data
//! directory so the one-shot CLI can carry the tally across invocations.
//! The GUI keeps its session purely in memory and does not use this.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use headcount_domain::AttendanceSession;
use headcount_types::Result;

/// JSON-file persistence for the live session
pub struct FileSessionRepository {
    session_path: PathBuf,
}

impl FileSessionRepository {
    /// Create a repository rooted at the given data directory
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            session_path: data_dir.join("session.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.session_path
    }

    /// Load the stored session, or a fresh one when none exists yet
    pub fn load(&self) -> Result<AttendanceSession> {
        if !self.session_path.exists() {
            return Ok(AttendanceSession::new());
        }

        let file = File::open(&self.session_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the session back to disk
    pub fn persist(&self, session: &AttendanceSession) -> Result<()> {
        let file = File::create(&self.session_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, session)?;
        Ok(())
    }

    /// Remove the stored session, if any
    pub fn clear(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use headcount_types::Category;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_fresh_session() {
        let dir = tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().to_path_buf()).unwrap();

        let session = repo.load().unwrap();
        assert_eq!(session.tally().total(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().to_path_buf()).unwrap();

        let mut session = AttendanceSession::new();
        session.set_service_name("Midweek");
        session.increment(Category::Gents);
        session.increment(Category::Kids);
        session.save_record(Utc::now());
        repo.persist(&session).unwrap();

        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.tally().total(), 2);
        assert_eq!(reloaded.tally().service_name, "Midweek");
        assert_eq!(reloaded.history().len(), 1);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().to_path_buf()).unwrap();

        repo.persist(&AttendanceSession::new()).unwrap();
        assert!(repo.path().exists());
        repo.clear().unwrap();
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_load_after_clear_is_fresh() {
        let dir = tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().to_path_buf()).unwrap();

        let mut session = AttendanceSession::new();
        session.increment(Category::Ladies);
        session.save_record(Utc::now());
        repo.persist(&session).unwrap();

        repo.clear().unwrap();
        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.tally().total(), 0);
        assert!(reloaded.history().is_empty());
    }
}
