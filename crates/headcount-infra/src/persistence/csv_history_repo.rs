//! CSV-backed history repository
//!
//! The history table lives in a single CSV file with the columns
//! Date, Service Name, Gents, Ladies, Kids. Every save rewrites the file in
//! full from the in-memory history; the file is never appended to.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use headcount_domain::repository::HistoryRepository;
use headcount_types::{AttendanceRecord, Error, Result};

/// Timestamp format used in the Date column
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADERS: [&str; 5] = ["Date", "Service Name", "Gents", "Ladies", "Kids"];

/// CSV file implementation of [`HistoryRepository`]
pub struct CsvHistoryRepository {
    csv_path: PathBuf,
}

impl CsvHistoryRepository {
    pub fn new(csv_path: PathBuf) -> Self {
        Self { csv_path }
    }

    pub fn path(&self) -> &Path {
        &self.csv_path
    }

    fn parse_record(record: &csv::StringRecord, row: usize) -> Result<AttendanceRecord> {
        let field = |idx: usize| -> Result<&str> {
            record
                .get(idx)
                .ok_or_else(|| Error::Csv(format!("Missing column {} in row {}", HEADERS[idx], row)))
        };

        let recorded_at = NaiveDateTime::parse_from_str(field(0)?, DATE_FORMAT)
            .map_err(|e| Error::Csv(format!("Invalid date in row {}: {}", row, e)))?
            .and_utc();
        let service_name = field(1)?.to_string();

        let count = |idx: usize| -> Result<u32> {
            field(idx)?.trim().parse().map_err(|e| {
                Error::Csv(format!("Invalid count in row {}, column {}: {}", row, HEADERS[idx], e))
            })
        };

        Ok(AttendanceRecord {
            recorded_at,
            service_name,
            gents: count(2)?,
            ladies: count(3)?,
            kids: count(4)?,
        })
    }
}

impl HistoryRepository for CsvHistoryRepository {
    fn replace_all(&self, records: &[AttendanceRecord]) -> Result<()> {
        if let Some(parent) = self.csv_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.csv_path)
            .map_err(|e| Error::Csv(e.to_string()))?;
        writer
            .write_record(HEADERS)
            .map_err(|e| Error::Csv(e.to_string()))?;

        for record in records {
            writer
                .write_record([
                    record.recorded_at.format(DATE_FORMAT).to_string(),
                    record.service_name.clone(),
                    record.gents.to_string(),
                    record.ladies.to_string(),
                    record.kids.to_string(),
                ])
                .map_err(|e| Error::Csv(e.to_string()))?;
        }

        writer.flush()?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<AttendanceRecord>> {
        if !self.csv_path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.csv_path)
            .map_err(|e| Error::Csv(e.to_string()))?;

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| Error::Csv(e.to_string()))?;
            // +2 because row_idx is 0-based and the header is row 1
            records.push(Self::parse_record(&record, row_idx + 2)?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_records() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord {
                recorded_at: Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap(),
                service_name: "Sunday AM".to_string(),
                gents: 3,
                ladies: 5,
                kids: 2,
            },
            AttendanceRecord {
                recorded_at: Utc.with_ymd_and_hms(2025, 1, 5, 18, 0, 0).unwrap(),
                service_name: "Sunday PM".to_string(),
                gents: 1,
                ladies: 2,
                kids: 0,
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempdir().unwrap();
        let repo = CsvHistoryRepository::new(dir.path().join("attendance.csv"));

        let records = sample_records();
        repo.replace_all(&records).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_replace_overwrites_not_appends() {
        let dir = tempdir().unwrap();
        let repo = CsvHistoryRepository::new(dir.path().join("attendance.csv"));

        let mut records = sample_records();
        repo.replace_all(&records).unwrap();

        records.push(AttendanceRecord {
            recorded_at: Utc.with_ymd_and_hms(2025, 1, 12, 9, 30, 0).unwrap(),
            service_name: "Sunday AM".to_string(),
            gents: 4,
            ladies: 4,
            kids: 1,
        });
        repo.replace_all(&records).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let repo = CsvHistoryRepository::new(dir.path().join("attendance.csv"));
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_header_row_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attendance.csv");
        let repo = CsvHistoryRepository::new(path.clone());
        repo.replace_all(&sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let first_line = content.lines().next().unwrap();
        assert_eq!(first_line, "Date,Service Name,Gents,Ladies,Kids");
    }
}
