//! Core types for attendance counting

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Service name used when a record is saved without one
pub const DEFAULT_SERVICE_NAME: &str = "No service name";

/// Attendance category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gents,
    Ladies,
    Kids,
}

impl Category {
    /// All categories in fixed display order
    pub const ALL: [Category; 3] = [Category::Gents, Category::Ladies, Category::Kids];

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gents => "Gents",
            Category::Ladies => "Ladies",
            Category::Kids => "Kids",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Live per-category headcount for the service currently being recorded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Free-text service name, no validation
    #[serde(default)]
    pub service_name: String,
    /// Counts in `Category::ALL` order
    counts: [u32; 3],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to a category, no upper bound
    pub fn increment(&mut self, category: Category) {
        self.counts[category as usize] += 1;
    }

    /// Remove one from a category, floored at zero
    pub fn decrement(&mut self, category: Category) {
        self.counts[category as usize] = self.counts[category as usize].saturating_sub(1);
    }

    /// Zero a single category
    pub fn reset(&mut self, category: Category) {
        self.counts[category as usize] = 0;
    }

    /// Zero all categories and clear the service name
    pub fn reset_all(&mut self) {
        self.counts = [0; 3];
        self.service_name.clear();
    }

    pub fn set_service_name(&mut self, name: impl Into<String>) {
        self.service_name = name.into();
    }

    pub fn count(&self, category: Category) -> u32 {
        self.counts[category as usize]
    }

    /// Counts paired with their categories, in fixed order
    pub fn counts(&self) -> [(Category, u32); 3] {
        [
            (Category::Gents, self.counts[0]),
            (Category::Ladies, self.counts[1]),
            (Category::Kids, self.counts[2]),
        ]
    }

    /// Total attendance, recomputed from the category counts on every read
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Service name with the blank fallback applied
    pub fn service_name_or_default(&self) -> &str {
        if self.service_name.trim().is_empty() {
            DEFAULT_SERVICE_NAME
        } else {
            &self.service_name
        }
    }
}

/// Immutable timestamped snapshot of a completed tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// When the record was saved
    pub recorded_at: DateTime<Utc>,
    /// Service name at save time
    pub service_name: String,
    pub gents: u32,
    pub ladies: u32,
    pub kids: u32,
}

impl AttendanceRecord {
    /// Snapshot a tally at the given time
    pub fn from_tally(tally: &Tally, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            service_name: tally.service_name_or_default().to_string(),
            gents: tally.count(Category::Gents),
            ladies: tally.count(Category::Ladies),
            kids: tally.count(Category::Kids),
        }
    }

    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Gents => self.gents,
            Category::Ladies => self.ladies,
            Category::Kids => self.kids,
        }
    }

    /// Total attendance, always the sum of the category counts
    pub fn total(&self) -> u32 {
        self.gents + self.ladies + self.kids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tracks_counts() {
        let mut tally = Tally::new();
        tally.increment(Category::Gents);
        tally.increment(Category::Gents);
        tally.increment(Category::Kids);
        assert_eq!(tally.total(), 3);

        tally.decrement(Category::Gents);
        assert_eq!(tally.total(), 2);
        assert_eq!(
            tally.total(),
            Category::ALL.iter().map(|c| tally.count(*c)).sum::<u32>()
        );
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut tally = Tally::new();
        tally.decrement(Category::Ladies);
        assert_eq!(tally.count(Category::Ladies), 0);
    }

    #[test]
    fn test_reset_all_clears_service_name() {
        let mut tally = Tally::new();
        tally.set_service_name("Sunday AM");
        tally.increment(Category::Kids);
        tally.reset_all();
        assert_eq!(tally.total(), 0);
        assert!(tally.service_name.is_empty());
    }

    #[test]
    fn test_blank_service_name_fallback() {
        let tally = Tally::new();
        assert_eq!(tally.service_name_or_default(), DEFAULT_SERVICE_NAME);

        let record = AttendanceRecord::from_tally(&tally, Utc::now());
        assert_eq!(record.service_name, DEFAULT_SERVICE_NAME);
    }
}
