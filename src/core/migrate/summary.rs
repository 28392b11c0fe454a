//! Migration summary
//!
//! Per-entity counters plus the human-readable diagnostics collected
//! while the run skipped or failed individual rows.

use std::time::Duration;

/// Counters for one migration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    /// Rows fetched from the source table
    pub read: usize,

    /// Documents written to the target
    pub migrated: usize,

    /// Rows skipped (missing natural key or unresolved parent)
    pub skipped: usize,

    /// Rows whose insert failed
    pub failed: usize,
}

/// Summary of one migration run
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    pub streams: EntityCounts,
    pub courses: EntityCounts,
    pub topics: EntityCounts,
    pub subtopics: EntityCounts,
    pub concepts: EntityCounts,
    pub sub_concepts: EntityCounts,
    pub students: EntityCounts,

    /// Human-readable lines naming skipped/failed rows
    pub diagnostics: Vec<String>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl MigrationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic line and logs it
    pub fn diagnostic(&mut self, line: String) {
        tracing::warn!("{line}");
        self.diagnostics.push(line);
    }

    /// Sets the run duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    fn passes(&self) -> [(&'static str, &EntityCounts); 7] {
        [
            ("streams", &self.streams),
            ("courses", &self.courses),
            ("topics", &self.topics),
            ("subtopics", &self.subtopics),
            ("concepts", &self.concepts),
            ("sub_concepts", &self.sub_concepts),
            ("students", &self.students),
        ]
    }

    /// Total documents written across all passes
    pub fn total_migrated(&self) -> usize {
        self.passes().iter().map(|(_, c)| c.migrated).sum()
    }

    /// Total rows skipped across all passes
    pub fn total_skipped(&self) -> usize {
        self.passes().iter().map(|(_, c)| c.skipped).sum()
    }

    /// Total rows whose insert failed across all passes
    pub fn total_failed(&self) -> usize {
        self.passes().iter().map(|(_, c)| c.failed).sum()
    }

    /// Whether every read row produced a document
    pub fn is_clean(&self) -> bool {
        self.total_skipped() == 0 && self.total_failed() == 0
    }

    /// Logs the per-pass and total counters
    pub fn log_summary(&self) {
        for (entity, counts) in self.passes() {
            tracing::info!(
                entity = entity,
                read = counts.read,
                migrated = counts.migrated,
                skipped = counts.skipped,
                failed = counts.failed,
                "Pass complete"
            );
        }
        tracing::info!(
            total_migrated = self.total_migrated(),
            total_skipped = self.total_skipped(),
            total_failed = self.total_failed(),
            duration_secs = self.duration.as_secs_f64(),
            "Migration finished"
        );
    }
}
