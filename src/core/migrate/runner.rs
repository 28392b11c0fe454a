//! Migration runner - the pipeline driver
//!
//! Runs the seven passes in a fixed order so that parent surrogate ids
//! are mapped before any dependent pass needs them:
//!
//! streams → courses → topics → subtopics → concepts → sub-concepts → students
//!
//! Unresolved-parent handling mirrors the source system: taxonomy rows
//! with an unmapped parent are skipped with a diagnostic; student rows
//! are still written with the course reference absent. Insert failures
//! are contained per-row for every pass. Query and connection failures
//! are fatal and abort the run.
//!
//! A single forward pass, no retry or resume state. Re-running against
//! the same source duplicates every document.

use crate::adapters::traits::{SourceReader, TargetWriter};
use crate::config::CollectionNames;
use crate::core::idmap::IdMap;
use crate::core::migrate::summary::MigrationSummary;
use crate::core::transform;
use crate::domain::{Result, SourceRow, TargetError};
use mongodb::bson::{self, Bson, DateTime};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Source table names (fixed set, matching the relational schema)
pub mod tables {
    pub const STREAMS: &str = "icad_stream_mst";
    pub const COURSES: &str = "icad_course_mst";
    pub const TOPICS: &str = "icad_topic_mst";
    pub const SUBTOPICS: &str = "icad_subtopic_mst";
    pub const CONCEPTS: &str = "icad_concept_mst";
    pub const SUB_CONCEPTS: &str = "icad_sub_concept_mst";
    pub const STUDENTS: &str = "icad_student_mst";
}

/// Migration runner
///
/// Owns the id maps for one run; they are created empty in [`run`] and
/// discarded with the summary, so nothing carries over between runs.
///
/// [`run`]: MigrationRunner::run
pub struct MigrationRunner {
    reader: Arc<dyn SourceReader>,
    writer: Arc<dyn TargetWriter>,
    collections: CollectionNames,
}

impl MigrationRunner {
    /// Creates a runner over the given source, target and collection names
    pub fn new(
        reader: Arc<dyn SourceReader>,
        writer: Arc<dyn TargetWriter>,
        collections: CollectionNames,
    ) -> Self {
        Self {
            reader,
            writer,
            collections,
        }
    }

    /// Executes the full migration
    ///
    /// # Errors
    ///
    /// Returns an error on a source query/fetch failure; per-row insert
    /// failures and skips are contained and counted in the summary.
    pub async fn run(&self) -> Result<MigrationSummary> {
        let started = Instant::now();
        let migrated_at = DateTime::now();
        let mut summary = MigrationSummary::new();

        let mut streams = IdMap::new("stream");
        let mut courses = IdMap::new("course");
        let mut subtopics = IdMap::new("subtopic");
        let mut concepts = IdMap::new("concept");

        tracing::info!("Starting migration run");

        self.migrate_streams(&mut streams, migrated_at, &mut summary)
            .await?;
        self.migrate_courses(&streams, &mut courses, migrated_at, &mut summary)
            .await?;
        self.migrate_topics(&courses, migrated_at, &mut summary)
            .await?;
        self.migrate_subtopics(&courses, &mut subtopics, migrated_at, &mut summary)
            .await?;
        self.migrate_concepts(&subtopics, &mut concepts, migrated_at, &mut summary)
            .await?;
        self.migrate_sub_concepts(&concepts, migrated_at, &mut summary)
            .await?;
        self.migrate_students(&courses, &mut summary).await?;

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    async fn migrate_streams(
        &self,
        streams: &mut IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::STREAMS).await?;
        summary.streams.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "STREAM_ID", tables::STREAMS, summary) else {
                summary.streams.skipped += 1;
                continue;
            };

            let document = transform::stream_document(&row, code.clone(), migrated_at);
            match self.insert(&self.collections.streams, &document).await {
                Ok(id) => {
                    streams.record(code, id);
                    summary.streams.migrated += 1;
                }
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert stream '{code}': {e}"));
                    summary.streams.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_courses(
        &self,
        streams: &IdMap,
        courses: &mut IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::COURSES).await?;
        summary.courses.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "COURSE_ID", tables::COURSES, summary) else {
                summary.courses.skipped += 1;
                continue;
            };

            let Some(stream_id) = resolve_parent(&row, "STREAM_ID", streams) else {
                summary.diagnostic(format!(
                    "Stream '{}' not mapped. Skipping course '{code}'.",
                    row.string_like("STREAM_ID").unwrap_or_default()
                ));
                summary.courses.skipped += 1;
                continue;
            };

            let document = transform::course_document(&row, code.clone(), stream_id, migrated_at);
            match self.insert(&self.collections.courses, &document).await {
                Ok(id) => {
                    courses.record(code, id);
                    summary.courses.migrated += 1;
                }
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert course '{code}': {e}"));
                    summary.courses.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_topics(
        &self,
        courses: &IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::TOPICS).await?;
        summary.topics.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "TOPIC_ID", tables::TOPICS, summary) else {
                summary.topics.skipped += 1;
                continue;
            };

            let Some(course_id) = resolve_parent(&row, "COURSE_ID", courses) else {
                summary.diagnostic(format!(
                    "Course '{}' not mapped. Skipping topic '{code}'.",
                    row.string_like("COURSE_ID").unwrap_or_default()
                ));
                summary.topics.skipped += 1;
                continue;
            };

            let document = transform::topic_document(&row, code.clone(), course_id, migrated_at);
            match self.insert(&self.collections.topics, &document).await {
                Ok(_) => summary.topics.migrated += 1,
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert topic '{code}': {e}"));
                    summary.topics.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_subtopics(
        &self,
        courses: &IdMap,
        subtopics: &mut IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::SUBTOPICS).await?;
        summary.subtopics.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "SUBTOPIC_ID", tables::SUBTOPICS, summary) else {
                summary.subtopics.skipped += 1;
                continue;
            };

            let Some(course_id) = resolve_parent(&row, "COURSE_ID", courses) else {
                summary.diagnostic(format!(
                    "Course '{}' not mapped. Skipping subtopic '{code}'.",
                    row.string_like("COURSE_ID").unwrap_or_default()
                ));
                summary.subtopics.skipped += 1;
                continue;
            };

            let document = transform::subtopic_document(&row, code.clone(), course_id, migrated_at);
            match self.insert(&self.collections.subtopics, &document).await {
                Ok(id) => {
                    subtopics.record(code.clone(), id);
                    summary.subtopics.migrated += 1;

                    // Legacy mirror collection kept by the source system;
                    // a mirror failure does not fail the row.
                    if let Err(e) = self
                        .insert(&self.collections.subtopics_mirror, &document)
                        .await
                    {
                        summary.diagnostic(format!(
                            "Failed to mirror subtopic '{code}' into '{}': {e}",
                            self.collections.subtopics_mirror
                        ));
                    }
                }
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert subtopic '{code}': {e}"));
                    summary.subtopics.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_concepts(
        &self,
        subtopics: &IdMap,
        concepts: &mut IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::CONCEPTS).await?;
        summary.concepts.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "ID", tables::CONCEPTS, summary) else {
                summary.concepts.skipped += 1;
                continue;
            };

            let Some(subtopic_id) = resolve_parent(&row, "SUBTOPIC_ID", subtopics) else {
                summary.diagnostic(format!(
                    "Subtopic '{}' not mapped. Skipping concept '{code}'.",
                    row.string_like("SUBTOPIC_ID").unwrap_or_default()
                ));
                summary.concepts.skipped += 1;
                continue;
            };

            let document = transform::concept_document(&row, code.clone(), subtopic_id, migrated_at);
            match self.insert(&self.collections.concepts, &document).await {
                Ok(id) => {
                    concepts.record(code, id);
                    summary.concepts.migrated += 1;
                }
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert concept '{code}': {e}"));
                    summary.concepts.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_sub_concepts(
        &self,
        concepts: &IdMap,
        migrated_at: DateTime,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::SUB_CONCEPTS).await?;
        summary.sub_concepts.read = rows.len();

        for row in rows {
            let Some(code) = natural_key(&row, "ID", tables::SUB_CONCEPTS, summary) else {
                summary.sub_concepts.skipped += 1;
                continue;
            };

            let Some(concept_id) = resolve_parent(&row, "CONCEPT_ID", concepts) else {
                summary.diagnostic(format!(
                    "Concept '{}' not mapped. Skipping sub-concept '{code}'.",
                    row.string_like("CONCEPT_ID").unwrap_or_default()
                ));
                summary.sub_concepts.skipped += 1;
                continue;
            };

            let document =
                transform::sub_concept_document(&row, code.clone(), concept_id, migrated_at);
            match self.insert(&self.collections.sub_concepts, &document).await {
                Ok(_) => summary.sub_concepts.migrated += 1,
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert sub-concept '{code}': {e}"));
                    summary.sub_concepts.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn migrate_students(
        &self,
        courses: &IdMap,
        summary: &mut MigrationSummary,
    ) -> Result<()> {
        let rows = self.reader.fetch_table(tables::STUDENTS).await?;
        summary.students.read = rows.len();

        for row in rows {
            let student_key = row
                .string_like("STUDENT_ID")
                .unwrap_or_else(|| "<unknown>".to_string());

            // Unlike the taxonomy passes, an unresolved course does not
            // skip the row; the reference is recorded as absent and the
            // student is written anyway.
            let course_id = resolve_parent(&row, "COURSE_ID", courses);
            if course_id.is_none() {
                summary.diagnostic(format!(
                    "Course '{}' not mapped for student '{student_key}'. Writing with absent reference.",
                    row.string_like("COURSE_ID").unwrap_or_default()
                ));
            }
            let admission_course_id = course_id.clone();

            let document = transform::student_document(&row, course_id, admission_course_id);
            match self.insert(&self.collections.students, &document).await {
                Ok(_) => summary.students.migrated += 1,
                Err(e) => {
                    summary.diagnostic(format!("Failed to insert student '{student_key}': {e}"));
                    summary.students.failed += 1;
                }
            }
        }
        Ok(())
    }

    /// Serializes a document model and inserts it into the collection
    async fn insert<T: Serialize>(&self, collection: &str, document: &T) -> Result<Bson> {
        let document = bson::to_document(document).map_err(|e| TargetError::SerializationFailed {
            collection: collection.to_string(),
            message: e.to_string(),
        })?;
        self.writer.insert_document(collection, document).await
    }
}

/// Extracts a row's natural key, logging a diagnostic when it is missing
fn natural_key(
    row: &SourceRow,
    column: &str,
    table: &str,
    summary: &mut MigrationSummary,
) -> Option<String> {
    let key = row.string_like(column);
    if key.is_none() {
        summary.diagnostic(format!("Row in '{table}' has no {column}. Skipping."));
    }
    key
}

/// Resolves a parent reference through an id map
fn resolve_parent(row: &SourceRow, column: &str, map: &IdMap) -> Option<Bson> {
    row.string_like(column)
        .and_then(|key| map.resolve(&key))
        .cloned()
}
