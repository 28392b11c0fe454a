//! Integration tests for the migration pipeline
//!
//! Drives [`MigrationRunner`] end to end against in-memory fakes of the
//! source and target, covering parent resolution, the skip/write policies
//! and the non-resumable re-run behavior.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use trellis::adapters::{SourceReader, TargetWriter};
use trellis::config::CollectionNames;
use trellis::core::migrate::runner::tables;
use trellis::core::MigrationRunner;
use trellis::domain::{Result, SourceRow, SourceValue, TargetError};

/// In-memory source serving canned rows per table
struct FakeSource {
    tables: HashMap<String, Vec<SourceRow>>,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    fn with_table(mut self, table: &str, rows: Vec<SourceRow>) -> Self {
        self.tables.insert(table.to_string(), rows);
        self
    }
}

#[async_trait]
impl SourceReader for FakeSource {
    async fn fetch_table(&self, table: &str) -> Result<Vec<SourceRow>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

/// In-memory target recording every insert
#[derive(Default)]
struct FakeTarget {
    inserts: Mutex<Vec<(String, Document)>>,
    failing_collections: HashSet<String>,
}

impl FakeTarget {
    fn new() -> Self {
        Self::default()
    }

    fn failing_on(collection: &str) -> Self {
        Self {
            inserts: Mutex::new(Vec::new()),
            failing_collections: HashSet::from([collection.to_string()]),
        }
    }

    fn inserted(&self, collection: &str) -> Vec<Document> {
        self.inserts
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn total_inserts(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl TargetWriter for FakeTarget {
    async fn insert_document(&self, collection: &str, mut document: Document) -> Result<Bson> {
        if self.failing_collections.contains(collection) {
            return Err(TargetError::InsertFailed {
                collection: collection.to_string(),
                message: "simulated insert failure".to_string(),
            }
            .into());
        }
        let id = Bson::ObjectId(ObjectId::new());
        document.insert("_id", id.clone());
        self.inserts
            .lock()
            .unwrap()
            .push((collection.to_string(), document));
        Ok(id)
    }
}

fn row(pairs: &[(&str, SourceValue)]) -> SourceRow {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn text(value: &str) -> SourceValue {
    SourceValue::Text(value.to_string())
}

/// A small but fully-linked source: one stream, one course, one topic,
/// one subtopic, one concept, one sub-concept, one student.
fn linked_source() -> FakeSource {
    FakeSource::new()
        .with_table(
            tables::STREAMS,
            vec![row(&[
                ("STREAM_ID", text("S1")),
                ("STREAM_NAME", text("Engineering")),
                ("IS_DELETED", text("NO")),
            ])],
        )
        .with_table(
            tables::COURSES,
            vec![row(&[
                ("COURSE_ID", SourceValue::Int(7)),
                ("STREAM_ID", text("S1")),
                ("COURSE_NAME", text("Physics")),
                ("IS_DELETED", text("NO")),
            ])],
        )
        .with_table(
            tables::TOPICS,
            vec![row(&[
                ("TOPIC_ID", SourceValue::Int(30)),
                ("COURSE_ID", SourceValue::Int(7)),
                ("TOPIC_NAME", text("Mechanics")),
            ])],
        )
        .with_table(
            tables::SUBTOPICS,
            vec![row(&[
                ("SUBTOPIC_ID", SourceValue::Int(300)),
                ("COURSE_ID", SourceValue::Int(7)),
                ("SUBTOPIC_NAME", text("Dynamics")),
            ])],
        )
        .with_table(
            tables::CONCEPTS,
            vec![row(&[
                ("ID", SourceValue::Int(9)),
                ("SUBTOPIC_ID", SourceValue::Int(300)),
                ("CONCEPT_NAME", text("Newton's Laws")),
            ])],
        )
        .with_table(
            tables::SUB_CONCEPTS,
            vec![row(&[
                ("ID", SourceValue::Int(11)),
                ("CONCEPT_ID", SourceValue::Int(9)),
                ("SUB_CONCEPT_NAME", text("Inertia")),
            ])],
        )
        .with_table(
            tables::STUDENTS,
            vec![row(&[
                ("STUDENT_ID", SourceValue::Int(1001)),
                ("COURSE_ID", SourceValue::Int(7)),
                ("FIRST_NAME", text("Asha")),
                ("IS_DELETED", text("NO")),
            ])],
        )
}

#[tokio::test]
async fn test_full_pipeline_links_parents_by_surrogate_id() {
    let source = Arc::new(linked_source());
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();

    assert!(summary.is_clean());
    assert_eq!(summary.streams.migrated, 1);
    assert_eq!(summary.students.migrated, 1);

    // the course carries the stream's surrogate id, not the key "S1"
    let stream = &target.inserted("streams")[0];
    let course = &target.inserted("courses")[0];
    assert_eq!(course.get("stream_id"), stream.get("_id"));
    assert_eq!(course.get_str("course_code").unwrap(), "7");

    // the student resolves the same course through its integer key
    let student = &target.inserted("icad_student_mst")[0];
    let academic = student.get_document("academic_details").unwrap();
    assert_eq!(academic.get("course_id"), course.get("_id"));
    assert_eq!(academic.get("admission_course_id"), course.get("_id"));
}

#[tokio::test]
async fn test_course_with_unmapped_stream_is_skipped() {
    let source = Arc::new(
        FakeSource::new().with_table(
            tables::COURSES,
            vec![row(&[
                ("COURSE_ID", SourceValue::Int(7)),
                ("STREAM_ID", text("S9")),
                ("COURSE_NAME", text("Physics")),
            ])],
        ),
    );
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.courses.read, 1);
    assert_eq!(summary.courses.migrated, 0);
    assert_eq!(summary.courses.skipped, 1);
    assert!(target.inserted("courses").is_empty());
    // the diagnostic names both the missing parent and the skipped row
    assert!(summary
        .diagnostics
        .iter()
        .any(|d| d.contains("S9") && d.contains("7")));
}

#[tokio::test]
async fn test_student_with_unmapped_course_is_written_without_reference() {
    let source = Arc::new(
        FakeSource::new().with_table(
            tables::STUDENTS,
            vec![row(&[
                ("STUDENT_ID", SourceValue::Int(1001)),
                ("COURSE_ID", SourceValue::Int(99)),
                ("FIRST_NAME", text("Asha")),
            ])],
        ),
    );
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.students.migrated, 1);
    assert_eq!(summary.students.skipped, 0);

    let student = &target.inserted("icad_student_mst")[0];
    let academic = student.get_document("academic_details").unwrap();
    assert!(!academic.contains_key("course_id"));
    assert!(!academic.contains_key("admission_course_id"));
    assert!(summary.diagnostics.iter().any(|d| d.contains("1001")));
}

#[tokio::test]
async fn test_subtopics_are_mirrored_into_legacy_collection() {
    let source = Arc::new(linked_source());
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();
    assert_eq!(summary.subtopics.migrated, 1);

    let canonical = target.inserted("subtopics");
    let mirror = target.inserted("icad_subtopic_mst");
    assert_eq!(canonical.len(), 1);
    assert_eq!(mirror.len(), 1);
    assert_eq!(
        canonical[0].get_str("subtopic_code").unwrap(),
        mirror[0].get_str("subtopic_code").unwrap()
    );

    // concepts resolve through the canonical insert's id
    let concept = &target.inserted("concepts")[0];
    assert_eq!(concept.get("subtopic_id"), canonical[0].get("_id"));
}

#[tokio::test]
async fn test_insert_failure_is_contained_per_row() {
    let source = Arc::new(linked_source());
    let target = Arc::new(FakeTarget::failing_on("topics"));
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.topics.failed, 1);
    assert_eq!(summary.topics.migrated, 0);
    // downstream passes still ran
    assert_eq!(summary.students.migrated, 1);
    assert!(!summary.is_clean());
    assert!(summary.diagnostics.iter().any(|d| d.contains("topic")));
}

#[tokio::test]
async fn test_missing_natural_key_skips_row() {
    let source = Arc::new(FakeSource::new().with_table(
        tables::STREAMS,
        vec![row(&[("STREAM_NAME", text("Orphan"))])],
    ));
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.streams.read, 1);
    assert_eq!(summary.streams.skipped, 1);
    assert!(target.inserted("streams").is_empty());
    assert!(summary
        .diagnostics
        .iter()
        .any(|d| d.contains("STREAM_ID")));
}

#[tokio::test]
async fn test_rerun_duplicates_documents() {
    let source = Arc::new(linked_source());
    let target = Arc::new(FakeTarget::new());

    let first = MigrationRunner::new(source.clone(), target.clone(), CollectionNames::default())
        .run()
        .await
        .unwrap();
    let after_first = target.total_inserts();

    let second = MigrationRunner::new(source, target.clone(), CollectionNames::default())
        .run()
        .await
        .unwrap();

    // no dedup or resume state: the second run writes everything again
    assert_eq!(first.total_migrated(), second.total_migrated());
    assert_eq!(target.total_inserts(), after_first * 2);
    assert_eq!(target.inserted("streams").len(), 2);
}

#[tokio::test]
async fn test_student_document_always_has_five_installments() {
    let source = Arc::new(linked_source());
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    runner.run().await.unwrap();

    let student = &target.inserted("icad_student_mst")[0];
    let fees = student.get_document("fees_details").unwrap();
    assert_eq!(fees.get_array("installments").unwrap().len(), 5);
}

#[tokio::test]
async fn test_deleted_taxonomy_row_gets_deletion_timestamp() {
    let source = Arc::new(FakeSource::new().with_table(
        tables::STREAMS,
        vec![
            row(&[("STREAM_ID", text("S1")), ("IS_DELETED", text("YES"))]),
            row(&[("STREAM_ID", text("S2")), ("IS_DELETED", text("NO"))]),
        ],
    ));
    let target = Arc::new(FakeTarget::new());
    let runner = MigrationRunner::new(source, target.clone(), CollectionNames::default());

    runner.run().await.unwrap();

    let streams = target.inserted("streams");
    assert!(streams[0].get_datetime("deleted_at").is_ok());
    assert!(!streams[1].contains_key("deleted_at"));
}
