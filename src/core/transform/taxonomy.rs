//! Taxonomy transformers
//!
//! One pure function per flat taxonomy entity: stream, course, topic,
//! subtopic, concept, sub-concept. The caller supplies the already
//! extracted natural key and any resolved parent surrogate id; everything
//! else comes from the row with tolerant accessors.

use super::{bson_datetime, deleted_at};
use crate::domain::{
    ConceptDocument, CourseDocument, SourceRow, StreamDocument, SubConceptDocument,
    SubtopicDocument, TopicDocument,
};
use mongodb::bson::{Bson, DateTime};

/// Transforms a stream row
pub fn stream_document(
    row: &SourceRow,
    stream_code: String,
    migrated_at: DateTime,
) -> StreamDocument {
    StreamDocument {
        stream_code,
        stream_name: row.text("STREAM_NAME"),
        description: row.text("DESCRIPTION"),
        sequence: row.int("SEQUENCE"),
        status: row.text("STATUS"),
        remark: row.text("REMARKS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}

/// Transforms a course row with its resolved stream reference
pub fn course_document(
    row: &SourceRow,
    course_code: String,
    stream_id: Bson,
    migrated_at: DateTime,
) -> CourseDocument {
    CourseDocument {
        course_code,
        stream_id,
        course_name: row.text("COURSE_NAME"),
        total_marks: row.int("RT_CAT_EXAM_TOTAL_MARK"),
        description: row.text("DESCRIPTION"),
        status: row.text("STATUS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}

/// Transforms a topic row with its resolved course reference
pub fn topic_document(
    row: &SourceRow,
    topic_code: String,
    course_id: Bson,
    migrated_at: DateTime,
) -> TopicDocument {
    TopicDocument {
        topic_code,
        course_id,
        topic_name: row.text("TOPIC_NAME"),
        description: row.text("DESCRIPTION"),
        sequence: row.int("SEQUENCE"),
        status: row.text("STATUS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}

/// Transforms a subtopic row with its resolved course reference
pub fn subtopic_document(
    row: &SourceRow,
    subtopic_code: String,
    course_id: Bson,
    migrated_at: DateTime,
) -> SubtopicDocument {
    SubtopicDocument {
        subtopic_code,
        course_id,
        subtopic_name: row.text("SUBTOPIC_NAME"),
        description: row.text("DESCRIPTION"),
        sequence: row.int("SEQUENCE"),
        status: row.text("STATUS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}

/// Transforms a concept row with its resolved subtopic reference
pub fn concept_document(
    row: &SourceRow,
    concept_code: String,
    subtopic_id: Bson,
    migrated_at: DateTime,
) -> ConceptDocument {
    ConceptDocument {
        concept_code,
        subtopic_id,
        concept_name: row.text("CONCEPT_NAME"),
        description: row.text("DESCRIPTION"),
        sequence: row.int("SEQUENCE"),
        status: row.text("STATUS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}

/// Transforms a sub-concept row with its resolved concept reference
pub fn sub_concept_document(
    row: &SourceRow,
    sub_concept_code: String,
    concept_id: Bson,
    migrated_at: DateTime,
) -> SubConceptDocument {
    SubConceptDocument {
        sub_concept_code,
        concept_id,
        sub_concept_name: row.text("SUB_CONCEPT_NAME"),
        description: row.text("DESCRIPTION"),
        sequence: row.int("SEQUENCE"),
        status: row.text("STATUS"),
        deleted_at: deleted_at(row, migrated_at),
        created_at: bson_datetime(row, "CREATED_ON"),
        last_modified: bson_datetime(row, "LAST_MODIFIED"),
    }
}
