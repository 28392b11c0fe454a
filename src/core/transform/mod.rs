//! Row transformation
//!
//! Pure functions mapping one source row (plus any resolved parent
//! surrogate ids) to a target document. Shared normalization rules live
//! here; the per-entity transformers are in [`taxonomy`] and [`student`].
//!
//! Rules applied uniformly:
//! - a source value that is not a date-time normalizes to absent wherever
//!   a date is expected
//! - "YES"/"NO" string flags become booleans or a presence decision,
//!   never the original string
//! - a column missing from the row resolves to absent, never an error

pub mod student;
pub mod taxonomy;

use crate::domain::SourceRow;
use mongodb::bson::DateTime;

pub use student::student_document;
pub use taxonomy::{
    concept_document, course_document, stream_document, sub_concept_document, subtopic_document,
    topic_document,
};

/// Reads a date-time column as a BSON datetime, absent for non-dates
pub(crate) fn bson_datetime(row: &SourceRow, column: &str) -> Option<DateTime> {
    row.datetime(column).map(DateTime::from_chrono)
}

/// Translates the soft-delete flag into a materialized deletion timestamp
///
/// The source marks deletion with `IS_DELETED` = "YES"/"NO". The exact
/// deletion instant is not recorded anywhere, so a deleted row gets the
/// migration time; a live row (or a row without the flag) gets nothing.
pub(crate) fn deleted_at(row: &SourceRow, migrated_at: DateTime) -> Option<DateTime> {
    match row.text("IS_DELETED") {
        Some(flag) if flag != "NO" => Some(migrated_at),
        _ => None,
    }
}

/// Translates a "YES"/"NO" column into a boolean, absent when missing
pub(crate) fn yes_no(row: &SourceRow, column: &str) -> Option<bool> {
    row.text(column).map(|flag| flag == "YES")
}
