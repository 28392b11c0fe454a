//! Domain models and types for Trellis.
//!
//! This module contains the core domain models shared by the adapters and
//! the migration core:
//!
//! - **Source rows** ([`SourceRow`], [`SourceValue`]) - typed, tolerant
//!   views of relational rows
//! - **Target documents** ([`StreamDocument`], [`StudentDocument`], ...) -
//!   serde models of the documents written to MongoDB
//! - **Error types** ([`TrellisError`], [`SourceError`], [`TargetError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations return [`Result<T>`]; driver errors from
//! `mysql_async` and `mongodb` are mapped into the domain enums at the
//! adapter boundary and never leak past it.

pub mod documents;
pub mod errors;
pub mod result;
pub mod row;

// Re-export commonly used types for convenience
pub use documents::{
    AcademicDetails, Address, ConceptDocument, CourseDocument, FeeDetails, Guardian, Installment,
    Meta, ParentDetails, PersonalDetails, RegistrationDetails, SchoolDetails, StatusDetails,
    StreamDocument, StudentDocument, SubConceptDocument, SubtopicDocument, TopicDocument,
};
pub use errors::{SourceError, TargetError, TrellisError};
pub use result::Result;
pub use row::{SourceRow, SourceValue};
