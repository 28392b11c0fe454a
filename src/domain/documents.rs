//! Target document models
//!
//! Typed models of the MongoDB documents produced by the migration. Flat
//! taxonomy documents reference their parent through the surrogate id
//! assigned by MongoDB on insert; the student document nests its details
//! into sub-objects.
//!
//! Every optional field carries `skip_serializing_if` so that an absent
//! source value is omitted from the stored document entirely, never
//! serialized as an explicit null.

use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Serialize};

/// A migrated stream (top of the taxonomy, no parent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDocument {
    /// Natural key carried over from the source (STREAM_ID)
    pub stream_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,

    /// Set to migration time when the source row was soft-deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated course, child of a stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDocument {
    /// Natural key carried over from the source (COURSE_ID)
    pub course_code: String,

    /// Surrogate id of the parent stream document
    pub stream_id: Bson,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated topic, child of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDocument {
    pub topic_code: String,

    /// Surrogate id of the parent course document
    pub course_id: Bson,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated subtopic, child of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtopicDocument {
    pub subtopic_code: String,

    /// Surrogate id of the parent course document
    pub course_id: Bson,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated concept, child of a subtopic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptDocument {
    pub concept_code: String,

    /// Surrogate id of the parent subtopic document
    pub subtopic_id: Bson,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated sub-concept, child of a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubConceptDocument {
    pub sub_concept_code: String,

    /// Surrogate id of the parent concept document
    pub concept_id: Bson,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_concept_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,
}

/// A migrated student enrollment, the wide source row re-shaped into
/// nested sub-objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,

    pub personal_details: PersonalDetails,
    pub academic_details: AcademicDetails,
    pub school_details: SchoolDetails,
    pub fees_details: FeeDetails,
    pub parent_details: ParentDetails,
    pub registration_details: RegistrationDetails,
    pub status_details: StatusDetails,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_no: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

/// Academic placement of the student
///
/// The two course references are surrogate ids resolved through the course
/// id map. An unresolved reference is recorded as absent, never as the
/// original natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<Bson>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_course_id: Option<Bson>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_allocation_date: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_of_study: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_board_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_of_11std_board: Option<String>,
}

/// Fee summary with the fixed five-slot installment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fees_after_scholarship: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarship_discount_id: Option<i64>,

    /// Always exactly five entries, in source slot order 1..5
    pub installments: Vec<Installment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_paid: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_balance: Option<f64>,
}

/// One installment slot
///
/// A slot with no source data keeps its position in the array with all
/// fields absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_status: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentDetails {
    pub father: Guardian,
    pub mother: Guardian,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents_total_annual_income: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_on: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,

    pub is_deleted: bool,
}
