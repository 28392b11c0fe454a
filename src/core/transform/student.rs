//! Student transformer
//!
//! Re-shapes the wide student-enrollment row into the nested target
//! document. The five numbered installment column groups become one
//! bounded array; every other sub-object is a straight field regrouping
//! with the shared normalization rules.

use super::{bson_datetime, yes_no};
use crate::domain::{
    AcademicDetails, Address, FeeDetails, Guardian, Installment, Meta, ParentDetails,
    PersonalDetails, RegistrationDetails, SchoolDetails, SourceRow, StatusDetails, StudentDocument,
};
use mongodb::bson::Bson;

/// Number of installment slots in the source schema
pub const INSTALLMENT_SLOTS: usize = 5;

/// Transforms a student row
///
/// The two course references are the already resolved surrogate ids; an
/// unresolved reference arrives as `None` and stays absent in the
/// document. The row itself is still written in that case, unlike the
/// taxonomy passes.
pub fn student_document(
    row: &SourceRow,
    course_id: Option<Bson>,
    admission_course_id: Option<Bson>,
) -> StudentDocument {
    StudentDocument {
        student_id: row.int("STUDENT_ID"),
        personal_details: personal_details(row),
        academic_details: AcademicDetails {
            course_id,
            admission_course_id,
            center_id: row.int("CENTER_ID"),
            batch_id: row.int("BATCH_ID"),
            group_id: row.int("GROUP_ID"),
            batch_allocation_date: bson_datetime(row, "BATCH_ALLOCATION_DATE"),
            registration_number: row.string_like("REGISTRATION_NUMBER"),
            roll_number: row.string_like("ROLL_NUMBER"),
        },
        school_details: SchoolDetails {
            school_name: row.text("SCHOOL_NAME"),
            school_address: row.text("SCHOOL_ADDRESS"),
            medium_of_study: row.text("MEDIUM_OF_STUDY"),
            education_board_name: row.text("EDUCATION_BOARD_NAME"),
            prefer_of_11std_board: row.text("PREFER_OF_11STD_BOARD"),
        },
        fees_details: FeeDetails {
            total_fees_after_scholarship: row.float("TOTAL_FEES_AFTER_SCHOLARSHIP"),
            scholarship_discount_id: row.int("SCHOLARSHIP_DISCOUNT_ID"),
            installments: installments(row),
            total_amount_paid: row.float("TOTAL_AMOUNT_PAID"),
            total_amount_balance: row.float("TOTAL_AMOUNT_BALANCE"),
        },
        parent_details: ParentDetails {
            father: guardian(row, "FATHER_PARENT"),
            mother: guardian(row, "MOTHER"),
            parents_total_annual_income: row.float("PARENTS_TOTAL_ANNUAL_INCOME"),
        },
        registration_details: RegistrationDetails {
            registration_date: bson_datetime(row, "STUDENT_REGISTRATION_DATE"),
            approval_status: row.text("APPROVAL_STATUS"),
            approval_date: bson_datetime(row, "APPROVAL_DATE"),
            approved_by: row.string_like("APPROVED_BY"),
        },
        status_details: StatusDetails {
            is_activated: yes_no(row, "IS_ACTIVATED"),
            is_suspended: yes_no(row, "IS_SUSPENDED"),
            suspended_on: bson_datetime(row, "SUSPENDED_ON"),
            status: row.text("STATUS"),
        },
        meta: Meta {
            created_on: bson_datetime(row, "CREATED_ON"),
            last_modified: bson_datetime(row, "LAST_MODIFIED"),
            is_deleted: row.text("IS_DELETED").map(|f| f == "YES").unwrap_or(false),
        },
    }
}

fn personal_details(row: &SourceRow) -> PersonalDetails {
    PersonalDetails {
        first_name: row.text("FIRST_NAME"),
        middle_name: row.text("MIDDLE_NAME"),
        last_name: row.text("LAST_NAME"),
        dob: bson_datetime(row, "DOB"),
        gender_id: row.int("GENDER_ID"),
        contact: row.string_like("CONTACT"),
        email: row.text("EMAIL"),
        address: Address {
            street: row.text("ADDRESS"),
            landmark: row.text("LANDMARK"),
            city: row.text("CITY"),
            district: row.text("DISTRICT"),
            state: row.text("STATE"),
            pincode: row.string_like("PINCODE"),
        },
        aadhar_no: row.string_like("AADHAR_NO"),
    }
}

/// Reads one guardian's column group by prefix
fn guardian(row: &SourceRow, prefix: &str) -> Guardian {
    Guardian {
        first_name: row.text(&format!("{prefix}_FIRST_NAME")),
        middle_name: row.text(&format!("{prefix}_MIDDLE_NAME")),
        last_name: row.text(&format!("{prefix}_LAST_NAME")),
        contact: row.string_like(&format!("{prefix}_CONTACT")),
        email: row.text(&format!("{prefix}_EMAIL")),
        age: row.int(&format!("{prefix}_AGE")),
        occupation: row.text(&format!("{prefix}_OCCUPATION")),
    }
}

/// Builds the fixed five-slot installment array
///
/// Slot order 1..5 is preserved. A slot whose columns are missing or NULL
/// still occupies its position with all fields absent; the array never
/// shrinks.
fn installments(row: &SourceRow) -> Vec<Installment> {
    (1..=INSTALLMENT_SLOTS)
        .map(|slot| Installment {
            amount: row.float(&format!("INSTALLMENT_{slot}_AMOUNT")),
            paid_status: yes_no(row, &format!("INSTALLMENT_{slot}_AMOUNT_PAID_STATUS")),
            paid_date: bson_datetime(row, &format!("INSTALLMENT_{slot}_AMOUNT_PAID_DATE")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceValue;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::oid::ObjectId;

    fn student_row() -> SourceRow {
        let mut row = SourceRow::new();
        row.set("STUDENT_ID", SourceValue::Int(1001));
        row.set("FIRST_NAME", SourceValue::Text("Asha".to_string()));
        row.set("LAST_NAME", SourceValue::Text("Patil".to_string()));
        row.set(
            "DOB",
            SourceValue::DateTime(Utc.with_ymd_and_hms(2006, 4, 12, 0, 0, 0).unwrap()),
        );
        row.set("CONTACT", SourceValue::Int(9876543210));
        row.set("CITY", SourceValue::Text("Nagpur".to_string()));
        row.set("COURSE_ID", SourceValue::Int(7));
        row.set("TOTAL_FEES_AFTER_SCHOLARSHIP", SourceValue::Float(45000.0));
        row.set("INSTALLMENT_1_AMOUNT", SourceValue::Float(15000.0));
        row.set(
            "INSTALLMENT_1_AMOUNT_PAID_STATUS",
            SourceValue::Text("YES".to_string()),
        );
        row.set(
            "INSTALLMENT_1_AMOUNT_PAID_DATE",
            SourceValue::DateTime(Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap()),
        );
        row.set("INSTALLMENT_2_AMOUNT", SourceValue::Float(15000.0));
        row.set(
            "INSTALLMENT_2_AMOUNT_PAID_STATUS",
            SourceValue::Text("NO".to_string()),
        );
        row.set(
            "FATHER_PARENT_FIRST_NAME",
            SourceValue::Text("Ravi".to_string()),
        );
        row.set("MOTHER_FIRST_NAME", SourceValue::Text("Meera".to_string()));
        row.set("IS_ACTIVATED", SourceValue::Text("YES".to_string()));
        row.set("IS_SUSPENDED", SourceValue::Text("NO".to_string()));
        row.set("IS_DELETED", SourceValue::Text("NO".to_string()));
        row
    }

    #[test]
    fn test_installments_always_five_in_slot_order() {
        let doc = student_document(&student_row(), None, None);
        let installments = &doc.fees_details.installments;

        assert_eq!(installments.len(), 5);
        assert_eq!(installments[0].amount, Some(15000.0));
        assert_eq!(installments[0].paid_status, Some(true));
        assert!(installments[0].paid_date.is_some());
        assert_eq!(installments[1].paid_status, Some(false));
        // slots 3..5 had no source data and are present with absent fields
        for slot in &installments[2..] {
            assert_eq!(slot, &Installment::default());
        }
    }

    #[test]
    fn test_unresolved_course_reference_stays_absent() {
        let doc = student_document(&student_row(), None, None);
        assert!(doc.academic_details.course_id.is_none());
        assert!(doc.academic_details.admission_course_id.is_none());
        // the natural key is never carried into the reference fields
        let bson_doc = mongodb::bson::to_document(&doc).unwrap();
        let academic = bson_doc.get_document("academic_details").unwrap();
        assert!(!academic.contains_key("course_id"));
    }

    #[test]
    fn test_resolved_course_references_are_kept() {
        let id = Bson::ObjectId(ObjectId::new());
        let doc = student_document(&student_row(), Some(id.clone()), Some(id.clone()));
        assert_eq!(doc.academic_details.course_id, Some(id.clone()));
        assert_eq!(doc.academic_details.admission_course_id, Some(id));
    }

    #[test]
    fn test_numeric_contact_renders_as_string() {
        let doc = student_document(&student_row(), None, None);
        assert_eq!(
            doc.personal_details.contact,
            Some("9876543210".to_string())
        );
    }

    #[test]
    fn test_guardians_read_their_column_groups() {
        let doc = student_document(&student_row(), None, None);
        assert_eq!(
            doc.parent_details.father.first_name,
            Some("Ravi".to_string())
        );
        assert_eq!(
            doc.parent_details.mother.first_name,
            Some("Meera".to_string())
        );
        assert!(doc.parent_details.father.occupation.is_none());
    }

    #[test]
    fn test_status_flags_become_booleans() {
        let doc = student_document(&student_row(), None, None);
        assert_eq!(doc.status_details.is_activated, Some(true));
        assert_eq!(doc.status_details.is_suspended, Some(false));
        assert!(!doc.meta.is_deleted);
    }

    #[test]
    fn test_empty_row_produces_document_without_errors() {
        let doc = student_document(&SourceRow::new(), None, None);
        assert!(doc.student_id.is_none());
        assert_eq!(doc.fees_details.installments.len(), 5);
        assert!(!doc.meta.is_deleted);
    }
}
