//! Student roster request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::pagination::{PageInfo, PageParams};

/// Query parameters for the student list.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StudentListQuery {
    /// Case-insensitive substring match on name or email.
    #[serde(default)]
    #[validate(length(max = 100, message = "search must be 100 characters or fewer"))]
    pub search: Option<String>,

    /// Restrict to one section.
    #[serde(default)]
    pub section_id: Option<Uuid>,

    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub limit: Option<i64>,
}

impl StudentListQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// One row in the student list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub section_name: Option<String>,
}

/// Paginated student list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListResponse {
    pub students: Vec<StudentSummary>,
    pub pagination: PageInfo,
}

/// A referenced roster entity, shown by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    pub id: Uuid,
    pub name: String,
}

/// Full student view with resolved references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub section: Option<NamedRef>,
    pub assigned_teacher: Option<NamedRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to enrol a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub section_id: Option<Uuid>,

    pub assigned_teacher_id: Option<Uuid>,
}

/// Request to update a student. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub section_id: Option<Uuid>,

    pub assigned_teacher_id: Option<Uuid>,
}

impl UpdateStudentRequest {
    /// True when the request carries nothing to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.section_id.is_none()
            && self.assigned_teacher_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_request_validation() {
        let req = CreateStudentRequest {
            name: "Arjun Verma".to_string(),
            email: "arjun@school.test".to_string(),
            section_id: None,
            assigned_teacher_id: None,
        };
        assert!(req.validate().is_ok());

        let mut blank = req.clone();
        blank.name = "   ".to_string();
        assert!(blank.validate().is_err());

        let mut bad_email = req;
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_create_student_request_generated_identities() {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;
        use fake::Fake;

        for _ in 0..20 {
            let req = CreateStudentRequest {
                name: Name().fake(),
                email: SafeEmail().fake(),
                section_id: None,
                assigned_teacher_id: None,
            };
            assert!(req.validate().is_ok());
        }
    }

    #[test]
    fn test_update_student_request_empty() {
        assert!(UpdateStudentRequest::default().is_empty());

        let req = UpdateStudentRequest {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(!req.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_student_request_validates_present_fields() {
        let req = UpdateStudentRequest {
            email: Some("broken@".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_list_query_page_params() {
        let query = StudentListQuery {
            page: Some(3),
            limit: Some(10),
            ..Default::default()
        };
        let params = query.page_params();
        assert_eq!(params.page(), 3);
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_student_list_serializes_camel_case() {
        let response = StudentListResponse {
            students: vec![StudentSummary {
                id: Uuid::new_v4(),
                name: "Sana".to_string(),
                email: "sana@school.test".to_string(),
                section_name: Some("8-A".to_string()),
            }],
            pagination: PageInfo {
                page: 1,
                total_pages: 1,
                total_items: 1,
            },
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["students"][0]["sectionName"], "8-A");
        assert_eq!(json["pagination"]["totalItems"], 1);
    }
}
