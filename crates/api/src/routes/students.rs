//! Student roster routes.
//!
//! List and detail reads go through the shared response cache; every
//! mutation invalidates the whole `students:` key group, so a stale roster
//! page can never outlive a write.

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    CreateStudentRequest, StudentDetail, StudentListQuery, StudentListResponse, StudentSummary,
    UpdateStudentRequest,
};
use persistence::repositories::StudentRepository;
use shared::pagination::PageInfo;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Json, Query, StaffAuth};
use crate::middleware::metrics::{record_cache_hit, record_cache_miss};

/// List students with optional search and section filters.
///
/// GET /api/v1/students
#[axum::debug_handler]
pub async fn list_students(
    State(state): State<AppState>,
    _staff: StaffAuth,
    RawQuery(raw_query): RawQuery,
    Query(query): Query<StudentListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query.validate()?;

    // The raw query string keys the cache, so every distinct combination of
    // filters and pagination gets its own entry.
    let cache_key = format!("students:list:?{}", raw_query.unwrap_or_default());
    if let Some(cached) = state.cache.get(&cache_key) {
        record_cache_hit("students_list");
        return Ok(Json(cached));
    }
    record_cache_miss("students_list");

    let params = query.page_params();
    let repo = StudentRepository::new(state.pool.clone());

    let total_items = repo
        .count_students(query.search.as_deref(), query.section_id)
        .await?;
    let students: Vec<StudentSummary> = repo
        .list_students(
            query.search.as_deref(),
            query.section_id,
            params.limit(),
            params.offset(),
        )
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let response = StudentListResponse {
        students,
        pagination: PageInfo::new(&params, total_items),
    };
    let body = serde_json::to_value(&response)
        .map_err(|e| ApiError::Internal(format!("Response serialization failed: {}", e)))?;
    state.cache.set(cache_key, body.clone());

    Ok(Json(body))
}

/// Fetch one student with resolved section and teacher references.
///
/// GET /api/v1/students/:id
#[axum::debug_handler]
pub async fn get_student(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let cache_key = format!("students:detail:{}", id);
    if let Some(cached) = state.cache.get(&cache_key) {
        record_cache_hit("students_detail");
        return Ok(Json(cached));
    }
    record_cache_miss("students_detail");

    let repo = StudentRepository::new(state.pool.clone());
    let entity = repo
        .find_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let detail = StudentDetail::from(entity);
    let body = serde_json::to_value(&detail)
        .map_err(|e| ApiError::Internal(format!("Response serialization failed: {}", e)))?;
    state.cache.set(cache_key, body.clone());

    Ok(Json(body))
}

/// Enrol a new student.
///
/// POST /api/v1/students
#[axum::debug_handler]
pub async fn create_student(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Json(request): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let id = repo.create_student(&request).await?;
    let entity = repo
        .find_detail(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Student not found after insert".to_string()))?;

    state.cache.invalidate_prefix("students:");

    Ok((StatusCode::CREATED, Json(StudentDetail::from(entity))))
}

/// Update a student. Absent fields are left unchanged.
///
/// PUT /api/v1/students/:id
#[axum::debug_handler]
pub async fn update_student(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.is_empty() {
        return Err(ApiError::Validation("No fields to update".to_string()));
    }
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let updated = repo.update_student(id, &request).await?;
    if !updated {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }
    let entity = repo
        .find_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    state.cache.invalidate_prefix("students:");

    Ok(Json(StudentDetail::from(entity)))
}

/// Remove a student from the roster.
///
/// DELETE /api/v1/students/:id
#[axum::debug_handler]
pub async fn delete_student(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let deleted = repo.delete_student(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    state.cache.invalidate_prefix("students:");

    Ok(StatusCode::NO_CONTENT)
}
