use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::subject_assignments::requests::SubjectAssignmentListQuery;
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error, validation_error};
use crate::services::hierarchy::{require_department, require_user};
use crate::utils::validate::{validate_email, validate_name};

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    mut update: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Some(first_name) = update.first_name.as_mut() {
        *first_name = first_name.trim().to_string();
        if let Err(msg) = validate_name("first_name", first_name) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }
    if let Some(last_name) = update.last_name.as_mut() {
        *last_name = last_name.trim().to_string();
        if let Err(msg) = validate_name("last_name", last_name) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }
    if let Some(email) = update.email.as_mut() {
        *email = email.trim().to_lowercase();
        if let Err(msg) = validate_email(email) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }

    let storage = service.get_storage(request)?;

    let existing = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => return Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => return Ok(storage_error("update teacher", e)),
    };

    if let Some(email) = update.email.as_deref() {
        match storage.get_teacher_by_email(email).await {
            Ok(Some(other)) if other.id != teacher_id => {
                return Ok(validation_error(
                    ErrorCode::TeacherEmailAlreadyExists,
                    "Teacher email already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_error("update teacher", e)),
        }
    }

    if let Some(Some(user_id)) = update.user_id
        && let Err(resp) = require_user(&storage, user_id).await
    {
        return Ok(resp);
    }

    // 仍在任教科目或排课中的教师不能调离院系
    if let Some(department_id) = update.department_id
        && department_id != existing.department_id
    {
        if let Err(resp) = require_department(&storage, department_id).await {
            return Ok(resp);
        }

        let subjects = match storage
            .list_subjects(SubjectListQuery {
                teacher_id: Some(teacher_id),
                ..Default::default()
            })
            .await
        {
            Ok(subjects) => subjects,
            Err(e) => return Ok(storage_error("update teacher", e)),
        };

        let assignments = match storage
            .list_subject_assignments(SubjectAssignmentListQuery {
                teacher_id: Some(teacher_id),
                ..Default::default()
            })
            .await
        {
            Ok(assignments) => assignments,
            Err(e) => return Ok(storage_error("update teacher", e)),
        };

        if !subjects.is_empty() || !assignments.is_empty() {
            return Ok(validation_error(
                ErrorCode::TeacherDepartmentMismatch,
                "Cannot move a teacher who is still assigned to subjects or schedules",
            ));
        }
    }

    match storage.update_teacher(teacher_id, update).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                teacher,
                "Teacher updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(storage_error("update teacher", e)),
    }
}
