use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error, validation_error};
use crate::services::hierarchy::{
    require_section_in_hierarchy, require_user, require_year_level_in_department,
};
use crate::utils::validate::{validate_email, validate_name};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update: UpdateStudentRequest,
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

    let existing = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_error("update student", e)),
    };

    if let Some(email) = update.email.as_deref() {
        match storage.get_student_by_email(email).await {
            Ok(Some(other)) if other.id != student_id => {
                return Ok(validation_error(
                    ErrorCode::StudentEmailAlreadyExists,
                    "Student email already exists",
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_error("update student", e)),
        }
    }

    if let Some(Some(user_id)) = update.user_id
        && let Err(resp) = require_user(&storage, user_id).await
    {
        return Ok(resp);
    }

    let department_id = update.department_id.unwrap_or(existing.department_id);
    let year_level_id = update.year_level_id.unwrap_or(existing.year_level_id);
    let section_id = update.section_id.unwrap_or(existing.section_id);

    let hierarchy_changed =
        department_id != existing.department_id || year_level_id != existing.year_level_id;

    if hierarchy_changed
        && let Err(resp) =
            require_year_level_in_department(&storage, department_id, year_level_id).await
    {
        return Ok(resp);
    }

    // 分班时班级必须与学生的院系、年级一致；移出班级（null）总是允许
    if let Some(section_id) = section_id
        && (hierarchy_changed || existing.section_id != Some(section_id))
        && let Err(resp) =
            require_section_in_hierarchy(&storage, section_id, department_id, year_level_id).await
    {
        return Ok(resp);
    }

    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => {
            info!(
                "Student {} updated (section: {:?})",
                student.id, student.section_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(storage_error("update student", e)),
    }
}
