use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_error, validation_error};
use crate::services::hierarchy::{
    require_section_in_hierarchy, require_user, require_year_level_in_department,
};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut req: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    req.first_name = req.first_name.trim().to_string();
    req.last_name = req.last_name.trim().to_string();
    req.email = req.email.trim().to_lowercase();

    if let Err(msg) = validate_name("first_name", &req.first_name)
        .and_then(|_| validate_name("last_name", &req.last_name))
    {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    if let Err(resp) =
        require_year_level_in_department(&storage, req.department_id, req.year_level_id).await
    {
        return Ok(resp);
    }

    if let Some(section_id) = req.section_id
        && let Err(resp) = require_section_in_hierarchy(
            &storage,
            section_id,
            req.department_id,
            req.year_level_id,
        )
        .await
    {
        return Ok(resp);
    }

    if let Some(user_id) = req.user_id
        && let Err(resp) = require_user(&storage, user_id).await
    {
        return Ok(resp);
    }

    match storage.get_student_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(validation_error(
                ErrorCode::StudentEmailAlreadyExists,
                "Student email already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error("create student", e)),
    }

    match storage.create_student(req).await {
        Ok(student) => {
            info!("Student {} created", student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create student", e)),
    }
}
