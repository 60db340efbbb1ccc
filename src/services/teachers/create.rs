use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_error, validation_error};
use crate::services::hierarchy::{require_department, require_user};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    mut req: CreateTeacherRequest,
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

    if let Err(resp) = require_department(&storage, req.department_id).await {
        return Ok(resp);
    }

    if let Some(user_id) = req.user_id
        && let Err(resp) = require_user(&storage, user_id).await
    {
        return Ok(resp);
    }

    match storage.get_teacher_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(validation_error(
                ErrorCode::TeacherEmailAlreadyExists,
                "Teacher email already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error("create teacher", e)),
    }

    match storage.create_teacher(req).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                teacher,
                "Teacher created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create teacher", e)),
    }
}
