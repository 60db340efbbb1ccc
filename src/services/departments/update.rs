use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::models::departments::requests::UpdateDepartmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error, validation_error};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
    mut update: UpdateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update.name.as_mut() {
        *name = name.trim().to_string();
        if let Err(msg) = validate_name("name", name) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }

    let storage = service.get_storage(request)?;

    if let Some(code) = update.code.as_mut() {
        *code = code.trim().to_string();
        if let Err(msg) = validate_code(code) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }

        match storage.get_department_by_code(code).await {
            Ok(Some(other)) if other.id != department_id => {
                return Ok(validation_error(
                    ErrorCode::DepartmentCodeAlreadyExists,
                    format!("Department code '{code}' already exists"),
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_error("update department", e)),
        }
    }

    match storage.update_department(department_id, update).await {
        Ok(Some(department)) => {
            info!("Department {} updated", department.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                department,
                "Department updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        )),
        Err(e) => Ok(storage_error("update department", e)),
    }
}
