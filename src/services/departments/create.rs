use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_error, validation_error};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_department(
    service: &DepartmentService,
    request: &HttpRequest,
    mut req: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    req.name = req.name.trim().to_string();
    req.code = req.code.trim().to_string();

    if let Err(msg) = validate_name("name", &req.name) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_code(&req.code) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    // 代码唯一
    match storage.get_department_by_code(&req.code).await {
        Ok(Some(_)) => {
            return Ok(validation_error(
                ErrorCode::DepartmentCodeAlreadyExists,
                format!("Department code '{}' already exists", req.code),
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error("create department", e)),
    }

    match storage.create_department(req).await {
        Ok(department) => {
            info!("Department {} ({}) created", department.code, department.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                department,
                "Department created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create department", e)),
    }
}
