use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn delete_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_department(department_id).await {
        Ok(true) => {
            info!("Department {} deleted", department_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Department deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        )),
        Err(e) => Ok(storage_error("delete department", e)),
    }
}
