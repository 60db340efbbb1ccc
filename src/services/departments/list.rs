use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::ApiResponse;
use crate::services::common::storage_error;

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_departments().await {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            departments,
            "Departments retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list departments", e)),
    }
}
