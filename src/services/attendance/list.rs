use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::models::attendance::requests::AttendanceListQuery;
use crate::services::common::storage_error;

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_attendance(query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Attendance retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list attendance", e)),
    }
}
