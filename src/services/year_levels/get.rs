use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::YearLevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn get_year_level(
    service: &YearLevelService,
    request: &HttpRequest,
    year_level_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_year_level_by_id(year_level_id).await {
        Ok(Some(year_level)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            year_level,
            "Year level retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::YearLevelNotFound, "Year level not found")),
        Err(e) => Ok(storage_error("get year level", e)),
    }
}
