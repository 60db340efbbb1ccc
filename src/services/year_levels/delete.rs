use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::YearLevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn delete_year_level(
    service: &YearLevelService,
    request: &HttpRequest,
    year_level_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_year_level(year_level_id).await {
        Ok(true) => {
            info!("Year level {} deleted", year_level_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Year level deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::YearLevelNotFound, "Year level not found")),
        Err(e) => Ok(storage_error("delete year level", e)),
    }
}
