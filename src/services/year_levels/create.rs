use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{YearLevelService, validate_level};
use crate::models::year_levels::requests::CreateYearLevelRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_error, validation_error};
use crate::services::hierarchy::require_department;
use crate::utils::validate::validate_name;

pub async fn create_year_level(
    service: &YearLevelService,
    request: &HttpRequest,
    mut req: CreateYearLevelRequest,
) -> ActixResult<HttpResponse> {
    req.name = req.name.trim().to_string();

    if let Err(msg) = validate_name("name", &req.name) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_level(req.level) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    if let Err(resp) = require_department(&storage, req.department_id).await {
        return Ok(resp);
    }

    match storage.create_year_level(req).await {
        Ok(year_level) => {
            info!(
                "Year level {} created in department {}",
                year_level.id, year_level.department_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                year_level,
                "Year level created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create year level", e)),
    }
}
