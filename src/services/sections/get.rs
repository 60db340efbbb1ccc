use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn get_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            section,
            "Section retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SectionNotFound, "Section not found")),
        Err(e) => Ok(storage_error("get section", e)),
    }
}
