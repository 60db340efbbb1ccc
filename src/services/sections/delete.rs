use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn delete_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_section(section_id).await {
        Ok(true) => {
            info!("Section {} deleted", section_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Section deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::SectionNotFound, "Section not found")),
        Err(e) => Ok(storage_error("delete section", e)),
    }
}
