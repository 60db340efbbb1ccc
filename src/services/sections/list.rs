use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::ApiResponse;
use crate::models::sections::requests::SectionListQuery;
use crate::services::common::storage_error;

pub async fn list_sections(
    service: &SectionService,
    request: &HttpRequest,
    query: SectionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_sections(query).await {
        Ok(sections) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sections,
            "Sections retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list sections", e)),
    }
}
