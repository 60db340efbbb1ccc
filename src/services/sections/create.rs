use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SectionService;
use crate::models::sections::requests::CreateSectionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_error, validation_error};
use crate::services::hierarchy::require_year_level_in_department;
use crate::utils::validate::validate_name;

pub async fn create_section(
    service: &SectionService,
    request: &HttpRequest,
    mut req: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    req.name = req.name.trim().to_string();

    if let Err(msg) = validate_name("name", &req.name) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    if let Err(resp) =
        require_year_level_in_department(&storage, req.department_id, req.year_level_id).await
    {
        return Ok(resp);
    }

    match storage.create_section(req).await {
        Ok(section) => {
            info!(
                "Section {} ({}) created under department {} / year level {}",
                section.name, section.id, section.department_id, section.year_level_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                section,
                "Section created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create section", e)),
    }
}
