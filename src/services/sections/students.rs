use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::students::requests::StudentListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn list_section_students(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 与列表过滤不同，这里班级必须存在
    match storage.get_section_by_id(section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::SectionNotFound, "Section not found")),
        Err(e) => return Ok(storage_error("list section students", e)),
    }

    let query = StudentListQuery {
        section_id: Some(section_id),
        ..Default::default()
    };

    match storage.list_students(query).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            students,
            "Section students retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list section students", e)),
    }
}
