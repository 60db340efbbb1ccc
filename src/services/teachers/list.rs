use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::ApiResponse;
use crate::models::teachers::requests::TeacherListQuery;
use crate::services::common::storage_error;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_teachers(query).await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            teachers,
            "Teachers retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list teachers", e)),
    }
}
