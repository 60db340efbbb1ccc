use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::ApiResponse;
use crate::models::grades::requests::GradeListQuery;
use crate::services::common::storage_error;

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    query: GradeListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_grades(query).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grades,
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list grades", e)),
    }
}
