use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::ApiResponse;
use crate::models::subjects::requests::SubjectListQuery;
use crate::services::common::storage_error;

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_subjects(query).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Subjects retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list subjects", e)),
    }
}
