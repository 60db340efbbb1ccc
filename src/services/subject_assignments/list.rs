use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectAssignmentService;
use crate::models::ApiResponse;
use crate::models::subject_assignments::requests::SubjectAssignmentListQuery;
use crate::services::common::storage_error;

pub async fn list_subject_assignments(
    service: &SubjectAssignmentService,
    request: &HttpRequest,
    query: SubjectAssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_subject_assignments(query).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignments,
            "Subject assignments retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list subject assignments", e)),
    }
}
