use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectAssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn delete_subject_assignment(
    service: &SubjectAssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_subject_assignment(assignment_id).await {
        Ok(true) => {
            info!("Subject assignment {} deleted", assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Subject assignment deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::SubjectAssignmentNotFound,
            "Subject assignment not found",
        )),
        Err(e) => Ok(storage_error("delete subject assignment", e)),
    }
}
