use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error};

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            info!("Teacher {} deleted", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Teacher deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(storage_error("delete teacher", e)),
    }
}
