use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::services::common::{normalize_text, storage_error};
use crate::services::hierarchy::{require_student, require_student_enrolled, require_subject};

pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    mut req: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let student = match require_student(&storage, req.student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };
    let subject = match require_subject(&storage, req.subject_id).await {
        Ok(subject) => subject,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = require_student_enrolled(&student, &subject) {
        return Ok(resp);
    }

    req.remark = normalize_text(req.remark);

    match storage.record_attendance(req).await {
        Ok(record) => {
            info!(
                "Attendance of student {} for subject {} on {} recorded as {}",
                record.student_id, record.subject_id, record.date, record.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                record,
                "Attendance recorded successfully",
            )))
        }
        Err(e) => Ok(storage_error("record attendance", e)),
    }
}
