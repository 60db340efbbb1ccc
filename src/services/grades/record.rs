use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::grades::requests::RecordGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{normalize_text, storage_error, validation_error};
use crate::services::hierarchy::{require_student, require_student_enrolled, require_subject};

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

pub(crate) fn score_in_range(score: f64) -> bool {
    score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

pub async fn record_grade(
    service: &GradeService,
    request: &HttpRequest,
    mut req: RecordGradeRequest,
) -> ActixResult<HttpResponse> {
    if !score_in_range(req.score) {
        return Ok(validation_error(
            ErrorCode::GradeScoreOutOfRange,
            format!("Score must be between {MIN_SCORE} and {MAX_SCORE}"),
        ));
    }

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

    match storage.record_grade(req).await {
        Ok(grade) => {
            info!(
                "Grade of student {} for subject {} ({}) recorded",
                grade.student_id, grade.subject_id, grade.period
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                grade,
                "Grade recorded successfully",
            )))
        }
        Err(e) => Ok(storage_error("record grade", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(score_in_range(0.0));
        assert!(score_in_range(100.0));
        assert!(score_in_range(87.5));
        assert!(!score_in_range(-0.5));
        assert!(!score_in_range(100.01));
        assert!(!score_in_range(f64::NAN));
        assert!(!score_in_range(f64::INFINITY));
    }
}
