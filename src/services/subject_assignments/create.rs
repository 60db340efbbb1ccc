use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectAssignmentService;
use crate::models::ApiResponse;
use crate::models::subject_assignments::requests::CreateSubjectAssignmentRequest;
use crate::services::common::{normalize_text, storage_error};
use crate::services::hierarchy::{
    require_section_in_hierarchy, require_subject, require_teacher_in_department,
};

pub async fn create_subject_assignment(
    service: &SubjectAssignmentService,
    request: &HttpRequest,
    mut req: CreateSubjectAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let subject = match require_subject(&storage, req.subject_id).await {
        Ok(subject) => subject,
        Err(resp) => return Ok(resp),
    };

    // 排课班级必须与科目同院系同年级
    if let Err(resp) = require_section_in_hierarchy(
        &storage,
        req.section_id,
        subject.department_id,
        subject.year_level_id,
    )
    .await
    {
        return Ok(resp);
    }

    if let Some(teacher_id) = req.teacher_id
        && let Err(resp) =
            require_teacher_in_department(&storage, teacher_id, subject.department_id).await
    {
        return Ok(resp);
    }

    req.day = normalize_text(req.day);
    req.time = normalize_text(req.time);
    req.room = normalize_text(req.room);
    req.remark = normalize_text(req.remark);

    match storage.create_subject_assignment(req).await {
        Ok(assignment) => {
            info!(
                "Subject assignment {} created for subject {} in section {}",
                assignment.id, assignment.subject_id, assignment.section_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Subject assignment created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create subject assignment", e)),
    }
}
