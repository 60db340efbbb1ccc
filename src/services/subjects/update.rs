use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubjectService, validate_units};
use crate::models::subject_assignments::requests::SubjectAssignmentListQuery;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, normalize_text_patch, storage_error, validation_error};
use crate::services::hierarchy::{
    require_section_in_hierarchy, require_teacher_in_department, require_year_level_in_department,
};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    mut update: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = update.title.as_mut() {
        *title = title.trim().to_string();
        if let Err(msg) = validate_name("title", title) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }
    if let Some(units) = update.units
        && let Err(msg) = validate_units(units)
    {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    update.curriculum_year = normalize_text_patch(update.curriculum_year);
    update.day = normalize_text_patch(update.day);
    update.time = normalize_text_patch(update.time);
    update.room = normalize_text_patch(update.room);

    let storage = service.get_storage(request)?;

    let existing = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => return Ok(storage_error("update subject", e)),
    };

    if let Some(code) = update.code.as_mut() {
        *code = code.trim().to_string();
        if let Err(msg) = validate_code(code) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }

        match storage.get_subject_by_code(code).await {
            Ok(Some(other)) if other.id != subject_id => {
                return Ok(validation_error(
                    ErrorCode::SubjectCodeAlreadyExists,
                    format!("Subject code '{code}' already exists"),
                ));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_error("update subject", e)),
        }
    }

    // 以更新后的值重新校验层级
    let department_id = update.department_id.unwrap_or(existing.department_id);
    let year_level_id = update.year_level_id.unwrap_or(existing.year_level_id);
    let section_id = update.section_id.unwrap_or(existing.section_id);
    let teacher_id = update.teacher_id.unwrap_or(existing.teacher_id);

    let hierarchy_changed =
        department_id != existing.department_id || year_level_id != existing.year_level_id;

    if hierarchy_changed {
        if let Err(resp) =
            require_year_level_in_department(&storage, department_id, year_level_id).await
        {
            return Ok(resp);
        }

        // 已排课的科目不能移动到其他层级
        let assignments = match storage
            .list_subject_assignments(SubjectAssignmentListQuery {
                subject_id: Some(subject_id),
                ..Default::default()
            })
            .await
        {
            Ok(assignments) => assignments,
            Err(e) => return Ok(storage_error("update subject", e)),
        };
        if !assignments.is_empty() {
            return Ok(validation_error(
                ErrorCode::SectionHierarchyMismatch,
                "Cannot move a subject that still has section assignments",
            ));
        }
    }

    if let Some(section_id) = section_id
        && (hierarchy_changed || existing.section_id != Some(section_id))
        && let Err(resp) =
            require_section_in_hierarchy(&storage, section_id, department_id, year_level_id).await
    {
        return Ok(resp);
    }

    if let Some(teacher_id) = teacher_id
        && (department_id != existing.department_id || existing.teacher_id != Some(teacher_id))
        && let Err(resp) = require_teacher_in_department(&storage, teacher_id, department_id).await
    {
        return Ok(resp);
    }

    match storage.update_subject(subject_id, update).await {
        Ok(Some(subject)) => {
            info!("Subject {} updated", subject.code);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                subject,
                "Subject updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_error("update subject", e)),
    }
}
