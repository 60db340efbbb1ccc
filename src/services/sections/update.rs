use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SectionService;
use crate::models::sections::requests::UpdateSectionRequest;
use crate::models::students::requests::StudentListQuery;
use crate::models::subject_assignments::requests::SubjectAssignmentListQuery;
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error, validation_error};
use crate::services::hierarchy::require_year_level_in_department;
use crate::utils::validate::validate_name;

pub async fn update_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    mut update: UpdateSectionRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update.name.as_mut() {
        *name = name.trim().to_string();
        if let Err(msg) = validate_name("name", name) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }

    let storage = service.get_storage(request)?;

    let existing = match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => section,
        Ok(None) => return Ok(not_found(ErrorCode::SectionNotFound, "Section not found")),
        Err(e) => return Ok(storage_error("update section", e)),
    };

    let department_id = update.department_id.unwrap_or(existing.department_id);
    let year_level_id = update.year_level_id.unwrap_or(existing.year_level_id);

    if department_id != existing.department_id || year_level_id != existing.year_level_id {
        if let Err(resp) =
            require_year_level_in_department(&storage, department_id, year_level_id).await
        {
            return Ok(resp);
        }

        // 已有学生、科目或排课的班级不能移动到其他层级
        let students = match storage
            .list_students(StudentListQuery {
                section_id: Some(section_id),
                ..Default::default()
            })
            .await
        {
            Ok(students) => students,
            Err(e) => return Ok(storage_error("update section", e)),
        };
        let subjects = match storage
            .list_subjects(SubjectListQuery {
                section_id: Some(section_id),
                ..Default::default()
            })
            .await
        {
            Ok(subjects) => subjects,
            Err(e) => return Ok(storage_error("update section", e)),
        };

        let assignments = match storage
            .list_subject_assignments(SubjectAssignmentListQuery {
                section_id: Some(section_id),
                ..Default::default()
            })
            .await
        {
            Ok(assignments) => assignments,
            Err(e) => return Ok(storage_error("update section", e)),
        };

        if !students.is_empty() || !subjects.is_empty() || !assignments.is_empty() {
            return Ok(validation_error(
                ErrorCode::SectionHierarchyMismatch,
                "Cannot move a section that still has students, subjects or schedules",
            ));
        }
    }

    match storage.update_section(section_id, update).await {
        Ok(Some(section)) => {
            info!("Section {} updated", section.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                section,
                "Section updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SectionNotFound, "Section not found")),
        Err(e) => Ok(storage_error("update section", e)),
    }
}
