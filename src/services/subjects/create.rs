use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubjectService, validate_units};
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{normalize_text, storage_error, validation_error};
use crate::services::hierarchy::{
    require_section_in_hierarchy, require_teacher_in_department, require_year_level_in_department,
};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    mut req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    req.code = req.code.trim().to_string();
    req.title = req.title.trim().to_string();
    req.curriculum_year = normalize_text(req.curriculum_year);
    req.day = normalize_text(req.day);
    req.time = normalize_text(req.time);
    req.room = normalize_text(req.room);

    if let Err(msg) = validate_code(&req.code) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_name("title", &req.title) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_units(req.units) {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    if let Err(resp) =
        require_year_level_in_department(&storage, req.department_id, req.year_level_id).await
    {
        return Ok(resp);
    }

    if let Some(section_id) = req.section_id
        && let Err(resp) = require_section_in_hierarchy(
            &storage,
            section_id,
            req.department_id,
            req.year_level_id,
        )
        .await
    {
        return Ok(resp);
    }

    if let Some(teacher_id) = req.teacher_id
        && let Err(resp) =
            require_teacher_in_department(&storage, teacher_id, req.department_id).await
    {
        return Ok(resp);
    }

    // 科目代码全局唯一
    match storage.get_subject_by_code(&req.code).await {
        Ok(Some(_)) => {
            return Ok(validation_error(
                ErrorCode::SubjectCodeAlreadyExists,
                format!("Subject code '{}' already exists", req.code),
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error("create subject", e)),
    }

    match storage.create_subject(req).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.code, subject.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                subject,
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(storage_error("create subject", e)),
    }
}
