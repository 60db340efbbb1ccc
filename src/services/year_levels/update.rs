use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{YearLevelService, validate_level};
use crate::models::sections::requests::SectionListQuery;
use crate::models::students::requests::StudentListQuery;
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::year_levels::requests::UpdateYearLevelRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_error, validation_error};
use crate::services::hierarchy::require_department;
use crate::storage::Storage;
use crate::utils::validate::validate_name;

pub async fn update_year_level(
    service: &YearLevelService,
    request: &HttpRequest,
    year_level_id: i64,
    mut update: UpdateYearLevelRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update.name.as_mut() {
        *name = name.trim().to_string();
        if let Err(msg) = validate_name("name", name) {
            return Ok(validation_error(ErrorCode::ValidationFailed, msg));
        }
    }
    if let Some(level) = update.level
        && let Err(msg) = validate_level(level)
    {
        return Ok(validation_error(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    let existing = match storage.get_year_level_by_id(year_level_id).await {
        Ok(Some(year_level)) => year_level,
        Ok(None) => {
            return Ok(not_found(ErrorCode::YearLevelNotFound, "Year level not found"));
        }
        Err(e) => return Ok(storage_error("update year level", e)),
    };

    // 更换院系时，年级下不能还挂着班级、科目或学生
    if let Some(department_id) = update.department_id
        && department_id != existing.department_id
    {
        if let Err(resp) = require_department(&storage, department_id).await {
            return Ok(resp);
        }
        if let Err(resp) = ensure_year_level_unused(&storage, year_level_id).await {
            return Ok(resp);
        }
    }

    match storage.update_year_level(year_level_id, update).await {
        Ok(Some(year_level)) => {
            info!("Year level {} updated", year_level.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                year_level,
                "Year level updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::YearLevelNotFound, "Year level not found")),
        Err(e) => Ok(storage_error("update year level", e)),
    }
}

async fn ensure_year_level_unused(
    storage: &Arc<dyn Storage>,
    year_level_id: i64,
) -> Result<(), HttpResponse> {
    let sections = storage
        .list_sections(SectionListQuery {
            year_level_id: Some(year_level_id),
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("update year level", e))?;

    let subjects = storage
        .list_subjects(SubjectListQuery {
            year_level_id: Some(year_level_id),
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("update year level", e))?;

    let students = storage
        .list_students(StudentListQuery {
            year_level_id: Some(year_level_id),
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("update year level", e))?;

    if sections.is_empty() && subjects.is_empty() && students.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            ErrorCode::YearLevelDepartmentMismatch,
            "Cannot move a year level that still has sections, subjects or students",
        ))
    }
}
