use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::subjects::entities::Subject;
use crate::models::subjects::requests::UpdateSubjectAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{forbidden, not_found, normalize_text_patch, storage_error};
use crate::services::hierarchy::require_teacher_in_department;
use crate::storage::Storage;

pub async fn update_subject_assignment(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    mut update: UpdateSubjectAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request)?;

    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => return Ok(storage_error("update subject assignment", e)),
    };

    // 权限校验
    if let Err(resp) = check_assignment_permission(role, uid, &subject, &update, &storage).await {
        return Ok(resp);
    }

    if let Some(Some(teacher_id)) = update.teacher_id
        && subject.teacher_id != Some(teacher_id)
        && let Err(resp) =
            require_teacher_in_department(&storage, teacher_id, subject.department_id).await
    {
        return Ok(resp);
    }

    update.day = normalize_text_patch(update.day);
    update.time = normalize_text_patch(update.time);
    update.room = normalize_text_patch(update.room);

    match storage.update_subject(subject_id, update.into()).await {
        Ok(Some(subject)) => {
            info!("Subject {} assignment updated by user {}", subject.code, uid);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                subject,
                "Subject assignment updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_error("update subject assignment", e)),
    }
}

/// 权限校验辅助函数
///
/// 管理员不受限制；教师只能调整自己任教科目的时间地点，不能改派教师。
async fn check_assignment_permission(
    role: Option<UserRole>,
    uid: i64,
    subject: &Subject,
    update: &UpdateSubjectAssignmentRequest,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    match role {
        Some(UserRole::Admin) => Ok(()),
        Some(UserRole::Teacher) => {
            let teacher = match storage.get_teacher_by_user_id(uid).await {
                Ok(Some(teacher)) => teacher,
                Ok(None) => {
                    info!("User {} has no teacher profile", uid);
                    return Err(forbidden(
                        ErrorCode::SubjectPermissionDenied,
                        "You do not have a teacher profile",
                    ));
                }
                Err(e) => return Err(storage_error("update subject assignment", e)),
            };

            if subject.teacher_id != Some(teacher.id) {
                info!(
                    "Teacher {} denied assignment update on subject {}",
                    teacher.id, subject.id
                );
                return Err(forbidden(
                    ErrorCode::SubjectPermissionDenied,
                    "You can only update subjects assigned to you",
                ));
            }

            if let Some(new_teacher) = update.teacher_id
                && new_teacher != Some(teacher.id)
            {
                return Err(forbidden(
                    ErrorCode::SubjectPermissionDenied,
                    "Teachers cannot reassign a subject",
                ));
            }

            Ok(())
        }
        _ => Err(forbidden(
            ErrorCode::SubjectPermissionDenied,
            "You do not have permission to update this subject",
        )),
    }
}
