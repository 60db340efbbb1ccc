//! 服务层共用的响应构造

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::errors::TrackedError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            actix_web::error::ErrorInternalServerError("Storage not found in app data")
        })
}

/// 422，请求内容不合法
pub(crate) fn validation_error(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(code, message))
}

/// 404，路径中的资源不存在
pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 403
pub(crate) fn forbidden(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(code, message))
}

/// 存储层错误转换为 HTTP 响应
///
/// 唯一约束冲突按校验失败处理，未预期的错误只返回 "Failed to <action>"。
pub(crate) fn storage_error(action: &str, err: TrackedError) -> HttpResponse {
    match err {
        TrackedError::Conflict(msg) => {
            info!("Rejected duplicate value while trying to {}: {}", action, msg);
            validation_error(
                ErrorCode::ValidationFailed,
                "A record with the same unique value already exists",
            )
        }
        TrackedError::Validation(msg) => validation_error(ErrorCode::ValidationFailed, msg),
        TrackedError::NotFound(msg) => not_found(ErrorCode::NotFound, msg),
        TrackedError::Authorization(msg) => forbidden(ErrorCode::Forbidden, msg),
        TrackedError::Authentication(msg) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg)),
        other => {
            error!("Failed to {}: {}", action, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to {action}"),
            ))
        }
    }
}

/// 可选文本字段：去除首尾空白，空串视为未填写
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 可清空的文本字段（外层 None 表示不修改）
pub(crate) fn normalize_text_patch(value: Option<Option<String>>) -> Option<Option<String>> {
    value.map(normalize_text)
}
