use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::errors::TrackedError;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::common::{storage_error, validation_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    user_data.username = user_data.username.trim().to_string();
    user_data.email = user_data.email.trim().to_lowercase();

    // 验证用户名
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(validation_error(ErrorCode::UserNameInvalid, msg));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(validation_error(ErrorCode::UserEmailInvalid, msg));
    }

    // 验证密码强度
    if let Err(msg) = validate_password(&user_data.password) {
        return Ok(validation_error(ErrorCode::UserPasswordInvalid, msg));
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    "Failed to create user",
                )),
            );
        }
    };

    let storage = service.get_storage(request)?;

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created with role {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                user,
                "User created successfully",
            )))
        }
        Err(TrackedError::Conflict(_)) => Ok(validation_error(
            ErrorCode::UserAlreadyExists,
            "Username or email already exists",
        )),
        Err(e) => Ok(storage_error("create user", e)),
    }
}
