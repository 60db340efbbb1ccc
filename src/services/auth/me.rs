use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, auth::UserInfoResponse};
use crate::services::common::storage_error;

pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request)?;
    let profiles = match storage.get_linked_profiles(user.id).await {
        Ok(profiles) => profiles,
        Err(e) => return Ok(storage_error("load account profiles", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UserInfoResponse { user, profiles },
        "User information retrieved successfully",
    )))
}
