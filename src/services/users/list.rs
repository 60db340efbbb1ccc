use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::ApiResponse;
use crate::services::common::storage_error;

pub async fn list_users(service: &UserService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            users,
            "Users retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list users", e)),
    }
}
