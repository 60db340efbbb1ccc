use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::YearLevelService;
use crate::models::ApiResponse;
use crate::models::year_levels::requests::YearLevelListQuery;
use crate::services::common::storage_error;

// 不存在的 department_id 返回空列表
pub async fn list_year_levels(
    service: &YearLevelService,
    request: &HttpRequest,
    query: YearLevelListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_year_levels(query).await {
        Ok(year_levels) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            year_levels,
            "Year levels retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("list year levels", e)),
    }
}
