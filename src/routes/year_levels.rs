use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::year_levels::requests::{
    CreateYearLevelRequest, UpdateYearLevelRequest, YearLevelListQuery,
};
use crate::services::YearLevelService;
use crate::utils::SafeIDI64;

// 懒加载的全局 YEAR_LEVEL_SERVICE 实例
static YEAR_LEVEL_SERVICE: Lazy<YearLevelService> = Lazy::new(YearLevelService::new_lazy);

pub async fn list_year_levels(
    req: HttpRequest,
    query: web::Query<YearLevelListQuery>,
) -> ActixResult<HttpResponse> {
    YEAR_LEVEL_SERVICE
        .list_year_levels(&req, query.into_inner())
        .await
}

pub async fn create_year_level(
    req: HttpRequest,
    year_level_data: web::Json<CreateYearLevelRequest>,
) -> ActixResult<HttpResponse> {
    YEAR_LEVEL_SERVICE
        .create_year_level(&req, year_level_data.into_inner())
        .await
}

pub async fn get_year_level(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    YEAR_LEVEL_SERVICE.get_year_level(&req, path.0).await
}

pub async fn update_year_level(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateYearLevelRequest>,
) -> ActixResult<HttpResponse> {
    YEAR_LEVEL_SERVICE
        .update_year_level(&req, path.0, update_data.into_inner())
        .await
}

pub async fn delete_year_level(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    YEAR_LEVEL_SERVICE.delete_year_level(&req, path.0).await
}

// 配置路由
pub fn configure_year_level_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/year-levels")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 可按院系过滤，结果按 level 升序
                    .route(web::get().to(list_year_levels))
                    .route(
                        web::post()
                            .to(create_year_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_year_level))
                    .route(
                        web::put()
                            .to(update_year_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_year_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
