use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::DepartmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DEPARTMENT_SERVICE 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.list_departments(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(&req, department_data.into_inner())
        .await
}

pub async fn get_department(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.get_department(&req, path.0).await
}

pub async fn update_department(
    req: HttpRequest,
    path: SafeIDI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(&req, path.0, update_data.into_inner())
        .await
}

pub async fn delete_department(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.delete_department(&req, path.0).await
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_departments))
                    .route(
                        web::post()
                            .to(create_department)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_department))
                    .route(
                        web::put()
                            .to(update_department)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_department)
                            // 级联删除下属年级、班级、科目与学生
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
