use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subject_assignments::requests::{
    CreateSubjectAssignmentRequest, SubjectAssignmentListQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::SubjectAssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SUBJECT_ASSIGNMENT_SERVICE 实例
static SUBJECT_ASSIGNMENT_SERVICE: Lazy<SubjectAssignmentService> =
    Lazy::new(SubjectAssignmentService::new_lazy);

pub async fn list_subject_assignments(
    req: HttpRequest,
    query: web::Query<SubjectAssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_ASSIGNMENT_SERVICE
        .list_subject_assignments(&req, query.into_inner())
        .await
}

pub async fn create_subject_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateSubjectAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_ASSIGNMENT_SERVICE
        .create_subject_assignment(&req, assignment_data.into_inner())
        .await
}

pub async fn delete_subject_assignment(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_ASSIGNMENT_SERVICE
        .delete_subject_assignment(&req, path.0)
        .await
}

// 配置路由
pub fn configure_subject_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subject-assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subject_assignments))
                    .route(
                        web::post()
                            .to(create_subject_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}").route(
                    web::delete()
                        .to(delete_subject_assignment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
