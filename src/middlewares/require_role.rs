/*!
 * 角色检查中间件
 *
 * 读取 RequireJWT 放入请求扩展的用户，角色不在允许列表内时返回 403。
 * 挂在单个路由上时，会先于请求体解析执行，越权请求不会得到 422。
 *
 * ```rust,ignore
 * web::resource("")
 *     .route(web::get().to(list_departments))
 *     .route(
 *         web::post()
 *             .to(create_department)
 *             .wrap(RequireRole::new_any(UserRole::admin_roles())),
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, users::entities::UserRole};

use super::create_error_response;

#[derive(Clone, Copy)]
pub struct RequireRole {
    allowed: &'static [&'static UserRole],
}

impl RequireRole {
    /// 允许 `allowed` 中的任一角色
    pub fn new_any(allowed: &'static [&'static UserRole]) -> Self {
        Self { allowed }
    }

    fn allows(&self, role: &UserRole) -> bool {
        self.allowed.iter().any(|r| *r == role)
    }

    fn describe(&self) -> String {
        self.allowed
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            gate: *self,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    gate: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let gate = self.gate;

        Box::pin(async move {
            let Some(user) = RequireJWT::extract_user_claims(req.request()) else {
                // 路由没有被 RequireJWT 包裹
                info!("Role check on {} without an authenticated user", req.path());
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if gate.allows(&user.role) {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            info!(
                "{} {} denied for user {} ({}), requires {}",
                req.method(),
                req.path(),
                user.username,
                user.role,
                gate.describe()
            );
            Ok(req.into_response(
                create_error_response(
                    StatusCode::FORBIDDEN,
                    ErrorCode::Forbidden,
                    &format!("This action requires role {}", gate.describe()),
                )
                .map_into_right_body(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gate_rejects_staff() {
        let gate = RequireRole::new_any(UserRole::admin_roles());
        assert!(gate.allows(&UserRole::Admin));
        assert!(!gate.allows(&UserRole::Teacher));
        assert!(!gate.allows(&UserRole::Student));
        assert_eq!(gate.describe(), "admin");
    }

    #[test]
    fn test_staff_gate() {
        let gate = RequireRole::new_any(UserRole::staff_roles());
        assert!(gate.allows(&UserRole::Teacher));
        assert!(gate.allows(&UserRole::Admin));
        assert!(!gate.allows(&UserRole::Student));
        assert_eq!(gate.describe(), "teacher|admin");
    }
}
