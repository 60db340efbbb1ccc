pub mod attendance;

pub mod auth;

pub mod departments;

pub mod grades;

pub mod sections;

pub mod students;

pub mod subject_assignments;

pub mod subjects;

pub mod teachers;

pub mod users;

pub mod year_levels;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use departments::configure_department_routes;
pub use grades::configure_grade_routes;
pub use sections::configure_section_routes;
pub use students::configure_student_routes;
pub use subject_assignments::configure_subject_assignment_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
pub use year_levels::configure_year_level_routes;

use actix_web::web;

// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_department_routes)
        .configure(configure_year_level_routes)
        .configure(configure_section_routes)
        .configure(configure_subject_routes)
        .configure(configure_subject_assignment_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_attendance_routes)
        .configure(configure_grade_routes);
}
