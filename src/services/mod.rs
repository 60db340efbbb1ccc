pub mod attendance;
pub mod auth;
pub mod common;
pub mod departments;
pub mod grades;
pub mod hierarchy;
pub mod sections;
pub mod students;
pub mod subject_assignments;
pub mod subjects;
pub mod teachers;
pub mod users;
pub mod year_levels;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use departments::DepartmentService;
pub use grades::GradeService;
pub use sections::SectionService;
pub use students::StudentService;
pub use subject_assignments::SubjectAssignmentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;
pub use year_levels::YearLevelService;
