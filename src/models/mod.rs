pub mod attendance;
pub mod auth;
pub mod common;
pub mod departments;
pub mod grades;
pub mod sections;
pub mod students;
pub mod subject_assignments;
pub mod subjects;
pub mod teachers;
pub mod users;
pub mod year_levels;

pub use common::{ApiResponse, ErrorCode};

