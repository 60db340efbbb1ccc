//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod attendance_records;
pub mod departments;
pub mod grades;
pub mod sections;
pub mod students;
pub mod subject_assignments;
pub mod subjects;
pub mod teachers;
pub mod users;
pub mod year_levels;

/// 考勤日期在数据库中的存储格式
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// 数据库时间戳（秒）转换为 UTC 时间
pub(crate) fn timestamp_to_datetime(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
