use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;

// 考勤查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub subject_id: Option<i64>,
    pub student_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
}

// 登记考勤，同一学生同一科目同一天重复提交时覆盖
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub remark: Option<String>,
}
