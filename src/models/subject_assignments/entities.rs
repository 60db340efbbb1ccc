use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目在某个班级的一次排课
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject_assignment.ts")]
pub struct SubjectAssignment {
    pub id: i64,
    pub subject_id: i64,
    pub section_id: i64,
    pub teacher_id: Option<i64>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub remark: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
