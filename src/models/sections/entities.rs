use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级（院系 + 年级下的学生群体）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub year_level_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
