use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级，属于唯一一个院系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/year_level.ts")]
pub struct YearLevel {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
    // 序号，列表按此升序
    pub level: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
