use serde::Deserialize;
use ts_rs::TS;

// 年级查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/year_level.ts")]
pub struct YearLevelListQuery {
    pub department_id: Option<i64>,
}

// 创建年级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/year_level.ts")]
pub struct CreateYearLevelRequest {
    pub department_id: i64,
    pub name: String,
    pub level: i32,
}

// 更新年级请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/year_level.ts")]
pub struct UpdateYearLevelRequest {
    pub department_id: Option<i64>,
    pub name: Option<String>,
    pub level: Option<i32>,
}
