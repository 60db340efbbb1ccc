use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数，两个过滤条件取交集
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListQuery {
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
}

// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct CreateSectionRequest {
    pub name: String,
    pub department_id: i64,
    pub year_level_id: i64,
}

// 更新班级请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct UpdateSectionRequest {
    pub name: Option<String>,
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
}
