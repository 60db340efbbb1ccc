use serde::Deserialize;
use ts_rs::TS;

// 创建院系请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub code: String,
}

// 更新院系请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}
