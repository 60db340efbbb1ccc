use serde::Deserialize;
use ts_rs::TS;

// 学生查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
    pub section_id: Option<i64>,
}

// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: i64,
    pub year_level_id: i64,
    pub section_id: Option<i64>,
}

// 更新学生请求
//
// section_id 为 null 时表示把学生移出班级
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub user_id: Option<Option<i64>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub section_id: Option<Option<i64>>,
}
