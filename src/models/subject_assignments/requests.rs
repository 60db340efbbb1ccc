use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject_assignment.ts")]
pub struct SubjectAssignmentListQuery {
    pub subject_id: Option<i64>,
    pub section_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

// 创建排课请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject_assignment.ts")]
pub struct CreateSubjectAssignmentRequest {
    pub subject_id: i64,
    pub section_id: i64,
    pub teacher_id: Option<i64>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub remark: Option<String>,
}
