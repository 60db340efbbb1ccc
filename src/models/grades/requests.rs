use serde::Deserialize;
use ts_rs::TS;

use super::entities::GradePeriod;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListQuery {
    pub subject_id: Option<i64>,
    pub student_id: Option<i64>,
}

// 登记成绩，同一学生同一科目同一阶段只保留一条
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RecordGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub period: GradePeriod,
    pub score: f64,
    pub remark: Option<String>,
}
