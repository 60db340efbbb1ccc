use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Subject;

// 科目列表项，附带教师姓名与年级名称用于展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    pub teacher_name: Option<String>,
    pub year_level_name: Option<String>,
}
