use serde::Deserialize;
use ts_rs::TS;

use super::entities::Semester;

// 科目查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListQuery {
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
    pub section_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

// 创建科目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub code: String,
    pub title: String,
    pub department_id: i64,
    pub year_level_id: i64,
    pub units: Option<i32>,
    pub semester: Option<Semester>,
    pub curriculum_year: Option<String>,
    pub teacher_id: Option<i64>,
    pub section_id: Option<i64>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
}

// 更新科目请求
//
// 可空字段使用双层 Option：外层缺省表示不修改，内层 None 表示清空
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub department_id: Option<i64>,
    pub year_level_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub units: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub semester: Option<Option<Semester>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub curriculum_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub teacher_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub section_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub day: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub room: Option<Option<String>>,
}

// 更新科目排课（教师与上课时间地点）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectAssignmentRequest {
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub teacher_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub day: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::common::serde_helpers::deserialize_some")]
    pub room: Option<Option<String>>,
}

impl From<UpdateSubjectAssignmentRequest> for UpdateSubjectRequest {
    fn from(req: UpdateSubjectAssignmentRequest) -> Self {
        Self {
            teacher_id: req.teacher_id,
            day: req.day,
            time: req.time,
            room: req.room,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_unknown_semester() {
        let body = r#"{"code":"IT101","title":"Intro","department_id":1,"year_level_id":1,"semester":"3rd"}"#;
        assert!(serde_json::from_str::<CreateSubjectRequest>(body).is_err());
    }

    #[test]
    fn test_assignment_converts_to_partial_update() {
        let req: UpdateSubjectAssignmentRequest =
            serde_json::from_str(r#"{"teacher_id": null, "room": "R-204"}"#).unwrap();
        let update: UpdateSubjectRequest = req.into();
        assert_eq!(update.teacher_id, Some(None));
        assert_eq!(update.room, Some(Some("R-204".to_string())));
        assert_eq!(update.day, None);
        assert!(update.code.is_none());
    }
}
