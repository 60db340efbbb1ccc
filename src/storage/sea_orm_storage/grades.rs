//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, TrackedError};
use crate::models::grades::{
    entities::Grade,
    requests::{GradeListQuery, RecordGradeRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记成绩（存在则覆盖分数与备注）
    pub async fn record_grade_impl(&self, req: RecordGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();
        let period = req.period.to_string();

        let existing = Grades::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .filter(Column::Period.eq(period.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询成绩失败: {e}")))?;

        let result = match existing {
            Some(grade) => {
                let model = ActiveModel {
                    id: Set(grade.id),
                    score: Set(req.score),
                    remark: Set(req.remark),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| TrackedError::from_db_write("更新成绩失败", e))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(req.student_id),
                    subject_id: Set(req.subject_id),
                    period: Set(period),
                    score: Set(req.score),
                    remark: Set(req.remark),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| TrackedError::from_db_write("创建成绩失败", e))?
            }
        };

        Ok(result.into_grade())
    }

    /// 列出成绩
    pub async fn list_grades_impl(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        let mut select = Grades::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let grades = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }
}
