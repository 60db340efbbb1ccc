//! 排课存储操作

use super::SeaOrmStorage;
use crate::entity::subject_assignments::{ActiveModel, Column, Entity as SubjectAssignments};
use crate::errors::{Result, TrackedError};
use crate::models::subject_assignments::{
    entities::SubjectAssignment,
    requests::{CreateSubjectAssignmentRequest, SubjectAssignmentListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建排课
    pub async fn create_subject_assignment_impl(
        &self,
        req: CreateSubjectAssignmentRequest,
    ) -> Result<SubjectAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            section_id: Set(req.section_id),
            teacher_id: Set(req.teacher_id),
            day: Set(req.day),
            time: Set(req.time),
            room: Set(req.room),
            remark: Set(req.remark),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建排课失败", e))?;

        Ok(result.into_subject_assignment())
    }

    /// 列出排课
    pub async fn list_subject_assignments_impl(
        &self,
        query: SubjectAssignmentListQuery,
    ) -> Result<Vec<SubjectAssignment>> {
        let mut select = SubjectAssignments::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let assignments = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询排课列表失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_subject_assignment())
            .collect())
    }

    /// 删除排课
    pub async fn delete_subject_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = SubjectAssignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除排课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
