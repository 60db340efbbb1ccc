//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::DATE_FORMAT;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{Result, TrackedError};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceListQuery, RecordAttendanceRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记考勤（存在则覆盖状态与备注）
    pub async fn record_attendance_impl(
        &self,
        req: RecordAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();
        let date = req.date.format(DATE_FORMAT).to_string();

        let existing = AttendanceRecords::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .filter(Column::Date.eq(date.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询考勤失败: {e}")))?;

        let result = match existing {
            Some(record) => {
                let model = ActiveModel {
                    id: Set(record.id),
                    status: Set(req.status.to_string()),
                    remark: Set(req.remark),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| TrackedError::from_db_write("更新考勤失败", e))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(req.student_id),
                    subject_id: Set(req.subject_id),
                    date: Set(date),
                    status: Set(req.status.to_string()),
                    remark: Set(req.remark),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| TrackedError::from_db_write("创建考勤失败", e))?
            }
        };

        Ok(result.into_attendance_record())
    }

    /// 列出考勤
    pub async fn list_attendance_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find();

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date.format(DATE_FORMAT).to_string()));
        }

        let records = select
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(records
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }
}
