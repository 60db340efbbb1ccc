//! 科目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::{teachers, year_levels};
use crate::errors::{Result, TrackedError};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
    responses::SubjectDetail,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            title: Set(req.title),
            units: Set(req.units),
            semester: Set(req.semester.map(|s| s.to_string())),
            curriculum_year: Set(req.curriculum_year),
            department_id: Set(req.department_id),
            year_level_id: Set(req.year_level_id),
            teacher_id: Set(req.teacher_id),
            section_id: Set(req.section_id),
            day: Set(req.day),
            time: Set(req.time),
            room: Set(req.room),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 通过代码获取科目
    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出科目，并附带教师姓名与年级名称
    pub async fn list_subjects_impl(&self, query: SubjectListQuery) -> Result<Vec<SubjectDetail>> {
        let mut select = Subjects::find();

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(year_level_id) = query.year_level_id {
            select = select.filter(Column::YearLevelId.eq(year_level_id));
        }

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let subjects = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询科目列表失败: {e}")))?;

        if subjects.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询关联的教师与年级
        let teacher_ids: Vec<i64> = subjects.iter().filter_map(|s| s.teacher_id).collect();
        let year_level_ids: Vec<i64> = subjects.iter().map(|s| s.year_level_id).collect();

        let teacher_names: HashMap<i64, String> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            teachers::Entity::find()
                .filter(teachers::Column::Id.is_in(teacher_ids))
                .all(&self.db)
                .await
                .map_err(|e| TrackedError::database_operation(format!("查询教师失败: {e}")))?
                .into_iter()
                .map(|t| (t.id, t.full_name()))
                .collect()
        };

        let year_level_names: HashMap<i64, String> = year_levels::Entity::find()
            .filter(year_levels::Column::Id.is_in(year_level_ids))
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询年级失败: {e}")))?
            .into_iter()
            .map(|y| (y.id, y.name))
            .collect();

        Ok(subjects
            .into_iter()
            .map(|m| {
                let teacher_name = m.teacher_id.and_then(|id| teacher_names.get(&id).cloned());
                let year_level_name = year_level_names.get(&m.year_level_id).cloned();
                SubjectDetail {
                    subject: m.into_subject(),
                    teacher_name,
                    year_level_name,
                }
            })
            .collect())
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(year_level_id) = update.year_level_id {
            model.year_level_id = Set(year_level_id);
        }

        if let Some(units) = update.units {
            model.units = Set(units);
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester.map(|s| s.to_string()));
        }

        if let Some(curriculum_year) = update.curriculum_year {
            model.curriculum_year = Set(curriculum_year);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(section_id) = update.section_id {
            model.section_id = Set(section_id);
        }

        if let Some(day) = update.day {
            model.day = Set(day);
        }

        if let Some(time) = update.time {
            model.time = Set(time);
        }

        if let Some(room) = update.room {
            model.room = Set(room);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("更新科目失败", e))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目，排课、考勤与成绩级联删除
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
