//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, TrackedError};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            department_id: Set(req.department_id),
            year_level_id: Set(req.year_level_id),
            section_id: Set(req.section_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let mut select = Students::find();

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(year_level_id) = query.year_level_id {
            select = select.filter(Column::YearLevelId.eq(year_level_id));
        }

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生，section_id 显式为 null 时移出班级
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(user_id);
        }

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(year_level_id) = update.year_level_id {
            model.year_level_id = Set(year_level_id);
        }

        if let Some(section_id) = update.section_id {
            model.section_id = Set(section_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生，考勤与成绩级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
