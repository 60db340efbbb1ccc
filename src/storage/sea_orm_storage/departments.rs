//! 院系存储操作

use super::SeaOrmStorage;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{Result, TrackedError};
use crate::models::departments::{
    entities::Department,
    requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建院系失败", e))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 通过代码获取院系
    pub async fn get_department_by_code_impl(&self, code: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 列出全部院系
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let departments = Departments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(departments.into_iter().map(|m| m.into_department()).collect())
    }

    /// 更新院系
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        // 先检查院系是否存在
        let existing = self.get_department_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("更新院系失败", e))?;

        self.get_department_by_id_impl(id).await
    }

    /// 删除院系，年级及其下属数据级联删除
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除院系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
