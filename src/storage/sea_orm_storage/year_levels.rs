//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::year_levels::{ActiveModel, Column, Entity as YearLevels};
use crate::errors::{Result, TrackedError};
use crate::models::year_levels::{
    entities::YearLevel,
    requests::{CreateYearLevelRequest, UpdateYearLevelRequest, YearLevelListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_year_level_impl(&self, req: CreateYearLevelRequest) -> Result<YearLevel> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            department_id: Set(req.department_id),
            name: Set(req.name),
            level: Set(req.level),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建年级失败", e))?;

        Ok(result.into_year_level())
    }

    /// 通过 ID 获取年级
    pub async fn get_year_level_by_id_impl(&self, id: i64) -> Result<Option<YearLevel>> {
        let result = YearLevels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_year_level()))
    }

    /// 列出年级，按 level 升序
    pub async fn list_year_levels_impl(&self, query: YearLevelListQuery) -> Result<Vec<YearLevel>> {
        let mut select = YearLevels::find();

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        let year_levels = select
            .order_by_asc(Column::Level)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(year_levels.into_iter().map(|m| m.into_year_level()).collect())
    }

    /// 更新年级
    pub async fn update_year_level_impl(
        &self,
        id: i64,
        update: UpdateYearLevelRequest,
    ) -> Result<Option<YearLevel>> {
        let existing = self.get_year_level_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(level) = update.level {
            model.level = Set(level);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("更新年级失败", e))?;

        self.get_year_level_by_id_impl(id).await
    }

    /// 删除年级
    pub async fn delete_year_level_impl(&self, id: i64) -> Result<bool> {
        let result = YearLevels::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
