//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{Result, TrackedError};
use crate::models::sections::{
    entities::Section,
    requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_section_impl(&self, req: CreateSectionRequest) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            department_id: Set(req.department_id),
            year_level_id: Set(req.year_level_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("创建班级失败", e))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取班级
    pub async fn get_section_by_id_impl(&self, id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 列出班级，院系与年级条件取交集
    pub async fn list_sections_impl(&self, query: SectionListQuery) -> Result<Vec<Section>> {
        let mut select = Sections::find();

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(year_level_id) = query.year_level_id {
            select = select.filter(Column::YearLevelId.eq(year_level_id));
        }

        let sections = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(sections.into_iter().map(|m| m.into_section()).collect())
    }

    /// 更新班级
    pub async fn update_section_impl(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        let existing = self.get_section_by_id_impl(id).await?;
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

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(year_level_id) = update.year_level_id {
            model.year_level_id = Set(year_level_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrackedError::from_db_write("更新班级失败", e))?;

        self.get_section_by_id_impl(id).await
    }

    /// 删除班级
    ///
    /// 班级下的科目与排课级联删除，学生保留并解除分班。
    pub async fn delete_section_impl(&self, id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
