//! 登录账号
//!
//! 账号本身只保存身份与角色，教师和学生的业务信息在各自的档案表里，
//! 通过档案的 `user_id` 关联回来。

use super::SeaOrmStorage;
use crate::entity::{
    students::Entity as Students,
    teachers::Entity as Teachers,
    users::{ActiveModel, Column, Entity as Users},
};
use crate::errors::{Result, TrackedError};
use crate::models::users::{
    entities::{LinkedProfiles, User},
    requests::CreateUserRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入账号，`req.password` 必须已经是哈希
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map(|m| m.into_user())
        .map_err(|e| TrackedError::from_db_write("创建账号失败", e))
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Users::find_by_id(id)
            .one(&self.db)
            .await
            .map(|m| m.map(|m| m.into_user()))
            .map_err(|e| TrackedError::database_operation(format!("查询账号 {id} 失败: {e}")))
    }

    /// 登录时用户名和邮箱都可以作为标识
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier.to_lowercase())),
            )
            .one(&self.db)
            .await
            .map(|m| m.map(|m| m.into_user()))
            .map_err(|e| TrackedError::database_operation(format!("按标识查询账号失败: {e}")))
    }

    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(|m| m.into_user()).collect())
            .map_err(|e| TrackedError::database_operation(format!("查询账号列表失败: {e}")))
    }

    /// 启动时据此判断是否需要创建管理员
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| TrackedError::database_operation(format!("统计账号失败: {e}")))
    }

    /// 账号关联的教师与学生档案，账号不存在时两者都为空
    pub async fn get_linked_profiles_impl(&self, user_id: i64) -> Result<LinkedProfiles> {
        let map_err =
            |e: sea_orm::DbErr| TrackedError::database_operation(format!("查询账号档案失败: {e}"));

        let Some(account) = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(map_err)?
        else {
            return Ok(LinkedProfiles::default());
        };

        let teacher = account
            .find_related(Teachers)
            .one(&self.db)
            .await
            .map_err(map_err)?;
        let student = account
            .find_related(Students)
            .one(&self.db)
            .await
            .map_err(map_err)?;

        Ok(LinkedProfiles {
            teacher: teacher.map(|m| m.into_teacher()),
            student: student.map(|m| m.into_student()),
        })
    }
}
