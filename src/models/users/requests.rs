use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 创建用户请求
//
// 进入存储层之前 password 会被替换为 argon2 哈希
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
