use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::config::{AppConfig, BootstrapConfig};
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_code;
use std::sync::Arc;
use tracing::{debug, info, warn};

const GENERATED_PASSWORD_LENGTH: usize = 16;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建身份缓存
fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache = MokaCacheWrapper::new()?;
    Ok(Arc::new(cache))
}

/// 初始化默认管理员账号
///
/// 仅在用户表为空时执行。未配置密码时随机生成并只打印一次。
pub async fn seed_admin(storage: &Arc<dyn Storage>, bootstrap: &BootstrapConfig) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    let password = match bootstrap.admin_password.as_str() {
        "" => {
            let pwd = generate_random_code(GENERATED_PASSWORD_LENGTH);
            warn!("==========================================================");
            warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", pwd);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            pwd
        }
        configured => configured.to_string(),
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        username: bootstrap.admin_username.trim().to_string(),
        email: bootstrap.admin_email.trim().to_lowercase(),
        password: password_hash,
        role: UserRole::Admin,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储（含迁移）、管理员账号和缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage, &AppConfig::get().bootstrap).await;

    let cache = create_cache()?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
