//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tracked_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TrackedError {
            $($variant(String),)*
        }

        impl TrackedError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TrackedError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TrackedError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TrackedError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TrackedError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TrackedError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tracked_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Conflict Error"),
    Serialization("E008", "Serialization Error"),
    FileOperation("E009", "File Operation Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
}

impl TrackedError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TrackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackedError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TrackedError {
    fn from(err: sea_orm::DbErr) -> Self {
        TrackedError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TrackedError {
    fn from(err: std::io::Error) -> Self {
        TrackedError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrackedError {
    fn from(err: serde_json::Error) -> Self {
        TrackedError::Serialization(err.to_string())
    }
}

impl TrackedError {
    /// 将数据库唯一约束冲突识别为 Conflict，其余保持为数据库操作错误
    pub fn from_db_write(context: &str, err: sea_orm::DbErr) -> Self {
        let msg = err.to_string();
        let lower = msg.to_lowercase();
        if lower.contains("unique constraint")
            || lower.contains("duplicate entry")
            || lower.contains("duplicate key")
        {
            TrackedError::Conflict(format!("{context}: {msg}"))
        } else {
            TrackedError::DatabaseOperation(format!("{context}: {msg}"))
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TrackedError::cache_connection("test").code(), "E001");
        assert_eq!(TrackedError::database_config("test").code(), "E002");
        assert_eq!(TrackedError::validation("test").code(), "E005");
        assert_eq!(TrackedError::not_found("test").code(), "E006");
        assert_eq!(TrackedError::authorization("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TrackedError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            TrackedError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TrackedError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err = TrackedError::from_db_write(
            "创建科目失败",
            sea_orm::DbErr::Custom("UNIQUE constraint failed: subjects.code".into()),
        );
        assert!(matches!(err, TrackedError::Conflict(_)));

        let err = TrackedError::from_db_write(
            "创建科目失败",
            sea_orm::DbErr::Custom("disk I/O error".into()),
        );
        assert!(matches!(err, TrackedError::DatabaseOperation(_)));
    }

    #[test]
    fn test_format_simple() {
        let err = TrackedError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
