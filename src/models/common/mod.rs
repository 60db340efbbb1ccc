pub mod error_code;
pub mod response;
pub mod serde_helpers;

pub use error_code::ErrorCode;
pub use response::ApiResponse;
