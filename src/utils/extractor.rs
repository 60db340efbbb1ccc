//! 路径参数提取器
//!
//! 路径中的 `{id}` 必须是正整数，否则直接返回 422。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径 `{id}` 解析出的正整数 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

fn parse_positive_id(raw: Option<&str>) -> Result<i64, String> {
    let raw = raw.ok_or_else(|| "Missing id in path".to_string())?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("Invalid id: {raw}")),
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = parse_positive_id(req.match_info().get("id"))
            .map(SafeIDI64)
            .map_err(|message| {
                let response = HttpResponse::UnprocessableEntity().json(
                    ApiResponse::error_empty(ErrorCode::ValidationFailed, message.clone()),
                );
                InternalError::from_response(message, response).into()
            });
        ready(result)
    }
}
