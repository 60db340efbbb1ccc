pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::year_levels::requests::{
    CreateYearLevelRequest, UpdateYearLevelRequest, YearLevelListQuery,
};
use crate::storage::Storage;

pub struct YearLevelService {
    storage: Option<Arc<dyn Storage>>,
}

impl YearLevelService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    // 获取年级列表，可按院系过滤
    pub async fn list_year_levels(
        &self,
        request: &HttpRequest,
        query: YearLevelListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_year_levels(self, request, query).await
    }

    pub async fn create_year_level(
        &self,
        request: &HttpRequest,
        req: CreateYearLevelRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_year_level(self, request, req).await
    }

    pub async fn get_year_level(
        &self,
        request: &HttpRequest,
        year_level_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_year_level(self, request, year_level_id).await
    }

    pub async fn update_year_level(
        &self,
        request: &HttpRequest,
        year_level_id: i64,
        update: UpdateYearLevelRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_year_level(self, request, year_level_id, update).await
    }

    pub async fn delete_year_level(
        &self,
        request: &HttpRequest,
        year_level_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_year_level(self, request, year_level_id).await
    }
}

// 年级序号从 1 开始
pub(crate) fn validate_level(level: i32) -> Result<(), &'static str> {
    if level < 1 {
        return Err("level must be a positive integer");
    }
    Ok(())
}
