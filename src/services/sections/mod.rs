pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::requests::{
    CreateSectionRequest, SectionListQuery, UpdateSectionRequest,
};
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    // 获取班级列表，院系与年级条件取交集
    pub async fn list_sections(
        &self,
        request: &HttpRequest,
        query: SectionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_sections(self, request, query).await
    }

    pub async fn create_section(
        &self,
        request: &HttpRequest,
        req: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_section(self, request, req).await
    }

    pub async fn get_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_section(self, request, section_id).await
    }

    pub async fn update_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_section(self, request, section_id, update).await
    }

    // 删除班级：科目与排课级联删除，学生解除分班
    pub async fn delete_section(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_section(self, request, section_id).await
    }

    // 获取班级内的学生
    pub async fn list_section_students(
        &self,
        request: &HttpRequest,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_section_students(self, request, section_id).await
    }
}
