pub mod assignment;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListQuery, UpdateSubjectAssignmentRequest, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    // 获取科目列表，附带教师姓名与年级名称
    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        query: SubjectListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request, query).await
    }

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        req: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, req).await
    }

    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, subject_id).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, request, subject_id, update).await
    }

    // 更新科目的任课教师与上课时间地点
    pub async fn update_subject_assignment(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        update: UpdateSubjectAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        assignment::update_subject_assignment(self, request, subject_id, update).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, subject_id).await
    }
}

pub(crate) fn validate_units(units: Option<i32>) -> Result<(), &'static str> {
    match units {
        Some(units) if units < 0 => Err("units must not be negative"),
        _ => Ok(()),
    }
}
