pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    // 获取院系列表
    pub async fn list_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_departments(self, request).await
    }

    pub async fn create_department(
        &self,
        request: &HttpRequest,
        req: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, request, req).await
    }

    pub async fn get_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_department(self, request, department_id).await
    }

    pub async fn update_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
        update: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, request, department_id, update).await
    }

    // 删除院系，年级、班级、科目、学生、教师一并删除
    pub async fn delete_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_department(self, request, department_id).await
    }
}
