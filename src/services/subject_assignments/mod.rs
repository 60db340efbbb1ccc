pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subject_assignments::requests::{
    CreateSubjectAssignmentRequest, SubjectAssignmentListQuery,
};
use crate::storage::Storage;

pub struct SubjectAssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectAssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn list_subject_assignments(
        &self,
        request: &HttpRequest,
        query: SubjectAssignmentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_subject_assignments(self, request, query).await
    }

    pub async fn create_subject_assignment(
        &self,
        request: &HttpRequest,
        req: CreateSubjectAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject_assignment(self, request, req).await
    }

    pub async fn delete_subject_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject_assignment(self, request, assignment_id).await
    }
}
