pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceListQuery, RecordAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::common::storage_from_request(request),
        }
    }

    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    // 同一学生、科目、日期重复登记时覆盖原记录
    pub async fn record_attendance(
        &self,
        request: &HttpRequest,
        req: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, request, req).await
    }
}
