use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{Id, StudentRequest};
use crate::transport::{ApiRequest, Transport};

pub async fn create_student<T: Transport>(transport: &T, body: &StudentRequest) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/api/student/create").json(body)?)
        .await
}

pub async fn list_students<T: Transport>(transport: &T, page: u32, limit: u32) -> ApiResult<Value> {
    transport
        .send(
            ApiRequest::get("/api/student/list")
                .param("page", page)
                .param("limit", limit),
        )
        .await
}

pub async fn update_student<T: Transport>(
    transport: &T,
    id: &Id,
    body: &StudentRequest,
) -> ApiResult<Value> {
    transport
        .send(ApiRequest::put(format!("/api/student/{id}")).json(body)?)
        .await
}

pub async fn delete_student<T: Transport>(transport: &T, id: &Id) -> ApiResult<Value> {
    transport
        .send(ApiRequest::delete(format!("/api/student/{id}")))
        .await
}
