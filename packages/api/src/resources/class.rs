use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{ClassEditRequest, Id};
use crate::transport::{ApiRequest, Transport};

pub async fn list_classes<T: Transport>(
    transport: &T,
    page: u32,
    limit: u32,
    is_treasurer: bool,
) -> ApiResult<Value> {
    transport
        .send(
            ApiRequest::get("/api/class/list")
                .param("page", page)
                .param("limit", limit)
                .param("isTreasurer", is_treasurer),
        )
        .await
}

/// The class name travels as a query parameter; the body is empty.
pub async fn create_class<T: Transport>(transport: &T, name: &str) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/api/class/create").param("name", name))
        .await
}

pub async fn update_class<T: Transport>(
    transport: &T,
    id: &Id,
    body: &ClassEditRequest,
) -> ApiResult<Value> {
    transport
        .send(ApiRequest::put(format!("/api/class/{id}")).json(body)?)
        .await
}

pub async fn delete_class<T: Transport>(transport: &T, id: &Id) -> ApiResult<Value> {
    transport
        .send(ApiRequest::delete(format!("/api/class/{id}")))
        .await
}

pub async fn get_access_code<T: Transport>(transport: &T, id: &Id) -> ApiResult<Value> {
    transport
        .send(ApiRequest::get(format!("/api/class-access-token/{id}")))
        .await
}

pub async fn join_class<T: Transport>(
    transport: &T,
    class_id: &Id,
    student_id: &Id,
    access_code: &str,
) -> ApiResult<Value> {
    transport
        .send(
            ApiRequest::post("/api/class-member/add")
                .param("classId", class_id)
                .param("studentId", student_id)
                .param("accessCode", access_code),
        )
        .await
}
