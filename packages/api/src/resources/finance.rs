use serde_json::Value;

use crate::error::ApiResult;
use crate::transport::{ApiRequest, Transport};

pub async fn get_finance_account<T: Transport>(transport: &T) -> ApiResult<Value> {
    transport.send(ApiRequest::get("/api/finance-account/")).await
}

pub async fn list_collections<T: Transport>(transport: &T, page: u32, limit: u32) -> ApiResult<Value> {
    transport
        .send(
            ApiRequest::get("/api/collection/list")
                .param("page", page)
                .param("limit", limit),
        )
        .await
}

pub async fn my_contributions<T: Transport>(transport: &T) -> ApiResult<Value> {
    transport
        .send(ApiRequest::get("/api/contribution/my-contributions"))
        .await
}
