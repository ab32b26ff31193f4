use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{ChangePasswordRequest, UserUpdateRequest};
use crate::transport::{ApiRequest, FilePart, Transport};

/// Multipart field the backend reads the avatar from.
pub const AVATAR_FIELD: &str = "avatar";

pub async fn get_user<T: Transport>(transport: &T) -> ApiResult<Value> {
    transport.send(ApiRequest::get("/api/user/")).await
}

pub async fn update_user<T: Transport>(transport: &T, body: &UserUpdateRequest) -> ApiResult<Value> {
    transport.send(ApiRequest::put("/api/user/").json(body)?).await
}

pub async fn upload_avatar<T: Transport>(transport: &T, file: FilePart) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/api/user/avatar").file(file))
        .await
}

pub async fn change_password<T: Transport>(
    transport: &T,
    body: &ChangePasswordRequest,
) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/api/user/change-password").json(body)?)
        .await
}
