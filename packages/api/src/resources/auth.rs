use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{AccountActivationRequest, LoginRequest, RegisterRequest, ResendCodeRequest};
use crate::transport::{ApiRequest, Transport};

pub async fn csrf<T: Transport>(transport: &T) -> ApiResult<Value> {
    transport.send(ApiRequest::get("/csrf")).await
}

pub async fn login<T: Transport>(transport: &T, body: &LoginRequest) -> ApiResult<Value> {
    transport.send(ApiRequest::post("/auth/login").json(body)?).await
}

pub async fn register<T: Transport>(transport: &T, body: &RegisterRequest) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/auth/register").json(body)?)
        .await
}

pub async fn logout<T: Transport>(transport: &T) -> ApiResult<Value> {
    transport.send(ApiRequest::post("/auth/logout")).await
}

pub async fn activate_account<T: Transport>(
    transport: &T,
    body: &AccountActivationRequest,
) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/auth/activate").json(body)?)
        .await
}

pub async fn resend_activation_code<T: Transport>(
    transport: &T,
    body: &ResendCodeRequest,
) -> ApiResult<Value> {
    transport
        .send(ApiRequest::post("/auth/resend-code").json(body)?)
        .await
}
