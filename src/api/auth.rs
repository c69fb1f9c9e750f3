//! Authentication Endpoints

use serde::{Deserialize, Serialize};
use web_sys::AbortSignal;

use crate::models::UserData;

use super::error::ApiError;
use super::http;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize)]
struct GoogleLoginRequest {
    credential: String,
}

#[derive(Serialize)]
struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
}

/// Token pair plus the user profile, persisted by the session layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserData,
}

pub async fn login(req: &LoginRequest, abort: Option<&AbortSignal>) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/login/", req, abort).await
}

pub async fn register(
    req: &RegisterRequest,
    abort: Option<&AbortSignal>,
) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/register/", req, abort).await
}

/// Exchange a Google Identity Services credential for our tokens.
pub async fn google_login(
    credential: &str,
    abort: Option<&AbortSignal>,
) -> Result<AuthResponse, ApiError> {
    let body = GoogleLoginRequest {
        credential: credential.to_string(),
    };
    http::post_json("/auth/google/", &body, abort).await
}

pub async fn change_password(
    old_password: &str,
    new_password: &str,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let body = ChangePasswordRequest {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    };
    http::post_json_ok("/profile/change-password/", &body, abort).await
}
