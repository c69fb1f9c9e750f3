//! HTTP Plumbing
//!
//! Thin wrappers over `gloo_net` shared by the endpoint modules. The
//! bearer token is attached whenever one is stored; non-2xx responses
//! are turned into `ApiError` from the body text.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortSignal, FormData};

use crate::config;
use crate::session;

use super::error::ApiError;

/// Characters escaped in query string values
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

pub(crate) fn api_url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Append query parameters, percent-encoding values. Empty values are
/// dropped entirely.
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let mut out = String::from(path);
    let mut sep = '?';
    for (key, value) in params {
        if value.is_empty() {
            continue;
        }
        let encoded = utf8_percent_encode(value, QUERY_SET).to_string();
        out.push(sep);
        out.push_str(key);
        out.push('=');
        out.push_str(&encoded);
        sep = '&';
    }
    out
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if (200..300).contains(&status) {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

async fn expect_ok(resp: Response) -> Result<(), ApiError> {
    let status = resp.status();
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    abort: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let resp = with_auth(Request::get(&api_url(path)))
        .abort_signal(abort)
        .send()
        .await
        .map_err(ApiError::from_gloo)?;
    decode_json(resp).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    abort: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let req = with_auth(Request::post(&api_url(path)))
        .abort_signal(abort)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req.send().await.map_err(ApiError::from_gloo)?;
    decode_json(resp).await
}

/// POST with a JSON body where the response body is irrelevant; callers
/// re-fetch the affected resource afterwards.
pub async fn post_json_ok<B: Serialize>(
    path: &str,
    body: &B,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let req = with_auth(Request::post(&api_url(path)))
        .abort_signal(abort)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req.send().await.map_err(ApiError::from_gloo)?;
    expect_ok(resp).await
}

/// Bodyless POST (approve and similar action endpoints).
pub async fn post_empty_ok(path: &str, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
    let resp = with_auth(Request::post(&api_url(path)))
        .abort_signal(abort)
        .send()
        .await
        .map_err(ApiError::from_gloo)?;
    expect_ok(resp).await
}

/// Multipart POST. The browser supplies the boundary header itself.
pub async fn post_form_data(
    path: &str,
    form: FormData,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let req = with_auth(Request::post(&api_url(path)))
        .abort_signal(abort)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req.send().await.map_err(ApiError::from_gloo)?;
    expect_ok(resp).await
}

pub async fn delete_ok(path: &str, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
    let resp = with_auth(Request::delete(&api_url(path)))
        .abort_signal(abort)
        .send()
        .await
        .map_err(ApiError::from_gloo)?;
    expect_ok(resp).await
}

pub struct BinaryPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// GET returning raw bytes (invoice PDFs).
pub async fn get_binary(path: &str, abort: Option<&AbortSignal>) -> Result<BinaryPayload, ApiError> {
    let resp = with_auth(Request::get(&api_url(path)))
        .abort_signal(abort)
        .send()
        .await
        .map_err(ApiError::from_gloo)?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    let content_type = resp.headers().get("content-type");
    let bytes = resp
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(BinaryPayload { bytes, content_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_are_percent_encoded() {
        let url = with_query("/products/", &[("search", "پیچ و مهره".to_string())]);
        assert!(url.starts_with("/products/?search="));
        assert!(!url.contains(' '));
        assert!(!url.contains("پیچ"));
    }

    #[test]
    fn empty_values_are_dropped() {
        let url = with_query(
            "/orders/",
            &[
                ("status", String::new()),
                ("search", "gasket".to_string()),
            ],
        );
        assert_eq!(url, "/orders/?search=gasket");
    }

    #[test]
    fn multiple_params_joined_with_ampersand() {
        let url = with_query(
            "/products/",
            &[
                ("limit", "24".to_string()),
                ("offset", "48".to_string()),
            ],
        );
        assert_eq!(url, "/products/?limit=24&offset=48");
    }

    #[test]
    fn no_params_leaves_path_untouched() {
        assert_eq!(with_query("/orders/", &[]), "/orders/");
        assert_eq!(with_query("/orders/", &[("q", String::new())]), "/orders/");
    }

    #[test]
    fn reserved_characters_in_values_are_escaped() {
        let url = with_query("/products/", &[("search", "a&b=c".to_string())]);
        assert_eq!(url, "/products/?search=a%26b%3Dc");
    }
}
