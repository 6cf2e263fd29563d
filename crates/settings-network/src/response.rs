//! 응답 정규화.
//!
//! [`RawResponse`]를 타입이 있는 값 또는 분류된 에러로 바꾼다.
//!
//! - non-2xx: 본문 `{ "error": "..." }`의 메시지, 해석 불가면 `"HTTP <status>"`
//! - 204: 본문을 보지 않고 `None`
//! - 그 외: JSON 역직렬화, 실패는 `CoreError::Decode` (ApiError로 바꾸지 않음)

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use settings_core::error::{ApiError, CoreError};
use tracing::debug;

use crate::transport::RawResponse;

/// 서버 에러 응답 본문
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 상태 코드 확인 및 에러 매핑
///
/// 성공 상태면 `Ok(())`. 실패면 본문에서 메시지를 최대한 얻되,
/// 상태 코드는 항상 실제 응답의 것을 쓴다.
pub fn check_status(raw: &RawResponse) -> Result<(), ApiError> {
    if raw.status.is_success() {
        return Ok(());
    }

    let status = raw.status.as_u16();
    let message = serde_json::from_slice::<ErrorBody>(&raw.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));

    debug!("API 에러 응답: status={status}, message={message}");
    Err(ApiError::new(message, status))
}

/// 응답을 `T`로 정규화. 204면 `None`.
pub fn normalize<T: DeserializeOwned>(raw: &RawResponse) -> Result<Option<T>, CoreError> {
    normalize_with(raw, |body| serde_json::from_slice(body))
}

/// 본문 파서를 지정하는 [`normalize`]
///
/// 파서는 성공 상태이면서 204가 아닐 때만 호출된다.
pub fn normalize_with<T, F>(raw: &RawResponse, parse: F) -> Result<Option<T>, CoreError>
where
    F: FnOnce(&[u8]) -> Result<T, serde_json::Error>,
{
    check_status(raw)?;

    if raw.status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    Ok(Some(parse(&raw.body)?))
}

/// 값이 반드시 있어야 하는 응답의 정규화
///
/// 성공 응답에 본문이 없으면(204) `CoreError::EmptyBody`.
pub fn expect_body<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, CoreError> {
    normalize(raw)?.ok_or(CoreError::EmptyBody {
        status: raw.status.as_u16(),
    })
}
