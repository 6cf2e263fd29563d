//! HTTP 전송 어댑터.
//!
//! 기본 URL + 경로 세그먼트로 요청 URL을 만들고, 본문이 있으면
//! JSON Content-Type을 붙여 한 번만 요청한다. 재시도/타임아웃 없음.
//! 응답 본문은 끝까지 읽어 [`RawResponse`]로 넘긴다.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use settings_core::config::ClientConfig;
use settings_core::error::CoreError;
use tracing::debug;
use url::Url;

/// 본문까지 읽은 응답
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// reqwest 기반 전송 어댑터
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// 설정의 기본 URL로 전송 어댑터 생성
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CoreError::Config(format!("HTTP 클라이언트 빌드 실패: {e}")))?;
        Self::with_client(client, config)
    }

    /// 외부에서 구성한 reqwest 클라이언트 사용
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Result<Self, CoreError> {
        let base_url = config
            .base_url()
            .map_err(|e| CoreError::Config(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 요청 URL 구성
    ///
    /// 세그먼트는 퍼센트 인코딩되며, 쿼리 쌍이 비어 있으면 `?`도 붙지 않는다.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CoreError::Config(format!("기본 URL에 경로를 붙일 수 없음: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// 요청 1회 실행
    ///
    /// 서버에 도달하지 못한 실패만 `CoreError::Transport`로 반환한다.
    /// 상태 코드 해석은 [`crate::response`]의 몫이다.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse, CoreError> {
        let url = self.endpoint(segments, query)?;
        debug!("{method} {url}");

        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| CoreError::Transport(Box::new(e)))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| CoreError::Transport(Box::new(e)))?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}
