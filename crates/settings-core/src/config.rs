//! 클라이언트 설정.
//!
//! API 서버 기본 URL 하나만 가진다. `config` crate로 환경변수
//! `PUBLIC_API_URL`을 읽고, 없거나 비어 있으면 기본값을 쓴다.
//! 한 번 로드한 값은 [`ClientConfig`]로 클라이언트 생성자에 전달된다.

use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::CoreError;

/// `PUBLIC_API_URL`이 없을 때 쓰는 API 서버 주소
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// 환경변수 접두사 (`PUBLIC_` + `API_URL`)
const ENV_PREFIX: &str = "PUBLIC";

/// 클라이언트 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API 서버 기본 URL (예: "https://api.example.com")
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    /// 지정한 URL로 설정 생성
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// 프로세스 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self, CoreError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(env: Environment) -> Result<Self, CoreError> {
        let config: Self = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)
            .map_err(|e| CoreError::Config(format!("기본값 설정 실패: {e}")))?
            .add_source(env.ignore_empty(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CoreError::Config(format!("설정 로드 실패: {e}")))?;

        config.validate()?;
        debug!("API 서버: {}", config.api_url);
        Ok(config)
    }

    /// 기본 URL 검증 (http/https 절대 URL만 허용)
    pub fn validate(&self) -> Result<(), CoreError> {
        self.base_url().map(|_| ())
    }

    /// 파싱된 기본 URL
    pub fn base_url(&self) -> Result<Url, CoreError> {
        let url = Url::parse(&self.api_url).map_err(|e| CoreError::Validation {
            field: "api_url".to_string(),
            message: format!("{}: {e}", self.api_url),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::Validation {
                field: "api_url".to_string(),
                message: format!("지원하지 않는 스킴: {other}"),
            }),
        }
    }
}
