//! # settings-network
//!
//! 설정 리소스 HTTP 어댑터.
//! 요청 URL/헤더 구성, 응답 정규화(성공/빈 본문/에러), 응답 헤더에서의
//! 페이지 정보 추출을 담당하며 이를 묶어 `SettingsApi` 포트를 구현한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use settings_core::config::ClientConfig;
//! use settings_core::models::settings::ListQuery;
//! use settings_core::ports::settings_api::SettingsApi;
//! use settings_network::client::HttpSettingsClient;
//!
//! let client = HttpSettingsClient::new(&ClientConfig::from_env()?)?;
//! let page = client.list(ListQuery::default()).await?;
//! ```

pub mod client;
pub mod pagination;
pub mod response;
pub mod transport;
