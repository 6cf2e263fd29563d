//! # settings-core
//!
//! 설정(settings) 리소스 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 네트워크 어댑터와 CLI가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — 리소스 클라이언트 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 클라이언트 설정 (환경변수 + 기본값)
//! - [`document`] — 편집 중인 문서의 유효성 게이트

pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod ports;
