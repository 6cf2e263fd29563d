//! 설정 리소스 클라이언트 포트.
//!
//! 구현: `settings-network` crate (reqwest)

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreError;
use crate::models::settings::{ListQuery, Settings, SettingsPage};

/// 설정 리소스 CRUD 클라이언트
///
/// 모든 연산은 같은 에러 분류 경로를 공유한다. 서버가 실패를 응답하면
/// [`CoreError::Api`], 요청 자체가 실패하면 [`CoreError::Transport`].
/// 연산 간 순서 보장은 없으며, 오래된 응답을 버리는 것은 호출자의 몫이다.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// 목록 조회 (`GET /settings`)
    ///
    /// 지정하지 않은 `limit`/`offset`은 쿼리에 포함되지 않는다.
    async fn list(&self, query: ListQuery) -> Result<SettingsPage, CoreError>;

    /// 단건 조회 (`GET /settings/{id}`)
    ///
    /// 없는 id는 `ApiError { status: 404 }`로 실패한다.
    async fn get_by_id(&self, id: &str) -> Result<Settings, CoreError>;

    /// 생성 (`POST /settings`), 서버가 할당한 id가 포함된 문서를 반환
    async fn create(&self, data: &Value) -> Result<Settings, CoreError>;

    /// 전체 교체 (`PUT /settings/{id}`)
    async fn update(&self, id: &str, data: &Value) -> Result<Settings, CoreError>;

    /// 삭제 (`DELETE /settings/{id}`)
    async fn delete(&self, id: &str) -> Result<(), CoreError>;
}
