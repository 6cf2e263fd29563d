//! 핵심 에러 타입.
//!
//! 네트워크 어댑터는 실패를 모두 [`CoreError`]로 분류해서 반환한다.
//! 서버가 상태 코드로 알린 실패는 [`ApiError`], 전송 자체의 실패는
//! [`CoreError::Transport`], 성공 응답의 본문 해석 실패는
//! [`CoreError::Decode`]/[`CoreError::EmptyBody`]로 구분된다.

use thiserror::Error;

/// 전송 계층 에러 원인 (어댑터별 구체 타입을 숨긴다)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 서버가 실패 상태 코드로 응답한 경우
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    /// 응답 본문의 `error` 필드, 없으면 `"HTTP <status>"`
    pub message: String,
    /// 실제 HTTP 상태 코드
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// 본문에서 메시지를 얻지 못했을 때의 기본 에러
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("HTTP {status}"), status)
    }

    /// 404 여부
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 서버가 실패를 응답함 (non-2xx)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 요청이 완료되지 못함 (DNS, 연결, 중단 등). 원인을 그대로 보존한다.
    #[error("네트워크 에러: {0}")]
    Transport(#[source] BoxError),

    /// 성공 응답 본문을 기대한 타입으로 해석하지 못함
    #[error("응답 역직렬화 실패: {0}")]
    Decode(#[from] serde_json::Error),

    /// 값이 필요한 성공 응답에 본문이 없음
    #[error("HTTP {status} 응답에 본문이 없음")]
    EmptyBody {
        /// 응답 상태 코드
        status: u16,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },
}

impl CoreError {
    /// 서버 응답 에러라면 그 내용을 반환
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(api) => Some(api),
            _ => None,
        }
    }

    /// 404로 분류된 실패인지
    pub fn is_not_found(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_not_found)
    }
}
