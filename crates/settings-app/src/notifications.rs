//! 동작 결과 알림 생성.
//!
//! 클라이언트 에러를 화면에 보여줄 메시지로 바꾼다.
//! 404는 "찾을 수 없음", 그 외 실패는 동작별 일반 실패 메시지.

use settings_core::error::CoreError;
use settings_core::models::notification::Notification;
use tracing::debug;

/// 사용자 동작 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Load,
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// 성공 알림
pub fn success(action: Action) -> Notification {
    let message = match action {
        Action::List | Action::Load => "Settings loaded",
        Action::Create => "Settings created successfully",
        Action::Update => "Settings updated successfully",
        Action::Delete => "Settings deleted successfully",
    };
    Notification::success(message)
}

/// 실패 알림
pub fn failure(action: Action, err: &CoreError) -> Notification {
    debug!("{} 실패: {err}", action.verb());

    if err.is_not_found() {
        return Notification::error("Settings not found");
    }

    let detail = match err {
        CoreError::Api(api) => api.message.clone(),
        other => other.to_string(),
    };
    Notification::error(format!("Failed to {} settings: {detail}", action.verb()))
}

/// 문서가 유효하지 않아 요청하지 않은 경우
pub fn invalid_document() -> Notification {
    Notification::error("Invalid JSON: fix the document before saving")
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings_core::error::ApiError;

    #[test]
    fn not_found_has_dedicated_message() {
        let err = CoreError::from(ApiError::new("Resource not found", 404));
        for action in [Action::Load, Action::Update, Action::Delete] {
            let n = failure(action, &err);
            assert!(n.is_error());
            assert_eq!(n.message, "Settings not found");
        }
    }

    #[test]
    fn generic_failure_mentions_action() {
        let err = CoreError::from(ApiError::from_status(500));
        let n = failure(Action::Load, &err);
        assert_eq!(n.message, "Failed to load settings: HTTP 500");
    }

    #[test]
    fn non_api_failure_uses_error_text() {
        let err = CoreError::EmptyBody { status: 200 };
        let n = failure(Action::Create, &err);
        assert!(n.message.starts_with("Failed to create settings: "));
    }

    #[test]
    fn success_messages() {
        assert!(!success(Action::Delete).is_error());
        assert_eq!(success(Action::Create).message, "Settings created successfully");
    }
}
