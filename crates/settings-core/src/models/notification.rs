//! 사용자 동작 결과 알림.
//!
//! 저장되지 않으며, 동작마다 만들어 표시한 뒤 버린다.

use std::fmt;

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// UI 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind() {
        assert_eq!(Notification::success("Saved").to_string(), "[ok] Saved");
        assert_eq!(Notification::error("Boom").to_string(), "[error] Boom");
        assert!(Notification::error("x").is_error());
    }
}
