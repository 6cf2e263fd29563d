//! CLI 명령 처리.
//!
//! 각 명령은 `SettingsApi` 포트만 사용하며, 출력 줄과 알림을 [`Outcome`]으로 돌려준다.
//! 생성/수정은 문서 유효성 게이트를 통과해야만 요청을 보낸다.

use anyhow::{Context, Result};
use settings_core::document::{pretty, DocumentDraft};
use settings_core::models::notification::Notification;
use settings_core::models::pagination::PaginationInfo;
use settings_core::models::settings::{ListQuery, Settings};
use settings_core::ports::settings_api::SettingsApi;
use std::path::PathBuf;
use tracing::debug;

use crate::notifications::{self, Action};

/// 편집할 문서의 출처
#[derive(Debug, Clone)]
pub enum DocumentInput {
    Inline(String),
    File(PathBuf),
}

impl DocumentInput {
    /// 문서 텍스트를 읽어 초안으로 만든다
    pub fn into_draft(self) -> Result<DocumentDraft> {
        let text = match self {
            Self::Inline(text) => text,
            Self::File(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("문서 파일 읽기 실패: {}", path.display()))?,
        };
        Ok(DocumentDraft::new(text))
    }
}

/// 명령 실행 결과
#[derive(Debug, Default)]
pub struct Outcome {
    /// 표준 출력으로 내보낼 줄
    pub lines: Vec<String>,
    /// 사용자 알림
    pub notification: Option<Notification>,
}

impl Outcome {
    fn notify(notification: Notification) -> Self {
        Self {
            lines: Vec::new(),
            notification: Some(notification),
        }
    }

    /// 최종 알림이 에러인지
    pub fn is_failure(&self) -> bool {
        self.notification.as_ref().is_some_and(Notification::is_error)
    }
}

fn render_item(settings: &Settings) -> String {
    format!("{}\t{}", settings.id, settings.data)
}

fn render_footer(pagination: &PaginationInfo, shown: usize) -> Vec<String> {
    if shown == 0 {
        return vec!["No settings found".to_string()];
    }

    // offset은 서버 헤더 값이므로 넘침 없이 더한다
    let start = pagination.offset.saturating_add(1);
    let end = pagination.offset.saturating_add(shown as u64);
    let mut lines = vec![format!(
        "Showing {start}-{end} of {} (page {}/{})",
        pagination.total,
        pagination.current_page(),
        pagination.page_count().max(1)
    )];
    if let Some(prev) = pagination.previous_offset() {
        lines.push(format!("Previous: --offset {prev} --limit {}", pagination.limit));
    }
    if let Some(next) = pagination.next_offset() {
        lines.push(format!("Next: --offset {next} --limit {}", pagination.limit));
    }
    lines
}

/// 목록 화면
pub async fn list(api: &dyn SettingsApi, query: ListQuery) -> Outcome {
    match api.list(query).await {
        Ok(page) => {
            let mut lines: Vec<String> = page.items.iter().map(render_item).collect();
            lines.extend(render_footer(&page.pagination, page.items.len()));
            Outcome {
                lines,
                notification: None,
            }
        }
        Err(e) => Outcome::notify(notifications::failure(Action::List, &e)),
    }
}

/// 상세 화면
pub async fn show(api: &dyn SettingsApi, id: &str) -> Outcome {
    match api.get_by_id(id).await {
        Ok(settings) => Outcome {
            lines: vec![format!("id: {}", settings.id), pretty(&settings.data)],
            notification: None,
        },
        Err(e) => Outcome::notify(notifications::failure(Action::Load, &e)),
    }
}

/// 생성 화면. 무효한 문서는 요청하지 않는다.
pub async fn create(api: &dyn SettingsApi, draft: &DocumentDraft) -> Outcome {
    let Some(data) = draft.parsed().filter(|_| draft.can_submit()) else {
        debug!("무효한 문서, 생성 요청 생략");
        return Outcome::notify(notifications::invalid_document());
    };

    match api.create(data).await {
        Ok(created) => Outcome {
            lines: vec![format!("id: {}", created.id)],
            notification: Some(notifications::success(Action::Create)),
        },
        Err(e) => Outcome::notify(notifications::failure(Action::Create, &e)),
    }
}

/// 수정 화면. 무효한 문서는 요청하지 않는다.
pub async fn update(api: &dyn SettingsApi, id: &str, draft: &DocumentDraft) -> Outcome {
    let Some(data) = draft.parsed().filter(|_| draft.can_submit()) else {
        debug!("무효한 문서, 수정 요청 생략: id={id}");
        return Outcome::notify(notifications::invalid_document());
    };

    match api.update(id, data).await {
        Ok(updated) => Outcome {
            lines: vec![format!("id: {}", updated.id), pretty(&updated.data)],
            notification: Some(notifications::success(Action::Update)),
        },
        Err(e) => Outcome::notify(notifications::failure(Action::Update, &e)),
    }
}

/// 삭제
pub async fn delete(api: &dyn SettingsApi, id: &str) -> Outcome {
    match api.delete(id).await {
        Ok(()) => Outcome::notify(notifications::success(Action::Delete)),
        Err(e) => Outcome::notify(notifications::failure(Action::Delete, &e)),
    }
}

/// 유효성 게이트만 실행
pub fn check(draft: &DocumentDraft) -> Outcome {
    if draft.is_valid() {
        Outcome::notify(Notification::success("Valid JSON document"))
    } else {
        Outcome::notify(notifications::invalid_document())
    }
}
