//! 편집 중인 문서의 유효성 게이트.
//!
//! 사용자가 입력 중인 텍스트가 올바른 JSON 문서인지 동기적으로 판정한다.
//! 생성/수정 동작은 게이트가 유효하다고 할 때만 활성화된다.
//! 네트워크 상태와는 무관하며, 판정은 절대 실패(panic)하지 않는다.

use serde_json::Value;

/// 텍스트가 올바른 JSON으로 파싱되는지
///
/// 입력 도중의 잘린 텍스트(`{`, `{"a":}` 등)는 모두 무효다.
/// [`DocumentDraft`]와 같은 파싱 경로를 쓰므로 두 판정은 항상 일치한다.
pub fn is_valid_document(text: &str) -> bool {
    parse_document(text).is_some()
}

/// 문서 텍스트 파싱, 무효면 `None`
pub fn parse_document(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// 편집 화면에 보여줄 문서 텍스트 (2칸 들여쓰기)
pub fn pretty(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

/// 편집 중인 문서 초안
///
/// 텍스트가 바뀔 때마다 유효성을 다시 계산한다.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    text: String,
    parsed: Option<Value>,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl DocumentDraft {
    pub fn new(text: impl Into<String>) -> Self {
        let mut draft = Self {
            text: String::new(),
            parsed: None,
        };
        draft.set_text(text);
        draft
    }

    /// 기존 문서로 초안 생성 (수정 화면)
    pub fn from_value(data: &Value) -> Self {
        Self {
            text: pretty(data),
            parsed: Some(data.clone()),
        }
    }

    /// 텍스트 교체 후 유효성 재계산
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.parsed = parse_document(&self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// 유효할 때의 파싱 결과
    pub fn parsed(&self) -> Option<&Value> {
        self.parsed.as_ref()
    }

    /// 제출 가능 여부. 진행 중인 요청과 무관하게 유효성만 본다.
    pub fn can_submit(&self) -> bool {
        self.is_valid()
    }
}
