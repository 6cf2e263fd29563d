//! 목록 페이지 정보.

use serde::{Deserialize, Serialize};

/// 헤더가 없거나 잘못됐을 때의 페이지 크기
pub const DEFAULT_LIMIT: u32 = 10;

/// 목록 응답의 페이지 정보
///
/// `offset <= total`은 기대값일 뿐 클라이언트에서 강제하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// 전체 항목 수
    pub total: u64,
    /// 페이지 크기 (양수)
    pub limit: u32,
    /// 시작 위치
    pub offset: u64,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            total: 0,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PaginationInfo {
    /// 전체 페이지 수
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit.max(1)))
    }

    /// 현재 페이지 번호 (1부터)
    pub fn current_page(&self) -> u64 {
        self.offset / u64::from(self.limit.max(1)) + 1
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(u64::from(self.limit)) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// 다음 페이지 시작 위치, 마지막 페이지면 `None`
    pub fn next_offset(&self) -> Option<u64> {
        self.has_next()
            .then(|| self.offset.saturating_add(u64::from(self.limit)))
    }

    /// 이전 페이지 시작 위치 (0 미만으로 내려가지 않음), 첫 페이지면 `None`
    pub fn previous_offset(&self) -> Option<u64> {
        self.has_previous()
            .then(|| self.offset.saturating_sub(u64::from(self.limit)))
    }
}
