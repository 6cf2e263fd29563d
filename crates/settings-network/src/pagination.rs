//! 응답 헤더 기반 페이지 정보 추출.
//!
//! 본문 형태와 무관하게 `X-Total-Count`, `X-Limit`, `X-Offset`을 읽는다.
//! 각 헤더는 독립적으로 해석되며, 없거나 숫자가 아니면 그 필드만 기본값을 쓴다.
//! 성공 응답에서만 호출해야 한다.

use reqwest::header::HeaderMap;
use settings_core::models::pagination::PaginationInfo;
use std::str::FromStr;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const LIMIT_HEADER: &str = "x-limit";
pub const OFFSET_HEADER: &str = "x-offset";

fn header_number<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// 헤더에서 페이지 정보 추출 (실패하지 않음)
pub fn extract_pagination(headers: &HeaderMap) -> PaginationInfo {
    let defaults = PaginationInfo::default();

    PaginationInfo {
        total: header_number(headers, TOTAL_COUNT_HEADER).unwrap_or(defaults.total),
        // 페이지 크기 0은 의미가 없으므로 헤더가 없는 것으로 본다
        limit: header_number(headers, LIMIT_HEADER)
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.limit),
        offset: header_number(headers, OFFSET_HEADER).unwrap_or(defaults.offset),
    }
}
