//! 설정 문서 모델.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pagination::PaginationInfo;

/// 서버가 관리하는 설정 문서
///
/// `id`는 서버가 생성 시 할당하며 이후 변하지 않는다.
/// `data`는 형태가 정해지지 않은 JSON 값이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// 서버 할당 식별자
    pub id: String,
    /// 문서 본문
    pub data: Value,
}

/// 목록 조회 결과 한 페이지
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPage {
    /// 서버 응답 순서 그대로의 항목
    pub items: Vec<Settings>,
    /// 응답 헤더에서 추출한 페이지 정보
    pub pagination: PaginationInfo,
}

/// 목록 조회 파라미터
///
/// 지정한 값만 쿼리 문자열에 포함된다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl ListQuery {
    pub fn new(limit: Option<u32>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    /// `(이름, 값)` 쿼리 쌍, 생략된 파라미터는 빠진다
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(ListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn only_given_params_are_sent() {
        assert_eq!(
            ListQuery::new(None, Some(20)).to_pairs(),
            vec![("offset", "20".to_string())]
        );
        assert_eq!(
            ListQuery::new(Some(5), Some(0)).to_pairs(),
            vec![("limit", "5".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn data_accepts_any_json_shape() {
        let s: Settings = serde_json::from_str(r#"{"id":"x","data":[1,"two"]}"#).unwrap();
        assert!(s.data.is_array());
    }
}
