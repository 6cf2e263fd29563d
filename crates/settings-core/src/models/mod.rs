//! 설정 리소스 도메인 모델.
//!
//! 서버와 주고받는 데이터 구조체와 UI로 전달되는 알림 타입을 정의한다.
//! 서버와 주고받는 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod notification;
pub mod pagination;
pub mod settings;
