//! 설정 리소스 REST 클라이언트.
//!
//! `SettingsApi` 포트 구현. 모든 연산이 [`crate::response`]의 같은
//! 에러 분류 경로를 거친다. 재시도/캐시 없음, 요청당 1회 시도.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use settings_core::config::ClientConfig;
use settings_core::error::CoreError;
use settings_core::models::settings::{ListQuery, Settings, SettingsPage};
use settings_core::ports::settings_api::SettingsApi;
use tracing::debug;

use crate::pagination::extract_pagination;
use crate::response::{expect_body, normalize};
use crate::transport::HttpTransport;

/// 리소스 경로
const SETTINGS_PATH: &str = "settings";

/// 경로에 넣을 id 검사. 빈 id는 목록 경로로 새어 나가므로 요청 전에 거부한다.
fn id_segment(id: &str) -> Result<&str, CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "id".to_string(),
            message: "빈 id".to_string(),
        });
    }
    Ok(id)
}

/// REST API 클라이언트 — `SettingsApi` 포트 구현
#[derive(Debug, Clone)]
pub struct HttpSettingsClient {
    transport: HttpTransport,
}

impl HttpSettingsClient {
    /// 새 클라이언트 생성
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// 이미 구성된 전송 어댑터로 생성
    pub fn with_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}

#[async_trait]
impl SettingsApi for HttpSettingsClient {
    async fn list(&self, query: ListQuery) -> Result<SettingsPage, CoreError> {
        debug!("설정 목록 요청: {query:?}");

        let raw = self
            .transport
            .send(Method::GET, &[SETTINGS_PATH], &query.to_pairs(), None)
            .await?;

        // 본문이 먼저 검사되므로 에러 응답에서는 헤더를 읽지 않는다
        let items: Vec<Settings> = expect_body(&raw)?;
        let pagination = extract_pagination(&raw.headers);

        debug!("설정 목록 수신: {}건", items.len());
        Ok(SettingsPage { items, pagination })
    }

    async fn get_by_id(&self, id: &str) -> Result<Settings, CoreError> {
        debug!("설정 조회: id={id}");
        let id = id_segment(id)?;

        let raw = self
            .transport
            .send(Method::GET, &[SETTINGS_PATH, id], &[], None)
            .await?;
        expect_body(&raw)
    }

    async fn create(&self, data: &Value) -> Result<Settings, CoreError> {
        debug!("설정 생성 요청");

        let raw = self
            .transport
            .send(Method::POST, &[SETTINGS_PATH], &[], Some(data))
            .await?;
        let created: Settings = expect_body(&raw)?;

        debug!("설정 생성 성공: id={}", created.id);
        Ok(created)
    }

    async fn update(&self, id: &str, data: &Value) -> Result<Settings, CoreError> {
        debug!("설정 수정 요청: id={id}");
        let id = id_segment(id)?;

        let raw = self
            .transport
            .send(Method::PUT, &[SETTINGS_PATH, id], &[], Some(data))
            .await?;
        expect_body(&raw)
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        debug!("설정 삭제 요청: id={id}");
        let id = id_segment(id)?;

        let raw = self
            .transport
            .send(Method::DELETE, &[SETTINGS_PATH, id], &[], None)
            .await?;

        // 204면 본문을 보지 않는다. 200 + 본문도 허용하되 내용은 버린다.
        normalize::<serde::de::IgnoredAny>(&raw)?;
        debug!("설정 삭제 성공: id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockito::Matcher;
    use serde_json::json;
    use settings_core::error::ApiError;
    use settings_core::models::pagination::PaginationInfo;

    fn client_for(server: &mockito::ServerGuard) -> HttpSettingsClient {
        HttpSettingsClient::new(&ClientConfig::new(server.url())).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = HttpSettingsClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.transport().base_url().as_str(), "http://localhost:3000/");
    }

    #[tokio::test]
    async fn list_without_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/settings")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("X-Total-Count", "1")
            .with_header("X-Limit", "10")
            .with_header("X-Offset", "0")
            .with_body(r#"[{"id":"1","data":{}}]"#)
            .create_async()
            .await;

        let page = client_for(&server).list(ListQuery::default()).await.unwrap();

        assert_eq!(
            page.items,
            vec![Settings {
                id: "1".to_string(),
                data: json!({})
            }]
        );
        assert_eq!(
            page.pagination,
            PaginationInfo {
                total: 1,
                limit: 10,
                offset: 0
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_sends_given_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/settings")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::UrlEncoded("offset".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("X-Total-Count", "12")
            .with_header("X-Limit", "5")
            .with_header("X-Offset", "10")
            .with_body(r#"[{"id":"a","data":{"x":1}},{"id":"b","data":{"x":2}}]"#)
            .create_async()
            .await;

        let page = client_for(&server)
            .list(ListQuery::new(Some(5), Some(10)))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "a");
        assert_eq!(page.items[1].id, "b");
        assert_eq!(page.pagination.total, 12);
        assert!(!page.pagination.has_next());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_without_pagination_headers_uses_defaults() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let page = client_for(&server).list(ListQuery::default()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.pagination, PaginationInfo::default());
    }

    #[tokio::test]
    async fn list_malformed_headers_keep_items() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings")
            .with_status(200)
            .with_header("X-Total-Count", "lots")
            .with_header("X-Limit", "")
            .with_body(r#"[{"id":"1","data":{"k":"v"}}]"#)
            .create_async()
            .await;

        let page = client_for(&server).list(ListQuery::default()).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination, PaginationInfo::default());
    }

    #[tokio::test]
    async fn list_error_is_classified() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings")
            .with_status(500)
            .with_header("X-Total-Count", "99")
            .with_body(r#"{"error":"Database error","status":500}"#)
            .create_async()
            .await;

        let result = client_for(&server).list(ListQuery::default()).await;
        let err = result.unwrap_err();
        assert_matches!(
            err,
            CoreError::Api(ApiError { ref message, status: 500 }) if message == "Database error"
        );
    }

    #[tokio::test]
    async fn list_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings")
            .with_status(200)
            .with_body(r#"{"not":"an array"}"#)
            .create_async()
            .await;

        let result = client_for(&server).list(ListQuery::default()).await;
        assert_matches!(result, Err(CoreError::Decode(_)));
    }

    #[tokio::test]
    async fn get_by_id_success_is_stable() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/settings/abc")
            .with_status(200)
            .with_body(r#"{"id":"abc","data":{"theme":"dark","size":12}}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        let first = client.get_by_id("abc").await.unwrap();
        let second = client.get_by_id("abc").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.data["theme"], "dark");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_by_id_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings/missing")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).get_by_id("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_matches!(
            err,
            CoreError::Api(ApiError { ref message, status: 404 }) if message == "not found"
        );
    }

    #[tokio::test]
    async fn create_returns_server_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/settings")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"theme": "light"})))
            .with_status(201)
            .with_body(r#"{"id":"new-1","data":{"theme":"light"}}"#)
            .create_async()
            .await;

        let created = client_for(&server)
            .create(&json!({"theme": "light"}))
            .await
            .unwrap();

        assert_eq!(created.id, "new-1");
        assert_eq!(created.data, json!({"theme": "light"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_bad_request() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/settings")
            .with_status(400)
            .with_body(r#"{"error":"Invalid JSON: Request body must be a JSON object"}"#)
            .create_async()
            .await;

        let err = client_for(&server).create(&json!([1, 2])).await.unwrap_err();
        assert_matches!(err, CoreError::Api(ApiError { status: 400, .. }));
    }

    #[tokio::test]
    async fn update_puts_full_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/settings/7")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"a": 1, "b": [true]})))
            .with_status(200)
            .with_body(r#"{"id":"7","data":{"a":1,"b":[true]}}"#)
            .create_async()
            .await;

        let updated = client_for(&server)
            .update("7", &json!({"a": 1, "b": [true]}))
            .await
            .unwrap();

        assert_eq!(updated.id, "7");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_with_plain_text_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/settings/7")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server).update("7", &json!({})).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::Api(ApiError { ref message, status: 502 }) if message == "HTTP 502"
        );
    }

    #[tokio::test]
    async fn delete_no_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/settings/1")
            .with_status(204)
            .create_async()
            .await;

        let result = client_for(&server).delete("1").await;
        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/settings/gone")
            .with_status(404)
            .with_body(r#"{"error":"Resource not found","status":404}"#)
            .create_async()
            .await;

        let err = client_for(&server).delete("gone").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn success_without_body_where_value_expected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/settings/empty")
            .with_status(204)
            .create_async()
            .await;

        let err = client_for(&server).get_by_id("empty").await.unwrap_err();
        assert_matches!(err, CoreError::EmptyBody { status: 204 });
    }

    #[tokio::test]
    async fn empty_id_is_rejected_before_request() {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for method in ["GET", "PUT", "DELETE"] {
            mocks.push(
                server
                    .mock(method, Matcher::Any)
                    .expect(0)
                    .create_async()
                    .await,
            );
        }

        let client = client_for(&server);
        for id in ["", "  "] {
            assert_matches!(
                client.get_by_id(id).await,
                Err(CoreError::Validation { ref field, .. }) if field == "id"
            );
            assert_matches!(
                client.update(id, &json!({})).await,
                Err(CoreError::Validation { ref field, .. }) if field == "id"
            );
            assert_matches!(
                client.delete(id).await,
                Err(CoreError::Validation { ref field, .. }) if field == "id"
            );
        }
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn with_transport_uses_given_adapter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/settings/x")
            .with_status(200)
            .with_body(r#"{"id":"x","data":null}"#)
            .create_async()
            .await;

        let config = ClientConfig::new(format!("{}/api", server.url()));
        let transport = HttpTransport::new(&config).unwrap();
        let client = HttpSettingsClient::with_transport(transport);

        let settings = client.get_by_id("x").await.unwrap();
        assert_eq!(settings.id, "x");
        assert_eq!(settings.data, Value::Null);
        mock.assert_async().await;
    }
}
