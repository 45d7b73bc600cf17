//! Axum router configuration with middleware.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::chat::chat_page).post(handlers::chat::send_message),
        )
        .route("/report", get(handlers::report::report_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use secrecy::SecretSlice;
    use tower::ServiceExt;

    use careerchat_core::chat::box_gateway::BoxModelGateway;
    use careerchat_core::chat::gateway::{GenerateRequest, ModelGateway};
    use careerchat_types::chat::{ChatTurn, SessionId};
    use careerchat_types::config::AppConfig;
    use careerchat_types::error::GatewayError;

    /// Replies "Hi there!" to everything except "fail", which reports a
    /// quota error. Records every request it sees.
    #[derive(Clone, Default)]
    struct ScriptedGateway {
        requests: Arc<Mutex<Vec<GenerateRequest>>>,
    }

    impl ModelGateway for ScriptedGateway {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            if request.message == "fail" {
                Err(GatewayError::QuotaExceeded("quota exceeded".to_string()))
            } else {
                Ok("Hi there!".to_string())
            }
        }
    }

    fn test_state() -> (AppState, ScriptedGateway) {
        let gateway = ScriptedGateway::default();
        let state = AppState::new(
            AppConfig::default(),
            BoxModelGateway::new(gateway.clone()),
            SecretSlice::from(b"router-test-signing-key".to_vec()),
        )
        .unwrap();
        (state, gateway)
    }

    fn post_message(body: &'static str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    /// `name=value` pair from the response's Set-Cookie header.
    fn cookie_pair(response: &Response) -> Option<String> {
        let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
        header.split(';').next().map(str::to_string)
    }

    fn session_id(cookie_pair: &str) -> SessionId {
        let (_, value) = cookie_pair.split_once('=').unwrap();
        let (id, _) = value.rsplit_once('.').unwrap();
        SessionId(id.to_string())
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = test_state();
        let response = build_router(state).oneshot(get("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_chat_page_issues_session() {
        let (state, _) = test_state();
        let response = build_router(state.clone())
            .oneshot(get("/", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = cookie_pair(&response).expect("session cookie");
        assert!(cookie.starts_with("careerchat_session="));

        let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.contains("HttpOnly"));
        assert!(!set_cookie.contains("Max-Age"));

        let html = body_string(response).await;
        assert!(html.contains("name=\"message\""));

        assert_eq!(state.chat_service.store().session_count(), 1);
        let session = state
            .chat_service
            .load_session(&session_id(&cookie))
            .await
            .unwrap();
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_chat_page_reuses_valid_session() {
        let (state, _) = test_state();
        let first = build_router(state.clone())
            .oneshot(get("/", None))
            .await
            .unwrap();
        let cookie = cookie_pair(&first).unwrap();

        let second = build_router(state.clone())
            .oneshot(get("/", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::OK);
        assert!(second.headers().get(SET_COOKIE).is_none());
        assert_eq!(state.chat_service.store().session_count(), 1);
    }

    #[tokio::test]
    async fn test_tampered_cookie_gets_new_session() {
        let (state, _) = test_state();
        let response = build_router(state)
            .oneshot(get("/", Some("careerchat_session=forged.deadbeef")))
            .await
            .unwrap();

        let cookie = cookie_pair(&response).expect("fresh session cookie");
        assert_ne!(session_id(&cookie).as_str(), "forged");
    }

    #[tokio::test]
    async fn test_send_message_persists_turns() {
        let (state, gateway) = test_state();
        let response = build_router(state.clone())
            .oneshot(post_message("message=Hello", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = cookie_pair(&response).expect("session cookie");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "response": "Hi there!" })
        );

        let session = state
            .chat_service
            .load_session(&session_id(&cookie))
            .await
            .unwrap();
        assert_eq!(
            session.turns(),
            &[ChatTurn::user("Hello"), ChatTurn::model("Hi there!")]
        );
        assert_eq!(gateway.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_follow_up_sends_full_history() {
        let (state, gateway) = test_state();
        let first = build_router(state.clone())
            .oneshot(post_message("message=Hello", None))
            .await
            .unwrap();
        let cookie = cookie_pair(&first).unwrap();

        let second = build_router(state.clone())
            .oneshot(post_message("message=Tell+me+more", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::OK);
        assert!(second.headers().get(SET_COOKIE).is_none());

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[1].message, "Tell me more");
        assert_eq!(
            requests[1].history,
            vec![
                ChatTurn::user("Hello"),
                ChatTurn::model("Hi there!"),
                ChatTurn::user("Tell me more"),
            ]
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_500_and_keeps_history() {
        let (state, _) = test_state();
        let first = build_router(state.clone())
            .oneshot(post_message("message=Hello", None))
            .await
            .unwrap();
        let cookie = cookie_pair(&first).unwrap();

        let response = build_router(state.clone())
            .oneshot(post_message("message=fail", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "quota exceeded" })
        );

        let session = state
            .chat_service
            .load_session(&session_id(&cookie))
            .await
            .unwrap();
        assert_eq!(session.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_message_is_bad_request() {
        let (state, gateway) = test_state();
        let response = build_router(state)
            .oneshot(post_message("other=value", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "missing required field: message" })
        );
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_form_body_is_json_bad_request() {
        let (state, gateway) = test_state();

        let bare = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let json = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message":"hi"}"#))
            .unwrap();

        for request in [bare, json] {
            let response = build_router(state.clone()).oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(
                response.headers()[CONTENT_TYPE]
                    .to_str()
                    .unwrap()
                    .starts_with("application/json")
            );
            let body = body_json(response).await;
            assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
        }
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_is_fixed_and_creates_no_session() {
        let (state, _) = test_state();
        let first = build_router(state.clone())
            .oneshot(post_message("message=Hello", None))
            .await
            .unwrap();
        let cookie = cookie_pair(&first).unwrap();

        let with_history = build_router(state.clone())
            .oneshot(get("/report", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(with_history.status(), StatusCode::OK);
        let with_history = body_string(with_history).await;

        let fresh = build_router(state.clone())
            .oneshot(get("/report", None))
            .await
            .unwrap();
        assert!(fresh.headers().get(SET_COOKIE).is_none());
        let fresh = body_string(fresh).await;

        assert_eq!(with_history, fresh);
        assert!(fresh.contains("Data Scientist"));
        assert!(fresh.contains("Economic instability"));
        assert_eq!(state.chat_service.store().session_count(), 1);
    }
}
