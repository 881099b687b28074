//! Router-level tests driving the full application through `oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::util::ServiceExt; // for `oneshot`

use crate::server::{router::router, startup::session_layer, state::AppState};


const TEST_COST: u32 = 4;
const TEST_SECRET: [u8; 64] = [7; 64];

/// Application wired like production, over in-memory SQLite.
struct TestApp {
    app: Router,
    /// Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
}

struct TestResponse {
    status: StatusCode,
    /// `name=value` part of the `Set-Cookie` header, if any.
    cookie: Option<String>,
    location: Option<String>,
    body: Value,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new()
            .with_attendance_tables()
            .build()
            .await
            .unwrap();
        let store = context.session_store().await.unwrap();
        let db = context.db.clone().unwrap();

        let app = router()
            .with_state(AppState::new(db, TEST_COST))
            .layer(session_layer(store, &TEST_SECRET, false).unwrap());

        Self {
            app,
            _context: context,
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let cookie = header_value(header::SET_COOKIE)
            .and_then(|v| v.split(';').next().map(str::to_string));
        let location = header_value(header::LOCATION);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            cookie,
            location,
            body,
        }
    }

    /// Registers a user and returns its id.
    async fn register(&self, email: &str, password: &str) -> i64 {
        let response = self
            .send(
                Method::POST,
                "/api/register",
                None,
                Some(json!({ "name": "Tester", "email": email, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        response.body["data"]["id"].as_i64().unwrap()
    }

    /// Logs in and returns the session cookie.
    async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .send(
                Method::POST,
                "/api/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        response.cookie.unwrap()
    }

    /// Registers and logs in a fresh user, returning its id and session cookie.
    async fn logged_in_user(&self, email: &str) -> (i64, String) {
        let id = self.register(email, "secret").await;
        let cookie = self.login(email, "secret").await;

        (id, cookie)
    }
}

/// Asserts the response is an error envelope with the given status and reason.
fn assert_error(response: &TestResponse, status: StatusCode, reason: &str) {
    assert_eq!(response.status, status);
    assert_eq!(response.body["status"], json!(false));
    assert_eq!(response.body["message"], json!("Failed to process request"));
    assert_eq!(response.body["errors"], json!(reason));
    assert_eq!(response.body["data"], json!({}));
}
