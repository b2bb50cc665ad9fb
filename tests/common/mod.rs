use std::sync::Once;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use serde_json::Value;
use uuid::Uuid;

use workout_tracker::api::routes::create_routes;
use workout_tracker::auth::JwtService;
use workout_tracker::repositories::Repositories;
use workout_tracker::services::Services;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Services wired against fresh in-memory repositories
pub fn in_memory_services() -> Services {
    init_test_logging();
    Services::new(Repositories::in_memory())
}

pub fn test_app() -> Router {
    create_routes(in_memory_services(), JwtService::new(TEST_JWT_SECRET))
}

pub struct ApiTestHelpers;

impl ApiTestHelpers {
    pub fn bearer_token(user_id: Uuid) -> String {
        let token = JwtService::new(TEST_JWT_SECRET)
            .create_access_token(user_id)
            .expect("token creation");
        format!("Bearer {}", token)
    }

    /// Builds a request authenticated as `user_id`
    pub fn request(method: Method, uri: &str, body: Option<Value>, user_id: Uuid) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, Self::bearer_token(user_id));

        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    pub async fn json_body(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
