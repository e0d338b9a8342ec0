#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cinereview::app::build_router;
use cinereview::auth::AuthState;
use cinereview::auth::middleware::RouteAuthPolicy;
use cinereview::config::Config;
use cinereview::database::Database;
use cinereview::utils::jwt::JwtUtils;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub jwt: JwtUtils,
}

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_seconds: 3,
        jwt_secret: SECRET.to_string(),
        jwt_expires_in_seconds: 3600,
        bcrypt_cost: 4,
        server_port: 0,
        movie_detail_requires_auth: true,
        review_requires_auth: true,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(RouteAuthPolicy::default()).await
}

pub async fn spawn_app_with_policy(policy: RouteAuthPolicy) -> TestApp {
    let config = test_config();
    let db = Database::new(&config).await.expect("database");
    let auth = AuthState::from_config(&config);
    let jwt = auth.jwt.clone();
    let router = build_router(db.pool.clone(), auth, policy);
    TestApp {
        router,
        pool: db.pool,
        jwt,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", token);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json")
        };
        (status, value)
    }

    /// Signs up and signs in a user, returning the `JWT <token>` header value.
    pub async fn login(&self, username: &str) -> String {
        let (status, _) = self
            .send(
                "POST",
                "/signup",
                None,
                Some(json!({ "name": "Tester", "username": username, "password": "pw" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(
                "POST",
                "/signin",
                None,
                Some(json!({ "username": username, "password": "pw" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().expect("token").to_string()
    }

    pub async fn create_movie(&self, token: &str, body: Value) -> Value {
        let (status, body) = self.send("POST", "/movies", Some(token), Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["movie"].clone()
    }
}

pub fn movie_body(title: &str) -> Value {
    json!({
        "title": title,
        "releaseDate": 1999,
        "genre": "Science Fiction",
        "actors": [
            { "actorName": "Keanu Reeves", "characterName": "Neo" },
            { "actorName": "Carrie-Anne Moss", "characterName": "Trinity" }
        ]
    })
}
