//! Shared helpers for HTTP integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use clients_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use clients_axum::routes::create_router;
use clients_db::{SqliteClientRepository, setup_database};

const BOUNDARY: &str = "----clients-test-boundary";

/// A router backed by a throwaway database and uploads directory.
pub struct TestApp {
    pub router: Router,
    pub uploads_dir: PathBuf,
    pub database_path: PathBuf,
    _temp: TempDir,
}

/// A decoded HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let database_path = temp.path().join("data/clients.db");
        let uploads_dir = temp.path().join("uploads");

        let config = ServerConfig {
            port: 0,
            database_path: database_path.clone(),
            uploads_dir: uploads_dir.clone(),
            cors: CorsConfig::default(),
        };
        let ctx = bootstrap(&config).await.unwrap();
        let router = create_router(ctx, &config.cors);

        Self {
            router,
            uploads_dir,
            database_path,
            _temp: temp,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a client through the API and return its JSON.
    pub async fn create_client(&self, n: u32) -> Value {
        let response = self
            .send_json(Method::POST, "/api/clients", &client_body(n))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["client"].clone()
    }

    /// Post a multipart upload. `None` leaves the part out.
    pub async fn upload(
        &self,
        id: Option<&str>,
        file: Option<(&str, &[u8])>,
    ) -> TestResponse {
        let (content_type, body) = multipart_body(id, file);
        self.send(
            Request::post("/api/clients/upload")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// A second connection to the same database, for arranging state the
    /// API cannot set directly.
    pub async fn repository(&self) -> SqliteClientRepository {
        SqliteClientRepository::new(setup_database(&self.database_path).await.unwrap())
    }
}

/// A valid create/update body with a unique email.
pub fn client_body(n: u32) -> Value {
    json!({
        "name": format!("Name{n}"),
        "lastName": format!("Last{n}"),
        "email": format!("client{n}@example.com"),
        "createAt": "2024-01-15",
    })
}

/// Build a `multipart/form-data` body with optional `id` and `file` parts.
pub fn multipart_body(id: Option<&str>, file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(id) = id {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"id\"\r\n\r\n{id}\r\n")
                .as_bytes(),
        );
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
