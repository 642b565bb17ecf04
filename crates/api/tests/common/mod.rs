//! Common test utilities for integration tests.
//!
//! Every test gets its own in-memory SQLite database with the real schema
//! migrations applied, so suites are hermetic and can run in parallel.

// Allow dead code in this module - these are helper utilities that may not be
// used by every integration test suite.
#![allow(dead_code)]

use axum::Router;
use chrono::NaiveDate;
use edutrack_api::{app::create_app, config::Config};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

use domain::models::{
    CreateSectionRequest, CreateStudentRequest, ExamType, RecordAttendanceRequest,
    RecordMarkRequest, UserRole,
};
use persistence::repositories::{
    AttendanceRepository, MarkRepository, SectionRepository, StudentRepository, SubjectRepository,
    UserRepository,
};
use shared::jwt::JwtConfig;

/// Shared HS256 secret used to mint tokens in tests; the test config
/// validates against the same one.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Create an in-memory test database pool with migrations applied.
///
/// A single connection keeps every query on the same in-memory database; a
/// second connection would see an empty one.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid in-memory database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test configuration: quiet logging, test JWT secret, default cache TTL.
pub fn test_config() -> Config {
    Config {
        server: edutrack_api::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
        },
        database: edutrack_api::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: edutrack_api::config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: edutrack_api::config::SecurityConfig {
            cors_origins: vec![],
        },
        auth: edutrack_api::config::AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_expiry_secs: 3600,
            leeway_secs: 30,
        },
        cache: edutrack_api::config::CacheConfig { ttl_secs: 300 },
    }
}

/// Create a test application router.
pub fn create_test_app(config: Config, pool: SqlitePool) -> Router {
    create_app(config, pool).expect("Failed to build test app")
}

/// Mint a bearer token for the given user id with the test secret.
pub fn mint_token(user_id: Uuid) -> String {
    let jwt = JwtConfig::new(TEST_JWT_SECRET, 3600).expect("Invalid test JWT secret");
    let (token, _jti) = jwt.generate_token(user_id).expect("Failed to mint token");
    token
}

/// Generate a unique email for testing.
pub fn unique_test_email() -> String {
    format!("test_{}@school.test", Uuid::new_v4().simple())
}

/// Create a user with the given role and return their id and a valid token.
pub async fn seed_staff(pool: &SqlitePool, role: UserRole) -> (Uuid, String) {
    use fake::faker::name::en::Name;
    use fake::Fake;

    let name: String = Name().fake();
    let repo = UserRepository::new(pool.clone());
    let user = repo
        .create_user(&name, &unique_test_email(), role)
        .await
        .expect("Failed to seed staff user");
    let token = mint_token(user.id);
    (user.id, token)
}

/// Create a section and return its id.
pub async fn seed_section(pool: &SqlitePool, name: &str) -> Uuid {
    let repo = SectionRepository::new(pool.clone());
    repo.create_section(&CreateSectionRequest {
        name: name.to_string(),
        academic_year: "2025/2026".to_string(),
        class_teacher_id: None,
    })
    .await
    .expect("Failed to seed section")
    .id
}

/// Create a subject and return its id.
pub async fn seed_subject(pool: &SqlitePool, name: &str) -> Uuid {
    let repo = SubjectRepository::new(pool.clone());
    repo.create_subject(name)
        .await
        .expect("Failed to seed subject")
        .id
}

/// Create a student and return their id.
pub async fn seed_student(pool: &SqlitePool, name: &str, section_id: Option<Uuid>) -> Uuid {
    let repo = StudentRepository::new(pool.clone());
    repo.create_student(&CreateStudentRequest {
        name: name.to_string(),
        email: unique_test_email(),
        section_id,
        assigned_teacher_id: None,
    })
    .await
    .expect("Failed to seed student")
}

/// Record a mark for a student and return its id.
pub async fn seed_mark(
    pool: &SqlitePool,
    student_id: Uuid,
    subject_id: Uuid,
    score: f64,
    recorded_on: NaiveDate,
) -> Uuid {
    let repo = MarkRepository::new(pool.clone());
    repo.record_mark(&RecordMarkRequest {
        student_id,
        subject_id,
        exam_type: ExamType::Quiz,
        score,
        recorded_on,
    })
    .await
    .expect("Failed to seed mark")
    .id
}

/// Record `present` out of `total` attendance days for a student, one day
/// per row counting back from `first_day`.
pub async fn seed_attendance(
    pool: &SqlitePool,
    student_id: Uuid,
    first_day: NaiveDate,
    present: usize,
    total: usize,
) {
    let repo = AttendanceRepository::new(pool.clone());
    for i in 0..total {
        let day = first_day - chrono::Duration::days(i as i64);
        repo.record_attendance(
            &RecordAttendanceRequest {
                student_id,
                attended_on: day,
                present: i < present,
            },
            None,
        )
        .await
        .expect("Failed to seed attendance");
    }
}

/// Build a GET request with authentication.
pub fn get_request_with_auth(uri: &str, token: &str) -> axum::http::Request<axum::body::Body> {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };

    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request without authentication.
pub fn get_request(uri: &str) -> axum::http::Request<axum::body::Body> {
    use axum::{
        body::Body,
        http::{Method, Request},
    };

    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a JSON request with authentication.
pub fn json_request_with_auth(
    method: axum::http::Method,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> axum::http::Request<axum::body::Body> {
    use axum::{
        body::Body,
        http::{header, Request},
    };

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a DELETE request with authentication.
pub fn delete_request_with_auth(uri: &str, token: &str) -> axum::http::Request<axum::body::Body> {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };

    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
