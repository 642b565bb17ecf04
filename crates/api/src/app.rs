use anyhow::Context;
use axum::{middleware, routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use shared::cache::TtlCache;
use shared::jwt::JwtConfig;

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{ai, analytics, health, students};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub cache: TtlCache<serde_json::Value>,
}

pub fn create_app(config: Config, pool: SqlitePool) -> anyhow::Result<Router> {
    let config = Arc::new(config);

    let jwt = JwtConfig::with_leeway(
        &config.auth.jwt_secret,
        config.auth.token_expiry_secs,
        config.auth.leeway_secs,
    )
    .context("Invalid JWT configuration")?;

    let state = AppState {
        pool,
        config: config.clone(),
        jwt: Arc::new(jwt),
        cache: TtlCache::new(Duration::from_secs(config.cache.ttl_secs)),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Staff-only routes. Authentication is enforced by the StaffAuth
    // extractor in each handler rather than by a route layer.
    let analytics_routes = Router::new()
        .route(
            "/api/v1/analytics/performance",
            get(analytics::monthly_performance),
        )
        .route(
            "/api/v1/analytics/attendance",
            get(analytics::monthly_attendance),
        )
        .route(
            "/api/v1/analytics/grades",
            get(analytics::grade_distribution),
        )
        .route("/api/v1/ai/insights", get(ai::insights))
        .route("/api/v1/ai/predict", get(ai::predict));

    let student_routes = Router::new()
        .route(
            "/api/v1/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/api/v1/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        );

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    let app = Router::new()
        .merge(public_routes)
        .merge(analytics_routes)
        .merge(student_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
