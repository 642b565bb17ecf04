//! Database metrics collection.

use metrics::{gauge, histogram};
use sqlx::SqlitePool;
use std::time::Instant;

/// Times a repository query and records it under
/// `database_query_duration_seconds{query=...}`.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("find_student_detail");
/// let result = sqlx::query_as::<_, StudentDetailEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}

/// Refreshes the connection pool gauges. Called from the health endpoint so
/// every scrape cycle sees current numbers.
pub fn record_pool_metrics(pool: &SqlitePool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}
