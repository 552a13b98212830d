//! Database configuration.

use serde::{Deserialize, Serialize};

/// MongoDB connection configuration.
///
/// Resolved once at repository construction; connection pooling and
/// backpressure are the driver's concern, not configured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URL.
    pub url: String,
    /// Logical database name.
    pub database: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Server selection timeout in seconds.
    #[serde(default = "default_selection_timeout")]
    pub server_selection_timeout_seconds: u64,
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_selection_timeout() -> u64 {
    30
}
