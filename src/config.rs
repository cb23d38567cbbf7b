//! Runtime configuration parsed from flags and environment.

use clap::Parser;
use std::net::SocketAddr;

/// Command-line and environment configuration for the service.
#[derive(Debug, Clone, Parser)]
#[command(name = "timetrack", about = "Passport-keyed time-tracking service")]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind_addr: SocketAddr,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
    pub db_pool_size: u32,
}
