//! Service entry point: wires configuration, persistence, and the REST API.

use actix_web::{web, App, HttpServer};
use clap::Parser;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use mockable::DefaultClock;
use std::sync::Arc;
use timetrack::config::AppConfig;
use timetrack::http::{self, HttpState};
use timetrack::task::adapters::postgres::PostgresTaskRepository;
use timetrack::task::services::{TaskAggregatorService, TaskLifecycleService};
use timetrack::user::adapters::postgres::PostgresUserRepository;
use timetrack::user::services::UserDirectoryService;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let config = AppConfig::parse();

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .max_size(config.db_pool_size)
        .build(manager)
        .map_err(std::io::Error::other)?;

    let clock = Arc::new(DefaultClock);
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskRepository::new(pool));
    let state = HttpState {
        directory: UserDirectoryService::new(users.clone(), clock.clone()),
        lifecycle: TaskLifecycleService::new(users.clone(), tasks.clone(), clock.clone()),
        aggregator: TaskAggregatorService::new(users, tasks, clock),
    };

    info!(bind_addr = %config.bind_addr, "starting timetrack");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(http::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
