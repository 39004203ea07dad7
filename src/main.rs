use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;
use migration::{Migrator, MigratorTrait};
use queries::PgStore;
use sea_orm::SqlxPostgresConnector;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::cache::RedisCache;
use crate::config::Config;
use crate::producer::AmqpProducer;
use crate::storage::StorageService;
use crate::token_manager::TokenManager;

mod app_state;
mod auth_middleware;
mod cache;
mod config;
mod endpoint_handlers;
mod error;
mod producer;
mod responses;
mod routes;
mod services;
mod storage;
mod token_manager;
mod validator;


#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()?;

    info!("Configuration path: {}", args.config.display());
    let config = Config::load(&args.config)?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.postgres)
        .await
        .context("Error connecting to database")?;
    let connection = SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone());
    Migrator::up(&connection, None)
        .await
        .context("Error running migrations")?;
    info!("Database schema is up to date");

    let cache = RedisCache::connect(&config.redis)
        .await
        .context("Error connecting to cache")?;
    let producer = AmqpProducer::connect(&config.amqp)
        .await
        .context("Error connecting to message broker")?;

    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        Arc::new(cache),
        Arc::new(producer),
        TokenManager::new(
            &config.access_token_key,
            &config.refresh_token_key,
            config.access_token_age,
        ),
        StorageService::new(config.covers_path.clone(), config.public_url()),
        config.bcrypt_cost,
    );
    let app = routes::router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Error binding {}:{}", config.host, config.port))?;
    info!("Listening on {}:{}", config.host, config.port);
    info!("Welcome to OpenMusic!");
    axum::serve(listener, app).await?;
    Ok(())
}
