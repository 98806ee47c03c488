// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, auth and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{Config, StorageBackend};
use db::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use dotenv::dotenv;
use services::{
    start_cleanup_task, AuthService, DashboardService, DevelopmentIdentityProvider,
    IdentityProvider, IdentityToolkitClient, RandomMetricsSource, SessionStore,
};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting guinee-tourisme-admin service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize document storage
    let store: Arc<dyn DocumentStore> = match config.storage_backend {
        StorageBackend::Postgres => match config::init_db_pool(&config).await {
            Ok(pool) => Arc::new(PgDocumentStore::new(pool)),
            Err(e) => {
                log::error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        },
        StorageBackend::Memory => {
            log::warn!("Using in-memory storage; data is lost on restart");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    // 5. Initialize authentication
    let provider: Arc<dyn IdentityProvider> = if config.auth_api_key.is_empty() {
        log::warn!("AUTH_API_KEY not set: passwords are NOT verified");
        Arc::new(DevelopmentIdentityProvider)
    } else {
        Arc::new(IdentityToolkitClient::new(config.auth_api_key.clone()))
    };

    let sessions = Arc::new(SessionStore::new(config.session_ttl_seconds));
    log::info!(
        "Initialized session store (TTL: {}s)",
        config.session_ttl_seconds
    );

    // Start background cleanup task (runs every 5 minutes)
    start_cleanup_task(sessions.clone(), 300);

    let auth = web::Data::new(AuthService::new(
        provider,
        &config.admin_emails,
        sessions,
        config.login_attempts_per_minute,
    ));
    log::info!("{} administrator(s) allow-listed", config.admin_emails.len());

    // 6. Dashboard aggregation
    let dashboard = web::Data::new(DashboardService::new(Arc::new(RandomMetricsSource)));

    // 7. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let store = web::Data::from(store);

    HttpServer::new(move || {
        App::new()
            // Application state (document store, auth and dashboard)
            .app_data(store.clone())
            .app_data(auth.clone())
            .app_data(dashboard.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::auth_config)
            .configure(handlers::public_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
