use crate::admin;
use crate::catalog::HostCatalog;
use crate::config::Config;
use crate::db::Database;
use crate::menu::{admin_path, AdminMenu, ADD_SLUG, MENU_SLUG, VIEW_SLUG};
use crate::security::NonceIssuer;
use crate::strings::{get_strings, AdminStrings};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub catalog: Arc<HostCatalog>,
    pub nonces: NonceIssuer,
    pub strings: &'static AdminStrings,
    pub menu: Arc<AdminMenu>,
}

impl AppState {
    pub fn new(config: Config, db: Database, catalog: HostCatalog) -> Self {
        let nonces = NonceIssuer::new(&config.admin_token, config.nonce_lifetime_secs);
        let strings = get_strings(&config.ui_locale);
        Self {
            config: Arc::new(config),
            db,
            catalog: Arc::new(catalog),
            nonces,
            strings,
            menu: Arc::new(AdminMenu::register(strings)),
        }
    }
}

/// Build the admin router. All routes require `manage_options`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(admin::root))
        .route(&admin_path(MENU_SLUG), get(admin::list_page))
        .route(
            &admin_path(ADD_SLUG),
            get(admin::add_page).post(admin::create_translation),
        )
        .route(&admin_path(VIEW_SLUG), get(admin::view_page))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_manage_options,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect, migrate, load the catalog and serve until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let db = Database::connect(&config.database_url, &config.table_prefix).await?;
    if db.maybe_upgrade().await? {
        info!("✓ Schema installed ({})", db.translations_table());
    }

    let catalog = HostCatalog::load(&config.catalog_path)
        .context(format!("Failed to load host catalog from {}", config.catalog_path))?;

    let addr = format!("{}:{}", config.bind_address, config.port);
    let state = AppState::new(config, db.clone(), catalog);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
