use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use class_calendar::adapters::http::{api_router, with_middleware, ScheduleHandlers};
use class_calendar::adapters::postgres::run_migrations;
use class_calendar::adapters::{
    FallbackQuoteProvider, HttpQuoteConfig, HttpQuoteProvider, InMemorySessionRepository,
    PostgresSessionRepository, SweepScheduler, SweepSchedulerConfig, ZonedClock,
};
use class_calendar::config::{AppConfig, DatabaseConfig, ServerConfig};
use class_calendar::ports::{QuoteProvider, ReferenceClock, SessionRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.server);

    let timezone = config.schedule.tz()?;
    let locale = config.schedule.weekday_locale()?;

    let repository: Arc<dyn SessionRepository> = match &config.database {
        Some(database) => Arc::new(PostgresSessionRepository::new(connect(database).await?)),
        None => {
            tracing::warn!("No database configured, sessions are kept in memory");
            Arc::new(InMemorySessionRepository::new())
        }
    };

    let clock: Arc<dyn ReferenceClock> = Arc::new(ZonedClock::new(timezone));
    let quotes: Arc<dyn QuoteProvider> = if config.quotes.enabled {
        let remote = HttpQuoteProvider::new(
            HttpQuoteConfig::default()
                .with_quote_url(config.quotes.quote_url.clone())
                .with_translate_url(config.quotes.translate_url.clone())
                .with_target_language(config.quotes.target_language.clone())
                .with_timeout(config.quotes.timeout()),
        );
        Arc::new(FallbackQuoteProvider::new(Arc::new(remote), clock.clone()))
    } else {
        Arc::new(FallbackQuoteProvider::local_only(clock.clone()))
    };

    let handlers = ScheduleHandlers::new(repository, clock.clone(), quotes, locale);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler_task = if config.schedule.sweep_enabled {
        let scheduler = SweepScheduler::new(
            handlers.sweep_handler.clone(),
            SweepSchedulerConfig {
                timezone,
                run_at: config.schedule.sweep_time()?,
            },
        );
        tracing::info!(
            timezone = %timezone,
            sweep_at = %config.schedule.sweep_at,
            "Daily sweep enabled"
        );
        Some(tokio::spawn(async move { scheduler.run(shutdown_rx).await }))
    } else {
        None
    };

    let app = with_middleware(
        api_router(handlers),
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        address = %listener.local_addr()?,
        today = %clock.today(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    let _ = shutdown_tx.send(true);
    if let Some(task) = scheduler_task {
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Sweep scheduler task failed");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<sqlx::PgPool> {
    let pool = database
        .pool_options()
        .connect(&database.url)
        .await
        .context("Failed to connect to database")?;

    if database.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
