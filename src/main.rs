use anyhow::{Context, bail};
use dotenvy::dotenv;
use tracing::{info, warn};

use authmock::logging::{init_tracing, shutdown_tracer};
use authmock::metrics::{init_metrics, metrics_app};
use authmock::router::init_router;
use authmock::state::init_app_state;
use authmock_config::{JwtConfig, ObservabilityConfig, ServerConfig, format_duration};
use authmock_core::set_expose_internal_errors;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    let server_config = ServerConfig::from_env();

    init_tracing(&observability, server_config.environment)?;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        if server_config.is_production() {
            bail!("JWT_SECRET must be set when ENVIRONMENT=production");
        }
        warn!("Using the built-in development signing secret");
    }

    set_expose_internal_errors(!server_config.is_production());

    let state = init_app_state(&jwt_config);
    let app = init_router(state);

    if let Some(handle) = init_metrics(observability.enabled)? {
        let metrics_addr = format!("{}:{}", server_config.host, observability.metrics_port);
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("failed to bind metrics listener on {metrics_addr}"))?;
        info!(address = %metrics_addr, "Prometheus metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                tracing::error!(error = %e, "Metrics listener stopped");
            }
        });
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(
        address = %address,
        environment = %server_config.environment,
        access_token_expiry = %format_duration(jwt_config.access_token_expiry),
        refresh_token_expiry = %format_duration(jwt_config.refresh_token_expiry),
        "authmock listening"
    );
    info!("POST /api/auth/login    authenticate and receive a token pair");
    info!("POST /api/auth/refresh  exchange a refresh token for an access token");
    info!("GET  /api/auth/verify   verify a bearer access token");
    info!("Swagger UI at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    shutdown_tracer();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
