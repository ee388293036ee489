use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub mod service;
#[cfg(feature = "server")]
pub mod server;

use crate::api::service::{SolveRequest, SolveService};
use crate::config::Config;
use crate::services::algorithm::Trace;

#[cfg(feature = "server")]
pub async fn start_service(config_path: String) -> Result<()> {
    use log::info;
    use std::time::Duration;

    use crate::api::server::{create_router, AppState};
    use crate::utils::logging;

    println!("Initializing PathTrace service...");

    let config = Config::load_or_default(&config_path);
    println!("Configuration loaded: {:?}", config);

    logging::init(&config.log)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let state = AppState::new(SolveService::from_config(&config));
    let router = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    println!("Starting HTTP server on {}", addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    println!("Shutting down PathTrace service...");
    info!("Service stopped");
    logging::shutdown();

    served.context("HTTP server error")
}

/// 读取请求文件并求解
///
/// `algorithm` 非空时覆盖文件中的算法选择
pub fn solve_file<P: AsRef<Path>>(
    config: &Config,
    request_path: P,
    algorithm: Option<&str>,
) -> Result<crate::core::SolveResult<Trace>> {
    let path = request_path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let mut request: SolveRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))?;
    if let Some(algorithm) = algorithm {
        request.algorithm = Some(algorithm.to_string());
    }

    let service = SolveService::from_config(config);
    Ok(service.execute(&request))
}

#[cfg(feature = "server")]
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
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

    println!("Received shutdown signal");
}
