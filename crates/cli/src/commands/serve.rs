use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use apidir_client::ApiClient;
use apidir_http::{AppState, Viewer, create_router};
use apidir_scanner::ScanOptions;
use apidir_service::{CatalogService, InvocationService, LocalSource};

pub(crate) struct ServeArgs {
    pub port: u16,
    pub host: String,
    pub settings: PathBuf,
    pub api_dir: Option<PathBuf>,
    pub target: Option<String>,
    pub extensions: Vec<String>,
}

pub(crate) async fn run(args: ServeArgs) -> Result<()> {
    let addr = format!("{}:{}", args.host, args.port);

    let mut source = LocalSource::new(&args.settings)
        .with_scan_options(ScanOptions { extensions: args.extensions, ..ScanOptions::default() });
    match args.api_dir {
        Some(dir) => {
            tracing::info!("Scanning endpoints from {}", dir.display());
            source = source.with_api_dir(dir);
        },
        None => tracing::info!("No endpoint directory set, /api/list disabled"),
    }
    let source = Arc::new(source);

    let target = args.target.unwrap_or_else(|| format!("http://{addr}"));
    tracing::info!("Invocations target {}", target);
    let client = ApiClient::new(target)?;

    let state = Arc::new(AppState {
        catalog_service: Arc::new(CatalogService::new(source.clone())),
        invocation_service: Arc::new(InvocationService::new(client)),
        local_source: Some(source),
        viewer: Viewer::new()?,
    });

    let router = create_router(state);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
