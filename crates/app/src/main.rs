use std::sync::Arc;

use clap::Parser;
use server::ServeError;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

mod settings;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = settings::Cli::parse();
    let settings = settings::Settings::new(&cli)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "expenses={level},server={level},engine={level}",
            level = settings.app.level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(settings).await
}

/// Run both listeners until one of them stops.
///
/// A listener stopping, for whatever reason, is an error: the other one is
/// shut down and the cause is returned so the process exits non-zero.
async fn run(settings: settings::Settings) -> Result<(), BoxError> {
    let mut tasks: JoinSet<Result<(), ServeError>> = JoinSet::new();
    let engine = Arc::new(engine::Engine::builder().build());

    let rpc_addr = settings.rpc_addr();
    tasks.spawn(async move {
        let listener = tokio::net::TcpListener::bind(&rpc_addr)
            .await
            .inspect_err(|err| {
                tracing::error!("failed to bind gRPC listener on {rpc_addr}: {err}")
            })?;
        server::run_rpc_with_listener(engine, listener)
            .await
            .inspect_err(|err| tracing::error!("gRPC server failed: {err}"))
    });

    let http_addr = settings.http_addr();
    let rpc_endpoint = settings.rpc_endpoint();
    tasks.spawn(async move {
        let listener = tokio::net::TcpListener::bind(&http_addr)
            .await
            .inspect_err(|err| {
                tracing::error!("failed to bind HTTP listener on {http_addr}: {err}")
            })?;
        server::run_gateway_with_listener(rpc_endpoint, listener)
            .await
            .inspect_err(|err| tracing::error!("HTTP gateway failed: {err}"))
    });

    let outcome = tasks.join_next().await;
    tasks.shutdown().await;

    match outcome {
        Some(Ok(Err(err))) => Err(err.into()),
        Some(Err(err)) => Err(err.into()),
        Some(Ok(Ok(()))) | None => Err("listener stopped unexpectedly".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settings::{App, Http, Rpc, Settings};

    #[tokio::test]
    async fn taken_port_fails_the_run() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let settings = Settings {
            app: App {
                level: "info".to_string(),
            },
            rpc: Rpc {
                bind: "127.0.0.1".to_string(),
                port,
            },
            http: Http {
                bind: "127.0.0.1".to_string(),
                port: 0,
                rpc_endpoint: None,
            },
        };

        let result = run(settings).await;

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<ServeError>().is_some(), "{err}");
    }
}
