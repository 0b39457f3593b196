use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tonic::transport::{Channel, Endpoint};

use api_types::ExpenseServiceClient;

use crate::{ServeError, expenses, summary};

/// State shared by the gateway handlers.
///
/// The gateway owns no data: it only holds a client for the gRPC endpoint.
#[derive(Clone)]
pub struct ServerState {
    pub client: ExpenseServiceClient<Channel>,
}

/// JSON routes, each one transcoded into the matching gRPC method.
pub fn router(client: ExpenseServiceClient<Channel>) -> Router {
    let state = ServerState { client };

    Router::new()
        .route("/v1/expenses", post(expenses::add).get(expenses::list))
        .route("/v1/expenses/summary", get(summary::get_summary))
        .with_state(state)
}

/// Serve the JSON gateway, forwarding every call to `rpc_endpoint`
/// (e.g. `http://127.0.0.1:8091`).
///
/// The gRPC channel connects lazily, so the gRPC server does not have to be
/// up before the gateway starts.
pub async fn run_gateway_with_listener(
    rpc_endpoint: String,
    listener: TcpListener,
) -> Result<(), ServeError> {
    let addr = listener.local_addr()?;
    let channel = Endpoint::from_shared(rpc_endpoint.clone())?.connect_lazy();

    tracing::info!("HTTP gateway listening on {}, forwarding to {}", addr, rpc_endpoint);

    axum::serve(listener, router(ExpenseServiceClient::new(channel))).await?;
    Ok(())
}

pub fn spawn_gateway_with_listener(
    rpc_endpoint: String,
    listener: TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_gateway_with_listener(rpc_endpoint, listener).await {
            tracing::error!("HTTP gateway failed: {err}");
        }
    });

    Ok(addr)
}
