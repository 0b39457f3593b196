//! Transports of the expense service.
//!
//! - [`rpc`] serves the `expense.v1.ExpenseService` gRPC API on top of an
//!   [`engine::Engine`].
//! - the HTTP gateway ([`run_gateway_with_listener`]) accepts JSON, forwards
//!   every call to the gRPC endpoint and renders the reply back as JSON.
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tonic::Code;

pub use rpc::{ExpenseRpc, run_rpc_with_listener, spawn_rpc_with_listener};
pub use server::{ServerState, router, run_gateway_with_listener, spawn_gateway_with_listener};

mod expenses;
pub mod rpc;
mod server;
mod summary;

/// Failure to start or keep serving one of the listeners.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Transport(#[from] tonic::transport::Error),
    #[error(transparent)]
    Reflection(#[from] tonic_reflection::server::Error),
}

/// Error returned by the HTTP gateway handlers.
#[derive(Debug)]
pub enum ServerError {
    /// The gRPC call failed; its status is passed through.
    Rpc(tonic::Status),
    /// The request never reached the gRPC service (e.g. malformed JSON).
    Generic(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: i32,
    message: String,
}

/// HTTP status for a gRPC code, following the usual gRPC-to-HTTP mapping.
fn status_for_rpc_code(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled => {
            StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => {
            StatusCode::BAD_REQUEST
        }
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists | Code::Aborted => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::Unknown | Code::Internal | Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Rpc(status) => {
                let http_status = status_for_rpc_code(status.code());
                if http_status.is_server_error() {
                    tracing::error!("rpc call failed: {status}");
                }
                (
                    http_status,
                    ErrorBody {
                        code: status.code() as i32,
                        message: status.message().to_string(),
                    },
                )
            }
            ServerError::Generic(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: Code::InvalidArgument as i32,
                    message,
                },
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<tonic::Status> for ServerError {
    fn from(value: tonic::Status) -> Self {
        Self::Rpc(value)
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(value: serde_json::Error) -> Self {
        Self::Generic(format!("invalid request body: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_400() {
        let res = ServerError::from(tonic::Status::invalid_argument("name is required"))
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::from(tonic::Status::not_found("x")).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unavailable_maps_to_503() {
        let res = ServerError::from(tonic::Status::unavailable("down")).into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unimplemented_maps_to_501() {
        let res = ServerError::from(tonic::Status::unimplemented("x")).into_response();
        assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn internal_maps_to_500() {
        let res = ServerError::from(tonic::Status::internal("boom")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn cancelled_maps_to_499() {
        let res = ServerError::from(tonic::Status::cancelled("gone")).into_response();
        assert_eq!(res.status().as_u16(), 499);
    }

    #[test]
    fn undecodable_body_maps_to_400() {
        let err = serde_json::from_slice::<api_types::AddExpenseRequest>(b"{ not json")
            .unwrap_err();
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
