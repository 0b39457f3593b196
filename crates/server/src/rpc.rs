//! gRPC transport: `expense.v1.ExpenseService` backed by the engine.

use std::{net::SocketAddr, sync::Arc};

use api_types::{
    AddExpenseRequest, AddExpenseResponse, CategorySummary, Expense, ExpenseService,
    ExpenseServiceServer, FILE_DESCRIPTOR_SET, ListExpensesRequest, ListExpensesResponse,
    SummaryRequest, SummaryResponse,
};
use engine::{Engine, EngineError, ExpenseNew};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status, transport::Server};

use crate::ServeError;

/// Implementation of the generated service trait.
#[derive(Clone)]
pub struct ExpenseRpc {
    engine: Arc<Engine>,
}

impl ExpenseRpc {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

fn status_for_engine_error(err: EngineError) -> Status {
    match err {
        EngineError::InvalidArgument(message) => Status::invalid_argument(message),
    }
}

fn map_expense(expense: engine::Expense) -> Expense {
    Expense {
        id: expense.id,
        name: expense.name,
        amount: expense.amount,
        category: expense.category,
        note: expense.note,
        occurred_at: expense.occurred_at,
        created_at: expense.created_at,
    }
}

fn map_summary(summary: engine::CategorySummary) -> CategorySummary {
    CategorySummary {
        category: summary.category,
        items: i32::try_from(summary.items).unwrap_or(i32::MAX),
        total: summary.total,
    }
}

#[tonic::async_trait]
impl ExpenseService for ExpenseRpc {
    async fn add_expense(
        &self,
        request: Request<AddExpenseRequest>,
    ) -> Result<Response<AddExpenseResponse>, Status> {
        let payload = request.into_inner();
        let created = self
            .engine
            .add_expense(ExpenseNew {
                name: payload.name,
                amount: payload.amount,
                category: payload.category,
                note: payload.note,
                occurred_at: payload.occurred_at,
            })
            .await
            .map_err(status_for_engine_error)?;

        Ok(Response::new(AddExpenseResponse {
            id: created.id,
            status: created.status,
        }))
    }

    async fn list_expenses(
        &self,
        _request: Request<ListExpensesRequest>,
    ) -> Result<Response<ListExpensesResponse>, Status> {
        let expenses = self
            .engine
            .list_expenses()
            .await
            .into_iter()
            .map(map_expense)
            .collect();

        Ok(Response::new(ListExpensesResponse { expenses }))
    }

    async fn get_summary(
        &self,
        _request: Request<SummaryRequest>,
    ) -> Result<Response<SummaryResponse>, Status> {
        let summaries = self
            .engine
            .get_summary()
            .await
            .into_iter()
            .map(map_summary)
            .collect();

        Ok(Response::new(SummaryResponse { summaries }))
    }
}

/// Serve the gRPC API, plus server reflection, until the listener fails.
pub async fn run_rpc_with_listener(
    engine: Arc<Engine>,
    listener: TcpListener,
) -> Result<(), ServeError> {
    let addr = listener.local_addr()?;

    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    tracing::info!("gRPC server listening on {}", addr);

    Server::builder()
        .add_service(ExpenseServiceServer::new(ExpenseRpc::new(engine)))
        .add_service(reflection)
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;
    Ok(())
}

pub fn spawn_rpc_with_listener(
    engine: Arc<Engine>,
    listener: TcpListener,
) -> Result<SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_rpc_with_listener(engine, listener).await {
            tracing::error!("gRPC server failed: {err}");
        }
    });

    Ok(addr)
}
