//! Wire contract of the expense service.
//!
//! Everything here is generated from `proto/expense/v1/expense.proto`: the
//! prost messages, the tonic server trait and the tonic client. The messages
//! also derive serde, so the JSON gateway speaks exactly the same field names
//! as the gRPC service and the two can never drift apart.

pub mod expense {
    pub mod v1 {
        tonic::include_proto!("expense.v1");
    }
}

pub use expense::v1::{
    AddExpenseRequest, AddExpenseResponse, CategorySummary, Expense, ListExpensesRequest,
    ListExpensesResponse, SummaryRequest, SummaryResponse,
    expense_service_client::ExpenseServiceClient,
    expense_service_server::{ExpenseService, ExpenseServiceServer},
};

/// Encoded descriptor set, used to serve gRPC reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("expense_descriptor");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_proto_field_names() {
        let request = AddExpenseRequest {
            name: "Coffee".to_string(),
            amount: 4.5,
            category: "Food".to_string(),
            note: "oat milk".to_string(),
            occurred_at: "2025-10-15".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Coffee",
                "amount": 4.5,
                "category": "Food",
                "note": "oat milk",
                "occurred_at": "2025-10-15",
            })
        );
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let request: AddExpenseRequest =
            serde_json::from_str(r#"{"name":"Bus","amount":2.0,"category":"Transport"}"#).unwrap();

        assert_eq!(request.name, "Bus");
        assert_eq!(request.note, "");
        assert_eq!(request.occurred_at, "");
    }

    #[test]
    fn empty_request_bodies_deserialize() {
        let _: ListExpensesRequest = serde_json::from_str("{}").unwrap();
        let _: SummaryRequest = serde_json::from_str("{}").unwrap();
    }
}
