//! JSON-RPC protocol types for the logging service.
//!
//! The service speaks JSON-RPC 2.0 over HTTP POST. Two methods are used:
//!
//! - `getTransactionId` — no params, result is the id string
//! - `logFromComponent` — params are a [`ComponentLogEntry`], result is ignored

use complog_application::EndpointError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

pub const GET_TRANSACTION_ID: &str = "getTransactionId";
pub const LOG_FROM_COMPONENT: &str = "logFromComponent";

/// Global request ID counter for JSON-RPC requests.
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Generates a unique request ID.
fn next_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC request with an auto-generated ID.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: next_id(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Turn the response to request `expected_id` into its result value.
    ///
    /// A missing or `null` result is returned as [`Value::Null`].
    pub fn into_result(self, expected_id: u64) -> Result<Value, EndpointError> {
        if let Some(error) = self.error {
            let message = match error.data {
                Some(data) => format!("{} ({})", error.message, data),
                None => error.message,
            };
            return Err(EndpointError::Rpc {
                code: error.code,
                message,
            });
        }

        if let Some(id) = self.id
            && id != expected_id
        {
            return Err(EndpointError::UnexpectedResponse(format!(
                "response id {} does not match request id {}",
                id, expected_id
            )));
        }

        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// Extract the transaction id from a `getTransactionId` result.
pub fn transaction_id_from(result: Value) -> Result<String, EndpointError> {
    match result {
        Value::String(id) => Ok(id),
        other => Err(EndpointError::UnexpectedResponse(format!(
            "expected transaction id string, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> JsonRpcResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_serialization() {
        let request = JsonRpcRequest::new(GET_TRANSACTION_ID, None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "getTransactionId");
        assert!(value.get("params").is_none());
    }

    #[test]
    fn test_request_ids_increase() {
        let a = JsonRpcRequest::new(LOG_FROM_COMPONENT, None);
        let b = JsonRpcRequest::new(LOG_FROM_COMPONENT, None);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_result_extraction() {
        let r = response(json!({"jsonrpc": "2.0", "id": 7, "result": "TX-42"}));
        let value = r.into_result(7).unwrap();
        assert_eq!(transaction_id_from(value).unwrap(), "TX-42");
    }

    #[test]
    fn test_null_result_is_ok() {
        let r = response(json!({"jsonrpc": "2.0", "id": 3, "result": null}));
        assert_eq!(r.into_result(3).unwrap(), Value::Null);
    }

    #[test]
    fn test_rpc_error_maps_to_endpoint_error() {
        let r = response(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32601, "message": "Method not found"}
        }));
        match r.into_result(1) {
            Err(EndpointError::Rpc { code, message }) => {
                assert_eq!(code, -32601);
                assert_eq!(message, "Method not found");
            }
            other => panic!("Expected Rpc error, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_id_is_rejected() {
        let r = response(json!({"jsonrpc": "2.0", "id": 9, "result": "x"}));
        assert!(matches!(
            r.into_result(10),
            Err(EndpointError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_non_string_transaction_id_is_rejected() {
        assert!(transaction_id_from(json!(12)).is_err());
        assert!(transaction_id_from(Value::Null).is_err());
    }
}
