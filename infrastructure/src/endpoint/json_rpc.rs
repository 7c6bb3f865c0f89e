//! JSON-RPC over HTTP endpoint adapter

use super::protocol::{
    GET_TRANSACTION_ID, JsonRpcRequest, JsonRpcResponse, LOG_FROM_COMPONENT, transaction_id_from,
};
use async_trait::async_trait;
use complog_application::{EndpointError, LogEndpoint};
use complog_domain::ComponentLogEntry;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// [`LogEndpoint`] that calls the logging service via JSON-RPC 2.0 over HTTP.
pub struct JsonRpcLogEndpoint {
    client: reqwest::Client,
    url: String,
}

impl JsonRpcLogEndpoint {
    /// Create an endpoint posting to `url`, failing requests after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EndpointError::Connection(e.to_string()))?;

        Ok(Self::with_client(client, url))
    }

    /// Create an endpoint with an existing client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, EndpointError> {
        let request = JsonRpcRequest::new(method, params);
        trace!(id = request.id, method, "Sending JSON-RPC request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?
            .error_for_status()
            .map_err(map_transport_error)?;

        let body: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| EndpointError::UnexpectedResponse(e.to_string()))?;

        body.into_result(request.id)
    }
}

fn map_transport_error(e: reqwest::Error) -> EndpointError {
    if e.is_timeout() {
        EndpointError::Timeout
    } else if let Some(status) = e.status() {
        EndpointError::UnexpectedResponse(format!("HTTP {}", status))
    } else {
        EndpointError::Connection(e.to_string())
    }
}

#[async_trait]
impl LogEndpoint for JsonRpcLogEndpoint {
    async fn get_transaction_id(&self) -> Result<String, EndpointError> {
        let result = self.call(GET_TRANSACTION_ID, None).await?;
        let id = transaction_id_from(result)?;
        debug!(transaction_id = %id, "Received transaction id");
        Ok(id)
    }

    async fn log_from_component(&self, entry: &ComponentLogEntry) -> Result<(), EndpointError> {
        let params =
            serde_json::to_value(entry).map_err(|e| EndpointError::Other(e.to_string()))?;
        self.call(LOG_FROM_COMPONENT, Some(params)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_build_failure_is_a_connection_error() {
        // An unparsable URL fails inside reqwest before any socket is opened
        let endpoint = JsonRpcLogEndpoint::new("not a url", Duration::from_secs(2)).unwrap();

        let err = endpoint.get_transaction_id().await.unwrap_err();
        assert!(matches!(err, EndpointError::Connection(_)));
    }

    #[tokio::test]
    async fn test_transport_errors_without_status_map_to_connection() {
        let err = reqwest::Client::new()
            .post("http://")
            .send()
            .await
            .unwrap_err();
        assert!(err.status().is_none());

        assert!(matches!(
            map_transport_error(err),
            EndpointError::Connection(_)
        ));
    }

    #[test]
    fn test_url_is_kept() {
        let endpoint =
            JsonRpcLogEndpoint::new("http://logs.internal/rpc", Duration::from_secs(5)).unwrap();
        assert_eq!(endpoint.url(), "http://logs.internal/rpc");
    }
}
