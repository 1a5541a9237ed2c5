//! Stored file search.

use file_sharing::{ClientError, ClientResult, RemoteFileRecord, SearchQuery, ServerConfig};
use gloo_net::http::Request;

/// Fetch one page of stored files matching `query`.
pub async fn search_files(
    config: &ServerConfig,
    query: &SearchQuery,
) -> ClientResult<Vec<RemoteFileRecord>> {
    let request = Request::post(&config.search_url())
        .json(query)
        .map_err(|e| ClientError::Browser(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::Rejected {
            status: response.status(),
            body,
        });
    }

    response
        .json::<Vec<RemoteFileRecord>>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
