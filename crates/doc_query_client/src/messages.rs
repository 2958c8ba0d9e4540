//! HTTP payloads exchanged with the documentation service. Client ↔ server JSON.

use serde::{Deserialize, Serialize};

/// Client → server: `POST /query` body.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

impl<'a> QueryRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}

/// Server → client: successful `/query` response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub result: String,
}
