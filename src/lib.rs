//! Inhouse - a typed client for locally-hosted OpenAI-compatible model runners
//!
//! This library provides a small typed surface over the REST endpoints a
//! local model runner exposes (chat completions, text completions,
//! embeddings, model listing and health), configured with a base URL and an
//! optional API key.

pub mod client;
pub mod endpoint;
pub mod errors;
pub mod schemas;

mod api;

use client::{HttpClient, HyperClient, create_hyper_client};
use endpoint::Endpoint;

/// A client for one OpenAI-compatible model runner, generic over the HTTP
/// transport so tests can substitute a mock.
#[derive(Clone, Debug)]
pub struct Client<T: HttpClient = HyperClient> {
    pub http_client: T,
    pub endpoint: Endpoint,
}

impl Client<HyperClient> {
    /// Create a new client with the default hyper transport.
    pub fn new(endpoint: Endpoint) -> Self {
        let http_client = create_hyper_client();
        Self {
            http_client,
            endpoint,
        }
    }
}

impl<T: HttpClient> Client<T> {
    /// Create a client with a custom HTTP transport (useful for testing).
    pub fn with_http_client(endpoint: Endpoint, http_client: T) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }
}
