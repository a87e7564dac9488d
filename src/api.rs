//! Typed operations against the model runner's REST endpoints.
//!
//! Every operation builds one request (bearer auth, Host header, JSON body),
//! sends it through the configured [`HttpClient`](crate::client::HttpClient)
//! and decodes the response. There is deliberately no retry or recovery
//! logic: a transport failure or non-success status surfaces as a single
//! [`ClientError`] for the caller to report.

use crate::Client;
use crate::client::HttpClient;
use crate::errors::ClientError;
use crate::schemas::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::schemas::completions::{CompletionRequest, CompletionResponse};
use crate::schemas::embeddings::{EmbeddingsRequest, EmbeddingsResponse};
use crate::schemas::health::HealthReport;
use crate::schemas::models::ListModelResponse;
use bytes::Bytes;
use http::{Method, Request, Response, StatusCode, Uri, header};
use http_body_util::Full;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Cap on how much of an upstream error body is carried into an error
/// message, so a proxy's HTML error page cannot flood the terminal.
const ERROR_BODY_LIMIT: usize = 2048;

impl<T: HttpClient> Client<T> {
    /// Generate an assistant message for a conversation.
    #[instrument(skip(self, request))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ClientError> {
        debug!("Requesting chat completion from model {}", request.model);
        self.post_json("chat/completions", request).await
    }

    /// Complete a raw text prompt (the legacy completions endpoint).
    #[instrument(skip(self, request))]
    pub async fn completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ClientError> {
        debug!("Requesting text completion from model {}", request.model);
        self.post_json("completions", request).await
    }

    /// Embed one or more inputs into numeric vectors.
    #[instrument(skip(self, request))]
    pub async fn embeddings(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, ClientError> {
        debug!("Requesting embeddings from model {}", request.model);
        self.post_json("embeddings", request).await
    }

    /// List the models the server exposes.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> Result<ListModelResponse, ClientError> {
        let res = self.send(Method::GET, "models", None).await?;
        decode_success(res)
    }

    /// Fetch the runner's health report.
    ///
    /// The endpoint lives at the server root rather than under the API
    /// prefix, and the runner answers 503 with a full report body when a
    /// dependency is down, so 503 is parsed rather than treated as a failure.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let res = self.send(Method::GET, "/health", None).await?;
        if res.status().is_success() || res.status() == StatusCode::SERVICE_UNAVAILABLE {
            serde_json::from_slice(res.body()).map_err(ClientError::Decode)
        } else {
            Err(api_error(res))
        }
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        let bytes = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        let res = self
            .send(Method::POST, path, Some(Bytes::from(bytes)))
            .await?;
        decode_success(res)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<Response<Bytes>, ClientError> {
        let uri: Uri = self.endpoint.join(path)?;
        debug!("{} {}", method, uri);

        let mut builder = Request::builder().method(method).uri(uri.clone());

        // Fronting proxies can reject requests whose Host doesn't match the target
        if let Some(host) = self.endpoint.host_value() {
            builder = builder.header(header::HOST, host);
        }
        if let Some(key) = self.endpoint.api_key() {
            debug!("Adding authorization header for {}", self.endpoint.url());
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {key}"));
        }

        let req = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Full::new(bytes)),
            None => builder.body(Full::default()),
        }
        .map_err(|e| ClientError::InvalidRequest {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        self.http_client
            .execute(req)
            .await
            .map_err(|source| ClientError::Transport {
                uri: uri.to_string(),
                source,
            })
    }
}

fn decode_success<R: DeserializeOwned>(res: Response<Bytes>) -> Result<R, ClientError> {
    if !res.status().is_success() {
        return Err(api_error(res));
    }
    serde_json::from_slice(res.body()).map_err(ClientError::Decode)
}

fn api_error(res: Response<Bytes>) -> ClientError {
    let status = res.status();
    let mut body = String::from_utf8_lossy(res.body()).trim().to_string();
    if body.len() > ERROR_BODY_LIMIT {
        let mut end = ERROR_BODY_LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    ClientError::Api { status, body }
}
