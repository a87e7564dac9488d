//! The endpoint a client talks to: a base URL plus an optional API key.
//!
//! The base URL points at an OpenAI-compatible server, including any path
//! prefix the API lives under (`http://localhost:8000/v1` for a local model
//! runner). The key, when present, is sent as an `Authorization: Bearer`
//! header with every request.
use crate::errors::ClientError;
use http::Uri;
use url::Url;

#[derive(Debug, Clone)]
pub struct Endpoint {
    url: Url,
    api_key: Option<String>,
}

impl Endpoint {
    /// Build an endpoint from a base URL and an optional API key.
    ///
    /// Only http and https URLs are accepted. The path is normalized to end
    /// with `/` so that relative joins extend it instead of replacing the
    /// last segment (`/v1` and `/v1/` behave identically).
    pub fn new(url: Url, api_key: Option<String>) -> Result<Self, ClientError> {
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClientError::InvalidUrl {
                    url: url.to_string(),
                    reason: format!("scheme '{other}' is not supported, use http or https"),
                });
            }
        }
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut url = url;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { url, api_key })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Resolve a path against the base URL.
    ///
    /// Relative paths (`chat/completions`) extend the base path. Absolute
    /// paths (`/health`) resolve at the server root, which is where the model
    /// runner mounts endpoints that live outside the API prefix.
    pub fn join(&self, path: &str) -> Result<Uri, ClientError> {
        let joined = self.url.join(path).map_err(|e| ClientError::InvalidUrl {
            url: self.url.to_string(),
            reason: format!("cannot join '{path}': {e}"),
        })?;
        joined
            .as_str()
            .parse::<Uri>()
            .map_err(|e| ClientError::InvalidUrl {
                url: joined.to_string(),
                reason: e.to_string(),
            })
    }

    /// Value for the Host header, including any explicit port.
    pub fn host_value(&self) -> Option<String> {
        self.url.host_str().map(|host| match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }
}
