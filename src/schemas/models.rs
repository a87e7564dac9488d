//! Data for the /v1/models endpoint.

use serde::{Deserialize, Serialize};

/// A model the server exposes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Model {
    /// The model identifier, which can be referenced in the API endpoints.
    pub id: String,
    /// The Unix timestamp (in seconds) when the model was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    /// The object type, which is always "model".
    pub object: String,
    /// The organization that owns the model.
    pub owned_by: String,
}

/// The response from the /v1/models endpoint, which is a list of models.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListModelResponse {
    /// The object type, which is always "list". Some runners omit it.
    #[serde(default = "default_list_object")]
    pub object: String,
    /// A list of model objects.
    pub data: Vec<Model>,
}

fn default_list_object() -> String {
    "list".to_string()
}
