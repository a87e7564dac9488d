//! Wire schemas for the OpenAI-compatible API surface
//!
//! These schemas match the subset of the OpenAI API specification that a
//! local model runner exposes, plus the runner's own health endpoint.
//! See: https://platform.openai.com/docs/api-reference

pub mod chat;
pub mod completions;
pub mod embeddings;
pub mod health;
pub mod models;
