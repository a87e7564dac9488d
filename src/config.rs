//! Configuration parsing and validation for the CLI
//!
//! This module handles command-line argument parsing and validation using
//! clap. It defines the main configuration structure used by the binary.
use anyhow::anyhow;
use clap::{Parser, Subcommand};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the OpenAI-compatible server, including any path prefix
    /// the API lives under (such as /v1).
    #[arg(
        short = 'u',
        long,
        env = "INHOUSE_BASE_URL",
        default_value = "http://localhost:8000/v1"
    )]
    pub base_url: Url,

    /// API key sent as a bearer token with every request.
    #[arg(short = 'k', long, env = "INHOUSE_API_KEY")]
    pub api_key: Option<String>,

    /// Model used for chat and text completions.
    #[arg(short = 'm', long, env = "INHOUSE_MODEL", default_value = "ai/smollm2")]
    pub model: String,

    /// Model used for embeddings.
    #[arg(
        long,
        env = "INHOUSE_EMBEDDING_MODEL",
        default_value = "text-embedding-ada-002"
    )]
    pub embedding_model: String,

    /// With no subcommand, the binary runs a demo flow: one chat completion
    /// followed by one embeddings request, both printed.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a chat completion request and print the assistant message.
    Chat {
        /// The user message.
        prompt: String,

        /// System message to prepend to the conversation.
        #[arg(short, long)]
        system: Option<String>,

        /// Sampling temperature (0-2).
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Maximum number of tokens to generate.
        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Send a legacy text completion request and print the completion.
    Complete {
        /// The prompt to complete.
        prompt: String,

        /// Sampling temperature (0-2).
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Maximum number of tokens to generate.
        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Embed one or more inputs and print one vector per line.
    Embed {
        /// Texts to embed.
        #[arg(required = true)]
        input: Vec<String>,
    },

    /// List the models the server exposes.
    Models,

    /// Query the server's health endpoint.
    Health,
}

impl Config {
    pub fn validate(self) -> Result<Self, anyhow::Error> {
        match self.base_url.scheme() {
            "http" | "https" => Ok(self),
            other => Err(anyhow!(
                "Base URL scheme '{other}' is not supported, use http or https"
            )),
        }
    }
}
