mod config;

use anyhow::Context as _;
use clap::Parser as _;
use config::{Command, Config};
use inhouse::Client;
use inhouse::client::HttpClient;
use inhouse::endpoint::Endpoint;
use inhouse::schemas::chat::{ChatCompletionRequest, ChatMessage};
use inhouse::schemas::completions::CompletionRequest;
use inhouse::schemas::embeddings::{EmbeddingInput, EmbeddingsRequest};
use tracing::info;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse().validate()?;
    info!("Talking to model runner at {}", config.base_url);

    let endpoint = Endpoint::new(config.base_url.clone(), config.api_key.clone())?;
    let client = Client::new(endpoint);

    match config.command.clone() {
        None => run_demo(&client, &config).await,
        Some(Command::Chat {
            prompt,
            system,
            temperature,
            max_tokens,
        }) => {
            let mut messages = Vec::new();
            if let Some(system) = system {
                messages.push(ChatMessage::system(system));
            }
            messages.push(ChatMessage::user(prompt));

            let request = ChatCompletionRequest::builder()
                .model(config.model.clone())
                .messages(messages)
                .maybe_temperature(temperature)
                .maybe_max_tokens(max_tokens)
                .build();

            let response = client.chat_completion(&request).await?;
            println!(
                "{}",
                response
                    .first_content()
                    .context("chat completion returned no choices")?
            );
            Ok(())
        }
        Some(Command::Complete {
            prompt,
            temperature,
            max_tokens,
        }) => {
            let request = CompletionRequest::builder()
                .model(config.model.clone())
                .prompt(prompt)
                .maybe_temperature(temperature)
                .maybe_max_tokens(max_tokens)
                .build();

            let response = client.completion(&request).await?;
            println!(
                "{}",
                response
                    .first_text()
                    .context("completion returned no choices")?
            );
            Ok(())
        }
        Some(Command::Embed { mut input }) => {
            let input = if input.len() == 1 {
                EmbeddingInput::Single(input.remove(0))
            } else {
                EmbeddingInput::Multiple(input)
            };
            let request = EmbeddingsRequest::builder()
                .model(config.embedding_model.clone())
                .input(input)
                .build();

            let response = client.embeddings(&request).await?;
            for data in &response.data {
                println!("{}", serde_json::to_string(&data.embedding)?);
            }
            Ok(())
        }
        Some(Command::Models) => {
            let response = client.list_models().await?;
            for model in &response.data {
                println!("{}", model.id);
            }
            Ok(())
        }
        Some(Command::Health) => {
            let report = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_healthy() {
                anyhow::bail!("model runner reported unhealthy status");
            }
            Ok(())
        }
    }
}

/// Default flow: one chat completion, then one embeddings request, both
/// printed. A quick end-to-end check that a runner is answering.
async fn run_demo<T: HttpClient>(client: &Client<T>, config: &Config) -> anyhow::Result<()> {
    let request = ChatCompletionRequest::builder()
        .model(config.model.clone())
        .messages(vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("What is Docker Model Runner?"),
        ])
        .build();

    let response = client.chat_completion(&request).await?;
    println!(
        "{}",
        response
            .first_content()
            .context("chat completion returned no choices")?
    );

    let request = EmbeddingsRequest::builder()
        .model(config.embedding_model.clone())
        .input(EmbeddingInput::Single("Hello, world!".to_string()))
        .build();

    let response = client.embeddings(&request).await?;
    let first = response
        .data
        .first()
        .context("embeddings response contained no data")?;
    println!("{}", serde_json::to_string(&first.embedding)?);

    Ok(())
}
