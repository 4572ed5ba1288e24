use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use notion_store::NotionStore;
use tube_digest::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, yt::transcript::TranscriptClient,
    VideoSummaryProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "tube-digest", about = "Summarize Notion-tracked YouTube videos")]
struct Cli {
    /// Notion database holding the video records
    #[arg(long, env = "NOTION_DATABASE_ID")]
    notion_db_id: String,

    /// File holding the Notion integration token; the NOTION_TOKEN
    /// environment variable takes precedence when set
    #[arg(long, env = "NOTION_TOKEN_FILE", default_value = "/etc/notion/secrets.txt")]
    notion_token_file: PathBuf,

    /// LLM model identifier
    #[arg(long, env = "LLM_MODEL", default_value = "ollama/llama3.2")]
    model: String,

    /// LLM API base URL
    #[arg(long, env = "LLM_API_BASE", default_value = "http://localhost:11434")]
    api_base: String,

    /// Bearer token for the LLM endpoint, if it requires one
    #[arg(long, env = "LLM_API_KEY")]
    api_key: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, ignore_case = true, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            // tracing has no level above error
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

fn read_notion_token(path: &Path) -> anyhow::Result<String> {
    if let Ok(token) = std::env::var("NOTION_TOKEN") {
        let token = token.trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let token = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read Notion token from {}", path.display()))?
        .trim()
        .to_string();
    anyhow::ensure!(
        !token.is_empty(),
        "Notion token file {} is empty",
        path.display()
    );
    Ok(token)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber(cli.log_level.as_directive())?;

    let token = read_notion_token(&cli.notion_token_file)?;

    tracing::info!(model = %cli.model, api_base = %cli.api_base, "Starting tube-digest run");

    let mut llm = OpenAIClient::new(&cli.model, &cli.api_base);
    if let Some(api_key) = cli.api_key {
        llm = llm.with_api_key(api_key);
    }

    let processor = VideoSummaryProcessorBuilder::new()
        .store(NotionStore::new(token))
        .transcripts(TranscriptClient::new())
        .summarizer(llm)
        .build();

    let result = processor.process(&cli.notion_db_id).await?;

    for failure in &result.failed {
        tracing::warn!(
            page_id = %failure.page_id,
            url = %failure.url,
            error = %failure.error,
            "Record was not processed"
        );
    }
    tracing::info!(
        processed = result.processed(),
        completed = result.completed.len(),
        failed = result.failed.len(),
        "Run complete"
    );

    Ok(())
}
