use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crease_client::ReqwestFetcher;
use crease_core::config::{DEFAULT_MATCH_ID, DEFAULT_USER_AGENT};
use crease_core::sources::DEFAULT_SOURCE_TEMPLATES;
use crease_core::{FallbackResolver, MatchId, SourceList, extract};

#[derive(Parser)]
#[command(name = "crease", version, about = "Live cricket score extraction for overlays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pattern extractor on a saved page (reads stdin without --file)
    Extract {
        /// Path to a saved scorecard page
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Resolve the match once against the live candidate sources
    Probe {
        #[command(flatten)]
        sources: SourceArgs,

        /// User-Agent sent to the sources
        #[arg(long, env = "CREASE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
        user_agent: String,

        /// Per-request timeout in seconds
        #[arg(long, env = "CREASE_FETCH_TIMEOUT_SECS", default_value_t = 10)]
        timeout: u64,
    },

    /// Print the candidate source URLs in priority order
    Sources {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Match identifier on the source site
    #[arg(short, long, env = "MATCH_ID", default_value = DEFAULT_MATCH_ID)]
    match_id: String,

    /// URL template with a {match_id} placeholder; repeat in priority order
    /// (defaults to the built-in scorecard locations)
    #[arg(short, long = "source", env = "CREASE_SOURCES", value_delimiter = ',')]
    sources: Vec<String>,
}

impl SourceArgs {
    fn build(&self) -> Result<SourceList> {
        let match_id = MatchId::new(&self.match_id)?;
        let list = if self.sources.is_empty() {
            SourceList::from_templates(DEFAULT_SOURCE_TEMPLATES, &match_id)?
        } else {
            SourceList::from_templates(&self.sources, &match_id)?
        };
        Ok(list)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("crease=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { file } => cmd_extract(file)?,
        Commands::Probe {
            sources,
            user_agent,
            timeout,
        } => cmd_probe(sources.build()?, &user_agent, timeout).await?,
        Commands::Sources { sources } => {
            for (i, url) in sources.build()?.urls().iter().enumerate() {
                println!("{}. {url}", i + 1);
            }
        }
    }

    Ok(())
}

fn cmd_extract(file: Option<PathBuf>) -> Result<()> {
    let page = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read page from stdin")?;
            buf
        }
    };

    tracing::info!(bytes = page.len(), "Extracting match state");
    let state = extract(&page);
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}

async fn cmd_probe(sources: SourceList, user_agent: &str, timeout: u64) -> Result<()> {
    anyhow::ensure!(timeout > 0, "--timeout must be at least 1 second");

    let fetcher = ReqwestFetcher::with_options(user_agent, Duration::from_secs(timeout))?;
    let resolver = FallbackResolver::new(fetcher, sources);

    tracing::info!(candidates = resolver.sources().len(), "Probing candidate sources");
    let resolution = resolver.resolve().await?;

    let mut doc = serde_json::to_value(&resolution.state)?;
    doc["from"] = serde_json::Value::String(resolution.source.clone());
    println!("{}", serde_json::to_string_pretty(&doc)?);

    tracing::info!(source = %resolution.source, "Resolved");
    Ok(())
}
