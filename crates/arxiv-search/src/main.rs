//! arXiv Search - Entry Point
//!
//! Runs the MCP stdio server by default; the other subcommands run one tool
//! from the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_search::{
    ArxivClient,
    config::{Config, DOWNLOAD_DIR_ENV},
    models::{Category, ExportFormat},
    server::McpServer,
    tools::ToolContext,
};

#[derive(Parser, Debug)]
#[command(name = "arxiv-search")]
#[command(about = "Search arXiv papers, copy citations and download PDFs")]
#[command(version)]
struct Cli {
    /// Base directory for downloaded PDFs
    #[arg(long, global = true, env = DOWNLOAD_DIR_ENV)]
    download_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,

    /// Search arXiv and print the ranked results
    Search {
        /// Search text
        query: String,

        /// Subject category (all, cs, math, physics, q-bio, q-fin, stat, eess, econ)
        #[arg(long, short, default_value = "all")]
        category: Category,

        /// Print JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// Copy a paper's citation to the clipboard
    Cite {
        /// arXiv id or URL
        id: String,

        /// Citation format
        #[arg(long, short, default_value = "bibtex")]
        format: ExportFormat,
    },

    /// Download a paper's PDF
    Download {
        /// arXiv id or URL
        id: String,
    },

    /// Open a paper in the browser
    Open {
        /// arXiv id or URL
        id: String,

        /// Open the PDF instead of the abstract page
        #[arg(long)]
        pdf: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries protocol messages
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.download_dir {
        config = config.with_download_dir(dir);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        download_dir = %config.download_dir.display(),
        "Starting arXiv search"
    );

    let client = Arc::new(ArxivClient::new(&config)?);
    let server = McpServer::new(ToolContext::new(client, &config));

    let (tool, arguments) = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => return server.run_stdio().await,
        Command::Search { query, category, json } => (
            "arxiv_search",
            serde_json::json!({
                "query": query,
                "category": category,
                "responseFormat": if json { "json" } else { "markdown" },
            }),
        ),
        Command::Cite { id, format } => {
            ("arxiv_copy_citation", serde_json::json!({ "id": id, "format": format }))
        }
        Command::Download { id } => ("arxiv_download_pdf", serde_json::json!({ "id": id })),
        Command::Open { id, pdf } => (
            "arxiv_open",
            serde_json::json!({ "id": id, "target": if pdf { "pdf" } else { "page" } }),
        ),
    };

    let tool = server
        .get_tool(tool)
        .ok_or_else(|| anyhow::anyhow!("tool not registered: {tool}"))?;
    let output = tool
        .execute(server.context(), arguments)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_user_message()))?;
    println!("{output}");

    Ok(())
}
