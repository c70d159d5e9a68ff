/// Bookshelf - terminal book inventory manager
use bookshelf_client::HttpBookService;
use bookshelf_manager::{shell, BookManager, Settings};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Manage a book inventory through its REST API", long_about = None)]
struct Cli {
    /// Base URL of the book API (the /bookapi suffix is added automatically)
    #[arg(long, env = "BOOKSHELF_API_URL")]
    api_url: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the rendered screen owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "bookshelf=info,bookshelf_client=info,bookshelf_manager=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref(), cli.api_url)?;
    settings.validate()?;

    tracing::info!("Starting Bookshelf");
    tracing::info!("API: {}", settings.api_url);

    let service = HttpBookService::new(settings.client_config())?;
    let manager = BookManager::new(Arc::new(service));
    manager.mount().await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    shell::run(&manager, stdin, &mut stdout).await?;

    tracing::info!("Bye");
    Ok(())
}
