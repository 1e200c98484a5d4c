use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::info;

use youtube_automation::app;
use youtube_automation::common::clock;
use youtube_automation::config::settings::AppConfig;
use youtube_automation::infrastructure::logfile;
use youtube_automation::modules::pipeline::render;
use youtube_automation::modules::pipeline::service::PipelineService;
use youtube_automation::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "youtube-automation")]
#[command(about = "Runs the YouTube content automation pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the pipeline once, print the report and append the completion line
    Run,
    /// Serve the browser test page and the JSON API
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Diagnostics go to stderr; stdout is reserved for the run report that
    // cron mails around.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "youtube_automation=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new().context("Missing automation configuration")?;

    match cli.command {
        Command::Run => run_once(config).await,
        Command::Serve => serve(config).await,
    }
}

async fn run_once(config: AppConfig) -> Result<()> {
    let report = PipelineService::run(&config).await;
    print!("{}", render::plain_text(&report));

    logfile::append_completion(&config.log_file, clock::now_local())
        .with_context(|| format!("Failed to append to {}", config.log_file.display()))?;
    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = app::create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
