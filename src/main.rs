use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use perfection_common::view::LOADING_MESSAGE;
use perfection_common::{analyze, ResultsView, UploadController, UploadState};
use stardew_perfection::{cli, client, config, error, picker, render};
use cli::{Cli, Commands};
use client::{ReqwestTransport, SaveFile};
use config::Config;
use error::{Result, TrackerError};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { save_file, tab, json } => {
            let endpoint = config.resolve_endpoint(cli.base_url.as_deref())?;
            let path = match save_file {
                Some(path) => path,
                None => picker::prompt_save_path()?,
            };
            let save = SaveFile::load(&path)?;
            let transport = ReqwestTransport::new()?;

            let mut controller = UploadController::new();
            let Some(ticket) = controller.begin() else {
                return Ok(());
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(LOADING_MESSAGE);
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = analyze(&transport, &endpoint, &save).await;
            controller.settle(ticket, outcome);
            spinner.finish_and_clear();

            match controller.state() {
                UploadState::Succeeded(summary) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(summary)?);
                    } else {
                        let mut view = ResultsView::new(summary.clone());
                        print!("{}", render::render_results(&mut view, tab));
                    }
                }
                UploadState::Failed(message) => {
                    return Err(TrackerError::AnalysisFailed(message.clone()));
                }
                UploadState::Idle | UploadState::Uploading => {}
            }
        }

        Commands::Health => {
            let endpoint = config.resolve_endpoint(cli.base_url.as_deref())?;
            let transport = ReqwestTransport::new()?;
            let status = transport.check_health(&endpoint).await?;
            println!("✔ {}: {}", endpoint.base_url(), status);
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                let endpoint = config.resolve_endpoint(cli.base_url.as_deref())?;
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.base_url.as_deref().unwrap_or("未設定"));
                println!("  接続先: {}", endpoint.base_url());
            }
        }
    }

    Ok(())
}
