//! Wellbeing Coach - CLI entry point

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::*;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wellbeing_coach::{
    advice::{AdviceService, GeminiClient},
    cli::{Args, Commands},
    coach::CoachSession,
    config::Config,
    dashboard::{self, DashboardOptions},
    display,
    stats::{snapshot_for, week_label},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.verbosity().log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    args.apply_to(&mut config);
    config.validate()?;
    display::set_color(config.display.color_output);
    debug!(?config, "configuration loaded");

    let range = config.coach.default_range;

    match args.command() {
        Commands::Stats => {
            print!("{}", display::render_stats(&snapshot_for(range)));
        }
        Commands::Trends => {
            let label = week_label(Local::now().date_naive());
            print!("{}", display::render_trends(&snapshot_for(range), &label));
        }
        Commands::Advice { json } => {
            let client = GeminiClient::from_config(&config.gemini)?;
            info!(model = client.model(), base_url = client.base_url(), "requesting advice");
            let service = AdviceService::new(Arc::new(client));

            let spinner = (config.display.show_spinner && !json).then(display::advice_spinner);
            let outcome = service.request_advice(&snapshot_for(range)).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for (i, tip) in outcome.tips().iter().enumerate() {
                    println!("{}. {}", i + 1, tip);
                }
                if let Some(cause) = outcome.cause() {
                    eprintln!("(offline tips: {})", cause);
                }
            }
        }
        Commands::Dashboard => {
            let client = GeminiClient::from_config(&config.gemini)?;
            if !client.has_api_key() {
                info!(
                    var = %config.gemini.api_key_env,
                    "no API key set, the coach will use offline tips"
                );
            }
            let model = client.model().to_string();
            let session = CoachSession::new(AdviceService::new(Arc::new(client)), &config.coach);
            let options = DashboardOptions {
                model,
                history_path: dirs::home_dir()
                    .map(|home| home.join(".wellbeing-coach").join("history")),
            };
            dashboard::run(session, options).await?;
        }
        Commands::Config { write } => {
            let path = args.config.clone().or_else(Config::default_path);
            if write {
                let path = path.context("No config path: pass --config or set HOME")?;
                config.save(&path)?;
                println!("{} {}", "Wrote".green(), path.display());
            } else {
                if let Some(path) = path {
                    println!("# {}", path.display());
                }
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
