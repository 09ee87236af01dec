use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use mereview_display::{DisplayModel, DisplayOptions};
use mereview_gateway::{Gateway, GatewayConfig};
use mereview_shared::{ApiResponse, MemberId, Review};

#[derive(Parser)]
#[command(name = "mereview")]
#[command(about = "MeReview client - member lookups and review-card rendering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a member's profile page
    Member { id: MemberId },
    /// List members the given member follows
    Following { id: MemberId },
    /// List members following the given member
    Followers { id: MemberId },
    /// Show a member's tiers for one genre
    Tiers { id: MemberId, genre: i64 },
    /// Render the display model of a review read from a JSON file
    Card { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    mereview_shared::telemetry::init_tracing("mereview-cli");

    let cli = Cli::parse();
    let config = GatewayConfig::load()?;

    match cli.command {
        Commands::Member { id } => print_json(&gateway(&config)?.get_member(id).await?)?,
        Commands::Following { id } => print_json(&gateway(&config)?.get_following(id).await?)?,
        Commands::Followers { id } => print_json(&gateway(&config)?.get_followers(id).await?)?,
        Commands::Tiers { id, genre } => print_json(&gateway(&config)?.get_by_genre(id, genre).await?)?,
        Commands::Card { path } => {
            let options = DisplayOptions::load(config.api_url.clone());
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let review = serde_json::from_str::<ApiResponse<Review>>(&raw)
                .with_context(|| format!("{} is not a review", path.display()))?
                .into_inner();
            print_json(&DisplayModel::from_review(&review, &options))?;
        }
    }

    Ok(())
}

fn gateway(config: &GatewayConfig) -> anyhow::Result<Gateway> {
    let gateway = Gateway::from_config(config)?;
    tracing::debug!(api_url = %config.api_url, "gateway ready");
    Ok(gateway)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
