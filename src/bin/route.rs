//! Route between two addresses from the command line.
//!
//! ```bash
//! ORS_API_KEY=... cargo run --bin route -- "Uruapan" "Morelia"
//! ORS_API_KEY=... cargo run --bin route -- "Uruapan" "Morelia" --format geojson
//! ```
//!
//! # Environment Variables
//!
//! - `ORS_API_KEY`: OpenRouteService key (required)
//! - `ORS_BASE_URL`, `ORS_PROFILE`, `ORS_TIMEOUT_SECS`: client overrides
//! - `RUST_LOG`: Log filter directives (default: info)

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use route_planner::ors::{OrsClient, OrsConfig};
use route_planner::planner::RoutePlanner;
use route_planner::render::{GeoJsonRenderer, RouteRenderer, TextRenderer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Geojson,
}

/// Driving directions between two addresses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Origin address (e.g. "Uruapan")
    origin: String,

    /// Destination address (e.g. "New York")
    destination: String,

    /// Travel profile, overrides ORS_PROFILE
    #[arg(short, long)]
    profile: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print totals and segments without turn-by-turn instructions
    #[arg(long)]
    summary_only: bool,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let mut config = OrsConfig::from_env()?;
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    let client = OrsClient::new(config)?;
    info!(
        base_url = %client.config().base_url,
        profile = %client.config().profile,
        "using OpenRouteService"
    );
    let mut planner = RoutePlanner::new(&client, &client);
    let route = planner.calculate(&cli.origin, &cli.destination)?.clone();

    match cli.format {
        Format::Text => {
            let renderer = TextRenderer {
                summary_only: cli.summary_only,
            };
            println!("{}", renderer.render(&route, planner.markers()));
        }
        Format::Geojson => {
            let value = GeoJsonRenderer.render(&route, planner.markers());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
