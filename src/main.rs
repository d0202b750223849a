//! FieldMon CLI - generate a field assessment report from a request file
//!
//! # Usage
//!
//! ```bash
//! # Request with embedded collaborator summaries
//! fieldmon --request field.json --pretty
//!
//! # Missing satellite data falls back to a synthetic summary
//! fieldmon --request field.json
//! ```
//!
//! # Environment Variables
//!
//! - `FIELDMON_CONFIG`: Path to a TOML config with crop profiles / thresholds
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use fieldmon::config::{self, AgroConfig};
use fieldmon::engine::AssessmentEngine;
use fieldmon::pipeline::{FieldRequest, ReportPipeline};
use fieldmon::satellite::{StaticSatellite, SyntheticSatellite, SatelliteProvider};
use fieldmon::types::{SatelliteSummary, WeatherSummary};
use fieldmon::weather::{fallback_summary, StaticWeather, WeatherProvider};

#[derive(Parser, Debug)]
#[command(name = "fieldmon")]
#[command(about = "FieldMon agronomic field assessment")]
#[command(version)]
struct CliArgs {
    /// Path to the field request JSON file
    #[arg(short, long, value_name = "FILE")]
    request: PathBuf,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,
}

/// Request file shape: the field request plus optional precomputed
/// collaborator summaries. Absent summaries degrade per the pipeline rules.
#[derive(Debug, Deserialize)]
struct RequestFile {
    #[serde(flatten)]
    request: FieldRequest,
    #[serde(default)]
    weather: Option<WeatherSummary>,
    #[serde(default)]
    satellite: Option<SatelliteSummary>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    config::init(AgroConfig::load());

    let args = CliArgs::parse();
    let text = std::fs::read_to_string(&args.request)
        .with_context(|| format!("reading request file {}", args.request.display()))?;
    let file: RequestFile =
        serde_json::from_str(&text).context("parsing field request JSON")?;

    let weather: Arc<dyn WeatherProvider> = match file.weather {
        Some(summary) => Arc::new(StaticWeather::new(summary)),
        None => {
            info!("No weather summary in request, using fallback conditions");
            Arc::new(StaticWeather::new(fallback_summary()))
        }
    };
    let satellite: Arc<dyn SatelliteProvider> = match file.satellite {
        Some(summary) => Arc::new(StaticSatellite::new(summary)),
        None => {
            info!("No satellite summary in request, generating synthetic indices");
            Arc::new(SyntheticSatellite)
        }
    };

    let pipeline = ReportPipeline::new(weather, satellite, AssessmentEngine::from_global_config());
    let report = pipeline.generate(&file.request).await;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
