mod check;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use minpaku_core::AppConfig;
use minpaku_geocode::{Geocoder, GeocoderConfig};
use minpaku_zoning::{ZoningConfig, ZoningResolver};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "minpaku-cli")]
#[command(about = "Geocode Japanese addresses and look up their zoning category")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve an address to coordinates
    Geocode { address: String },
    /// Resolve coordinates to the nearest address
    Reverse {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Look up the zoning category at a coordinate
    Zoning {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Geocode an address, then look up zoning at the result
    Check { address: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = minpaku_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.command, &config).await
}

async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Geocode { address } => {
            let geocoder = Geocoder::new(&GeocoderConfig::from_app_config(config))?;
            match geocoder.geocode(&address).await {
                Ok(position) => print_json(&position)?,
                Err(failure) => {
                    print_json(&failure)?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Reverse { lat, lon } => {
            let geocoder = Geocoder::new(&GeocoderConfig::from_app_config(config))?;
            let Some(position) = geocoder.reverse_geocode(lat, lon).await else {
                print_json(&serde_json::Value::Null)?;
                return Ok(ExitCode::FAILURE);
            };
            print_json(&position)?;
        }
        Commands::Zoning { lat, lon } => {
            let resolver = ZoningResolver::new(&ZoningConfig::from_app_config(config))?;
            print_json(&resolver.resolve_zoning(lat, lon).await)?;
        }
        Commands::Check { address } => {
            let geocoder = Geocoder::new(&GeocoderConfig::from_app_config(config))?;
            let resolver = ZoningResolver::new(&ZoningConfig::from_app_config(config))?;
            match check::run_check(&geocoder, &resolver, &address).await {
                Ok(report) => print_json(&report)?,
                Err(failure) => {
                    print_json(&failure)?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
