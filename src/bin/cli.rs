//! TrafficWatch CLI
//!
//! Command-line client for a running TrafficWatch API:
//! - Show the current traffic sample
//! - Show signal phases
//! - Check server status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trafficwatch::simulation::{SignalStatus, TrafficRecord};

#[derive(Parser)]
#[command(name = "trafficwatch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query a running TrafficWatch API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8000", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest sample of every monitored edge
    Traffic,

    /// Show the current phase of every signal
    Signals,

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::Traffic => {
            let response = client.get(format!("{}/api/traffic", api_url)).send().await?;

            if !response.status().is_success() {
                eprintln!("Failed to fetch traffic data: {}", response.status());
                std::process::exit(1);
            }

            let records: Vec<TrafficRecord> = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_traffic_table(&records);
            }
        }

        Commands::Signals => {
            let response = client.get(format!("{}/api/signals", api_url)).send().await?;

            if !response.status().is_success() {
                eprintln!("Failed to fetch signals: {}", response.status());
                std::process::exit(1);
            }

            let signals: Vec<SignalStatus> = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&signals)?);
            } else {
                println!("{:<10} {:<20} {:<8} {}", "ID", "Name", "State", "Duration");
                println!("{}", "-".repeat(50));
                for signal in signals {
                    println!(
                        "{:<10} {:<20} {:<8} {}s",
                        signal.id, signal.name, signal.state, signal.duration_s
                    );
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("TrafficWatch v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Provider:   {}",
                        health["provider"].as_str().unwrap_or("unknown")
                    );
                    if let Some(edges) = health["edges"].as_u64() {
                        println!("Edges:      {}", edges);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to TrafficWatch API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin trafficwatch");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = trafficwatch::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_traffic_table(records: &[TrafficRecord]) {
    if records.is_empty() {
        println!("No traffic data");
        return;
    }

    println!(
        "{:<10} {:<10} {:>9} {:>8} {:>9} {:>8} {:<6}",
        "From", "To", "Dist (m)", "Time (s)", "km/h", "Vehicles", "Risk"
    );
    println!("{}", "-".repeat(68));

    for r in records {
        let marker = if r.congestion_risk.is_incident() { " !" } else { "" };
        println!(
            "{:<10} {:<10} {:>9.0} {:>8.0} {:>9.1} {:>8} {}{}",
            r.from,
            r.to,
            r.distance_m,
            r.duration_s,
            r.avg_speed_kmh,
            r.vehicle_count,
            r.congestion_risk,
            marker
        );
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
