//! imposc CLI
//!
//! Command-line client for the imposc API:
//! - List charts
//! - Show one chart
//! - Read or clear the notification log
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imposc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the imposc chart catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all charts
    List,

    /// Show a single chart
    Show {
        /// Chart name
        name: String,
    },

    /// Show the notification log
    Messages,

    /// Clear the notification log
    ClearMessages,

    /// Generate default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let url = format!("{}/api/v1/charts", cli.api_url);
            let response = send(client.get(url), &cli.api_url).await;

            if !response.status().is_success() {
                eprintln!("Failed to fetch charts: {}", response.status());
                std::process::exit(1);
            }

            let data: serde_json::Value = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let charts = data["charts"].as_array().cloned().unwrap_or_default();
                if charts.is_empty() {
                    println!("No charts available.");
                } else {
                    println!("{:<14} {}", "Name", "Description");
                    println!("{}", "-".repeat(60));
                    for chart in charts {
                        println!(
                            "{:<14} {}",
                            chart["name"].as_str().unwrap_or("-"),
                            chart["description"].as_str().unwrap_or("-")
                        );
                    }
                }
            }
        }

        Commands::Show { name } => {
            let url = format!(
                "{}/api/v1/charts/{}",
                cli.api_url,
                urlencoding::encode(&name)
            );
            let response = send(client.get(url), &cli.api_url).await;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                eprintln!("Chart '{}' not found", name);
                std::process::exit(1);
            }
            if !response.status().is_success() {
                eprintln!("Failed to fetch chart: {}", response.status());
                std::process::exit(1);
            }

            let chart: serde_json::Value = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{}", chart["name"].as_str().unwrap_or("-"));
                println!("  {}", chart["description"].as_str().unwrap_or("-"));
            }
        }

        Commands::Messages => {
            let url = format!("{}/api/v1/messages", cli.api_url);
            let response = send(client.get(url), &cli.api_url).await;

            if !response.status().is_success() {
                eprintln!("Failed to fetch messages: {}", response.status());
                std::process::exit(1);
            }

            let data: serde_json::Value = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let messages = data["messages"].as_array().cloned().unwrap_or_default();
                if messages.is_empty() {
                    println!("No messages.");
                }
                for message in messages {
                    println!(
                        "{}  {}",
                        message["at"].as_str().unwrap_or("-"),
                        message["text"].as_str().unwrap_or("-")
                    );
                }
            }
        }

        Commands::ClearMessages => {
            let url = format!("{}/api/v1/messages", cli.api_url);
            let response = send(client.delete(url), &cli.api_url).await;

            if !response.status().is_success() {
                eprintln!("Failed to clear messages: {}", response.status());
                std::process::exit(1);
            }
            println!("Messages cleared");
        }

        Commands::InitConfig { output } => {
            let config = imposc::config::generate_default_config();

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

/// Send a request, exiting with a hint when the server is unreachable
async fn send(request: reqwest::RequestBuilder, api_url: &str) -> reqwest::Response {
    match request.send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Cannot connect to imposc API at {}", api_url);
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Make sure the imposc API server is running:");
            eprintln!("  cargo run --bin imposc-api");
            std::process::exit(1);
        }
    }
}
