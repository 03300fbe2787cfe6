#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::Result;
use clap::{Parser, Subcommand};

mod chat;
mod doctor;

use hookchat_common::{logging, validate_url, Config};

/// `hookchat` - chat front-end for workflow-automation webhooks.
#[derive(Parser, Debug)]
#[command(name = "hookchat")]
#[command(version)]
#[command(about = "Relay chat messages to a workflow-automation webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the configured webhook
    Chat {
        /// Single message mode (don't enter interactive mode)
        #[arg(short, long)]
        message: Option<String>,

        /// Override the configured webhook URL for this run
        #[arg(long)]
        url: Option<String>,
    },

    /// Test connectivity to a webhook endpoint
    Test {
        /// URL to probe (defaults to the configured webhook)
        url: Option<String>,
    },

    /// Show configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init_logging(&config.log_level, &config.log_format);

    match cli.command {
        Commands::Chat { message, url } => chat::run(&config, message, url).await,
        Commands::Test { url } => doctor::run(&config, url).await,
        Commands::Status => {
            print_status(&config);
            Ok(())
        }
    }
}

fn print_status(config: &Config) {
    println!("🤖 hookchat status");
    println!();
    println!("Version:  {}", env!("CARGO_PKG_VERSION"));
    println!("Config:   {}", config.config_path.display());
    println!(
        "Webhook:  {}",
        if config.is_configured() {
            config.webhook_url.as_str()
        } else {
            "(not set)"
        }
    );
    match validate_url(&config.webhook_url) {
        Ok(()) => println!("Endpoint: ✅ valid"),
        Err(reason) => println!("Endpoint: ❌ {reason}"),
    }
}
