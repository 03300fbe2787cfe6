//! Interactive chat surface.
//!
//! One request in flight per user action: each send is awaited before the
//! next line is read. The session history lives for the duration of the
//! process and is never persisted.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use hookchat_common::config::WEBHOOK_URL_ENV;
use hookchat_common::{validate_url, Config, Relay, Session};

pub async fn run(config: &Config, message: Option<String>, url: Option<String>) -> Result<()> {
    let endpoint = url.unwrap_or_else(|| config.webhook_url.clone());

    // Startup gate: the chat surface only exists for a valid endpoint.
    // send_message re-validates on every call regardless.
    if let Err(reason) = validate_url(&endpoint) {
        print_setup_guidance(&reason.to_string());
        return Ok(());
    }

    let relay = Relay::new(endpoint);
    let mut session = Session::new();
    tracing::debug!(endpoint = %relay.webhook_url(), "chat session started");

    if let Some(message) = message {
        let reply = relay.send_message(&message, &mut session).await;
        println!("{reply}");
        return Ok(());
    }

    println!("🤖 hookchat — relaying to {}", relay.webhook_url());
    println!("Type a message; `exit` or `quit` to leave.");
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", style("you>").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let reply = relay.send_message(line, &mut session).await;
        println!("{} {reply}", style("bot>").green().bold());
    }

    Ok(())
}

fn print_setup_guidance(reason: &str) {
    println!("⚠️  Configuration required: {reason}");
    println!();
    println!("Before using the chat you need to:");
    println!("  1. Create a workflow with a webhook trigger that accepts");
    println!("     {{\"message\", \"history\"}} and replies with {{\"response\"}}");
    println!("  2. Set the {WEBHOOK_URL_ENV} environment variable,");
    println!("     or put \"webhook_url\" in ~/.hookchat/config.json");
    println!();
    println!("Run `hookchat test <url>` to check connectivity first.");
}
