use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use chatpad::tui::{self, Options};

#[derive(Parser)]
#[command(name = "chatpad", version, about = "Minimal single-session chat pad")]
struct Cli {
    /// Echo each sent message back as a simulated incoming message
    #[arg(long)]
    echo: bool,
    /// Delay in milliseconds before a simulated echo arrives
    #[arg(long, default_value_t = 600)]
    echo_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::run(Options {
        echo: cli.echo,
        echo_delay: Duration::from_millis(cli.echo_delay_ms),
    })
    .await
}
