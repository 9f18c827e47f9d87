//! Satcurve server binary.

use clap::Parser;
use satcurve_api::{server::run_server, state::AppState};

/// Satcurve chart generator web server
#[derive(Parser, Debug)]
#[command(name = "satcurve-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    run_server(AppState::new(), &args.host, args.port).await
}
