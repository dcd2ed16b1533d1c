use anyhow::Result;
use clap::{Parser, Subcommand};

/// vitrine - About & Contact site for a digital services studio
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Serves the studio's About and Contact pages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = vitrine::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    vitrine::observability::init_observability(
        "vitrine",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => vitrine::cli::server::serve(config, host, port).await,
    }
}
