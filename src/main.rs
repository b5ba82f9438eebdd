use anyhow::Result;
use clap::{Parser, Subcommand};

/// jexla - JEXLA Group website and contact API
#[derive(Parser)]
#[command(name = "jexla")]
#[command(about = "JEXLA Group website and contact API", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = jexla::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    jexla::observability::init_observability(
        "jexla",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => jexla::cli::serve(config, host, port).await,
        Commands::Migrate => jexla::migrate::migrate(&config).await,
        Commands::Reset => jexla::migrate::reset(&config).await,
    }
}
