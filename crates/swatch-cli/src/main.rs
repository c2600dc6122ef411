mod check;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::check::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "swatch")]
#[command(about = "Report which Shopify storefront products offer a color option")]
struct Cli {
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Env file to load instead of `.env.local` and `.env`.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = check::run(cli.env_file.as_deref(), cli.format).await {
        tracing::debug!(error = ?err, "color check aborted");
        eprintln!("{err}");
    }
}
