use anyhow::Result;
use clap::Parser;
use weatherwise::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weatherwise::run(cli).await
}
