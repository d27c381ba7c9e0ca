use anyhow::Result;
use kernel_notify::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
