//! cyberscore - URL trust scoring from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cyberscore_cli::run().await
}
