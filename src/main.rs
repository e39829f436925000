//! Business Identifier Worker Entry Point
//!
//! Loads configuration, builds the identifier service, and starts the HTTP server.

use bizid_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
