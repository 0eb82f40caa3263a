use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use dataset_gen::model_costs::{self, PRICES_URL};

#[derive(Parser, Debug)]
#[command(
    name = "model-costs",
    version,
    about = "Emit the model pricing dataset as JSON on stdout"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();
    dataset_gen::init_tracing();

    let records = model_costs::assemble(PRICES_URL).await?;
    info!("Assembled {} pricing records", records.len());

    // Output is all-or-nothing: serialize fully before touching stdout.
    let json = serde_json::to_string(&records)?;
    std::io::stdout().write_all(json.as_bytes())?;
    Ok(())
}
