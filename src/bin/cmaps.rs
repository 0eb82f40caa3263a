use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use dataset_gen::colormaps;

#[derive(Parser, Debug)]
#[command(name = "cmaps", version, about = "Emit the colormap dataset as JSON on stdout")]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();
    dataset_gen::init_tracing();

    let dataset = colormaps::assemble()?;
    info!("Assembled {} colormaps", dataset.len());

    // Output is all-or-nothing: serialize fully before touching stdout.
    let json = serde_json::to_string(&dataset)?;
    std::io::stdout().write_all(json.as_bytes())?;
    Ok(())
}
