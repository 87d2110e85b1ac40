mod cli;

use anyhow::Context;
use clap::Parser;
use rail_finder::image_pipeline::find_rails;
use rail_finder::logger;

use tracing::info;

use crate::cli::{normalize_legacy_flags, Cli};

fn main() -> anyhow::Result<()> {
    logger::init().context("failed to install log subscriber")?;

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    let show_timings = cli.timings;
    let request = cli.into_request().context("invalid arguments")?;

    info!(
        input = %request.input_path.display(),
        output = %request.resolved_output_path().display(),
        line_width = request.config.line_width,
        "Starting rail_finder..."
    );

    let (detection, timings) = find_rails(&request).map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!(
            "{} stage failed for {}",
            stage,
            request.input_path.display()
        ))
    })?;

    info!(
        slope = detection.centerline.slope,
        intercept = detection.centerline.intercept,
        output = %request.resolved_output_path().display(),
        "Centerline written"
    );

    if show_timings {
        println!("\n{timings}");
    }

    Ok(())
}
