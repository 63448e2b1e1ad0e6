//! Record Time Saved - ツールごとの節約時間を記録・集計するCLI

mod cli;
mod config;
mod database;
mod error;
mod logging;
mod record;
mod report;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
