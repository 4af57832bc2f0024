use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use synpuf_link::Pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "synpuf-link",
    version,
    about = "Link synthetic Medicare inpatient claims to yearly beneficiary summaries"
)]
struct Cli {
    /// Pipeline configuration file (.yaml, .yml, .json, .toml or .ron)
    #[arg(short, long)]
    config: PathBuf,

    /// Log intermediate table shapes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let pipeline = Pipeline::try_from(cli.config)?;
    let merged = pipeline.run()?;
    info!("Finished with a merged table of shape {:?}", merged.shape());
    Ok(())
}
