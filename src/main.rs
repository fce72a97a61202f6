use clap::Parser;
use cli::Cli;
use config::Config;
use dotenvy::dotenv;
use env_logger::Target;
use log::LevelFilter;
use sync::{sync, InvocationOptions};

mod cli;
mod config;
mod err;
mod sync;

fn main() -> anyhow::Result<()> {
    let _ = dotenv();

    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("thetawave_assets", args.verbose.log_level_filter())
        .format_timestamp(None)
        .format_module_path(false)
        .target(Target::Stdout)
        .try_init()?;

    let config = Config::read()?;
    sync(InvocationOptions::from(&args), &config)
}
