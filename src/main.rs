mod cli;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands, CommonArgs, ThresholdArgs};
use truck_factor::Config;
use truck_factor::{doa, languages, truck};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(
    common: &CommonArgs,
    thresholds: Option<&ThresholdArgs>,
) -> Result<(PathBuf, Config), Box<dyn Error>> {
    let target = common.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config =
        Config::load(common.config.as_deref(), &target)?.apply(&common.overrides(thresholds));
    config.validate()?;
    Ok((target, config))
}

fn dispatch(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Factor { common, thresholds } => {
            let (target, config) = load_config(&common, Some(&thresholds))?;
            truck::run(&target, &config, common.rev.as_deref(), common.json)
        }
        Commands::Doa { common, top } => {
            let (target, config) = load_config(&common, None)?;
            doa::run(&target, &config, common.rev.as_deref(), common.json, top)
        }
        Commands::Languages { common } => {
            let (target, config) = load_config(&common, None)?;
            languages::run(&target, &config, common.rev.as_deref(), common.json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
