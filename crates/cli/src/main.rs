use std::process::ExitCode;

use clap::Parser;
use log::debug;
use simple_query_cli::cli_args::Args;
use simple_query_cli::lookup;
use simple_query_core::config;
use simple_query_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let settings = config::load_settings(&config_path)?;

    let output = lookup::run(&args, &settings)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
