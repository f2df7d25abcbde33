//! mkmd Binary Entry Point

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = mkmd_cli::config_file::load_config().and_then(|config| {
        mkmd_cli::run(std::env::args().skip(1), &config, &mut std::io::stdout())
    });

    match result {
        Ok(outcome) => {
            mkmd_cli::after_run(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
