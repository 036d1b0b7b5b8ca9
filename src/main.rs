use clap::Parser;
use console::style;
use log::LevelFilter;
use phonebook::cli::Cli;
use phonebook::commands;
use phonebook::core::config::Config;

fn main() {
    match run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::debug!("exiting after fatal error: {}", e);
            eprintln!("{} {}", style("•").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .parse_default_env()
        .init();

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.db, cli.max_attempts);
    log::debug!("using {:?}", config);

    let rt = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let result = rt.block_on(commands::dispatch(cli.command, &config));
    // The interactive session thread may still be blocked on stdin.
    rt.shutdown_background();
    result
}
