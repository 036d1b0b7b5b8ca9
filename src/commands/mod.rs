use crate::cli::Cmd;
use crate::core::config::Config;

pub mod add;
pub mod interactive;
pub mod list;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Option<Cmd>, config: &Config) -> Result<(), String> {
    match command.unwrap_or(Cmd::Interactive) {
        Cmd::Interactive => interactive::run(config).await,
        Cmd::List => list::run(config),
        Cmd::Add { name, phone } => add::run(config, &name, &phone),
    }
}
