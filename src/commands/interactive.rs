use crate::api::{PhonebookStore, Session};
use crate::core::config::Config;
use console::style;
use std::io;
use tokio::signal;

/// Message printed when Ctrl+C ends the session.
pub const INTERRUPT_NOTICE: &str = " Ctrl+Cを検知しました.プログラムを終了します.";

/// Run the show-and-prompt loop on a blocking task until Ctrl+C.
///
/// Returns `Ok(())` once the interrupt arrives. The session task is not
/// cancelled and may still be blocked reading stdin, so the caller has to
/// exit the process instead of waiting for the runtime to drain.
pub async fn run(config: &Config) -> Result<(), String> {
    let store = PhonebookStore::open(&config.database).map_err(|e| e.to_string())?;
    let max_attempts = config.max_attempts;

    let session = tokio::task::spawn_blocking(move || {
        Session::new(store, io::stdin().lock(), io::stdout())
            .max_attempts(max_attempts)
            .run()
    });

    tokio::select! {
        interrupted = signal::ctrl_c() => {
            interrupted.map_err(|e| format!("Unable to listen for Ctrl+C: {}", e))?;
            log::info!("interrupt received, shutting down");
            println!("{}", style(INTERRUPT_NOTICE).yellow());
            Ok(())
        }
        finished = session => match finished {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(e) => Err(format!("Session task failed: {}", e)),
        },
    }
}
