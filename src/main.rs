use dotenv::dotenv;
use std::process::ExitCode;
use tasks::commands::Cli;
use tasks::libs::messages::macros::is_debug_mode;
use tasks::msg_error;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Structured logs on stderr, only when `TASKS_DEBUG` or `RUST_LOG` is set.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    use tracing_subscriber::{fmt, EnvFilter};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tasks=debug".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
