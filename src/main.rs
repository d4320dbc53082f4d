use std::env;
use std::io;
use std::process::ExitCode;

use mansion_map::SessionError;
use mansion_map::session::{self, MapSource};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let source = MapSource::from_args(env::args().skip(1));
    if let MapSource::File(path) = &source {
        tracing::info!(path = %path.display(), "using map file");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    match session::run(&source, stdin.lock(), &mut stdout.lock()) {
        Ok(report) => {
            tracing::info!(
                ending = ?report.ending,
                moves = report.moves,
                rooms = report.rooms_released,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(SessionError::Map(e)) => {
            eprintln!("[FATAL] Could not build the mansion map: {e}");
            ExitCode::FAILURE
        }
        Err(SessionError::Io(e)) => {
            eprintln!("[ERROR] Console I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
