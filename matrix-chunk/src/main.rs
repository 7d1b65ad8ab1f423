use std::io;
use std::process;

use matrix_chunk::{Config, Element, Error, Precision};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        match &e {
            Error::Usage(usage) => eprintln!("{usage}"),
            _ => eprintln!("Error: {e}"),
        }
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "starting worker");

    match config.precision {
        Precision::Single => compute::<f32>(&config),
        Precision::Double => compute::<f64>(&config),
    }
}

fn compute<T: Element>(config: &Config) -> Result<(), Error> {
    let result: matrix_chunk::Matrix<T> =
        matrix_chunk::multiply_chunk(&config.left, &config.right, config.id, config.workers)?;

    let stdout = io::stdout();
    matrix_chunk::render(&result, stdout.lock()).map_err(|e| Error::Io {
        path: "<stdout>".to_string(),
        source: e,
    })
}
