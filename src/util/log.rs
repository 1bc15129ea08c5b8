use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to a file under the data directory; stdout belongs to the
/// terminal UI.
pub fn initialize_logging() -> Result<()> {
    let directory = log_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join("tastefinder.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

fn log_directory() -> PathBuf {
    if let Ok(dir) = std::env::var("TASTEFINDER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "tastefinder", "tastefinder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
