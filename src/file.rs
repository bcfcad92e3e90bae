// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::error::OutputError;
use crate::store::Dataset;

/// Write the dataset as pretty-printed JSON, replacing whatever is at `path`.
/// Cyrillic is written as-is, not `\u`-escaped.
///
/// Returns `None` (and writes nothing) when the dataset is empty.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<Option<PathBuf>, OutputError> {
    if dataset.is_empty() {
        info!("Нет данных для сохранения");
        return Ok(None);
    }

    let io_err = |source: std::io::Error| OutputError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, dataset)?;
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), records = dataset.len(), "dataset written");
    Ok(Some(path.to_path_buf()))
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
