// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use crate::{
    config::{consts::EXPORT_EXT, options::ColumnPolicy},
    csv::{read_rows, resolve_header, write_rows},
    error::{RmsError, RmsResult},
    row::FlatRow,
};

/// What an export put on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub header: Vec<String>,
    pub row_count: usize,
}

/// Append `.csv` when the user gave no extension at all.
pub fn with_csv_extension(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension(EXPORT_EXT)
    } else {
        path.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> RmsResult<()> {
    fs::create_dir_all(dir).map_err(|e| RmsError::io(dir, e))
}

/// Sibling scratch file the export is written to before it replaces `path`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Only reader/writer I/O failures are `Io`; anything else is bad CSV.
fn csv_error(path: &Path, err: ::csv::Error) -> RmsError {
    let detail = err.to_string();
    match err.into_kind() {
        ::csv::ErrorKind::Io(e) => RmsError::io(path, e),
        _ => RmsError::Csv { path: path.to_path_buf(), detail },
    }
}

/// Write `rows` to `path` as CSV. The header is resolved first so a strict
/// column mismatch leaves the destination untouched, and the rows go to a
/// `.part` file that only replaces `path` once fully written.
pub fn write_export(path: &Path, rows: &[FlatRow], policy: ColumnPolicy) -> RmsResult<ExportSummary> {
    let path = with_csv_extension(path);
    let header = resolve_header(rows, policy)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let part = partial_path(&path);
    let written = File::create(&part)
        .map_err(|e| RmsError::io(&part, e))
        .and_then(|file| {
            write_rows(BufWriter::new(file), &header, rows).map_err(|e| csv_error(&part, e))
        })
        .and_then(|()| fs::rename(&part, &path).map_err(|e| RmsError::io(&path, e)));

    if let Err(e) = written {
        let _ = fs::remove_file(&part);
        loge!("Export: {}", e);
        return Err(e);
    }

    logf!(
        "Export: {} rows × {} columns → {}",
        rows.len(),
        header.len(),
        path.display()
    );

    Ok(ExportSummary { path, header, row_count: rows.len() })
}

/// Load a previously written export.
pub fn read_export(path: &Path) -> RmsResult<Vec<FlatRow>> {
    let file = File::open(path).map_err(|e| RmsError::io(path, e))?;
    read_rows(BufReader::new(file)).map_err(|e| csv_error(path, e))
}
