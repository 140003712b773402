// src/runner.rs
use std::path::Path;

use serde_json::Value;

use crate::{
    client,
    config::options::AppOptions,
    core::net::Transport,
    error::RmsResult,
    file::{self, ExportSummary},
    progress::Progress,
    request::ReportRequest,
    row::FlatRow,
};

/// What one download-and-export produced. Rows are kept for the GUI preview.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub export: ExportSummary,
    pub rows: Vec<FlatRow>,
}

/// Client → flattener → writer, synchronously.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    transport: &dyn Transport,
    options: &AppOptions,
    request: &ReportRequest,
    out: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> RmsResult<RunSummary> {
    logf!("Run: Begin {:?} → {}", request, out.display());

    let result = run_inner(transport, options, request, out, &mut progress);

    match &result {
        Ok(sum) => logf!(
            "Run: OK rows={} path={}",
            sum.export.row_count,
            sum.export.path.display()
        ),
        Err(e) => loge!("Run: Error: {}", e),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_inner(
    transport: &dyn Transport,
    options: &AppOptions,
    request: &ReportRequest,
    out: &Path,
    progress: &mut Option<&mut dyn Progress>,
) -> RmsResult<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Downloading {}…", request.report()));
    }
    let records = client::fetch(transport, &options.api.base_url, request)?;

    let rows = flatten_with_progress(request, &records, progress);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Writing {}…", out.display()));
    }
    let export = file::write_export(out, &rows, options.export.column_policy)?;

    Ok(RunSummary { export, rows })
}

fn flatten_with_progress(
    request: &ReportRequest,
    records: &[Value],
    progress: &mut Option<&mut dyn Progress>,
) -> Vec<FlatRow> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }
    let report = request.report();
    let mut rows = Vec::with_capacity(records.len());
    for (ix, record) in records.iter().enumerate() {
        rows.push(report.flatten(record));
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ix);
        }
    }
    rows
}
