// src/csv.rs
//
// Header reconciliation and CSV (de)serialisation of flat rows.
// Quoting/escaping is left to the `csv` crate.

use std::{
    collections::HashSet,
    io::{Read, Write},
};

use crate::{
    config::options::ColumnPolicy,
    error::{RmsError, RmsResult},
    row::FlatRow,
};

/* ---------------- Header ---------------- */

/// Work out the header for `rows` under `policy`.
///
/// Both policies start from the first row's columns in insertion order.
/// `Union` appends columns first seen in later rows; `Strict` rejects any row
/// whose column set differs. No rows → empty header.
pub fn resolve_header(rows: &[FlatRow], policy: ColumnPolicy) -> RmsResult<Vec<String>> {
    let Some(first) = rows.first() else { return Ok(Vec::new()) };
    let mut header: Vec<String> = first.columns().map(String::from).collect();

    match policy {
        ColumnPolicy::Union => {
            let mut seen: HashSet<String> = header.iter().cloned().collect();
            for row in &rows[1..] {
                for col in row.columns() {
                    if seen.insert(s!(col)) {
                        header.push(s!(col));
                    }
                }
            }
        }
        ColumnPolicy::Strict => {
            for (ix, row) in rows.iter().enumerate().skip(1) {
                let missing: Vec<&str> = header
                    .iter()
                    .map(String::as_str)
                    .filter(|h| !row.contains(h))
                    .collect();
                let extra: Vec<&str> = row
                    .columns()
                    .filter(|c| !header.iter().any(|h| h == c))
                    .collect();
                if missing.is_empty() && extra.is_empty() {
                    continue;
                }

                let mut parts = Vec::new();
                if !missing.is_empty() { parts.push(format!("missing [{}]", missing.join(", "))); }
                if !extra.is_empty() { parts.push(format!("unexpected [{}]", extra.join(", "))); }
                return Err(RmsError::SchemaMismatch { row: ix + 1, detail: parts.join("; ") });
            }
        }
    }

    Ok(header)
}

/* ---------------- Writing ---------------- */

/// Write `header` then every row laid out against it. Cells a row lacks are
/// written empty. An empty header writes nothing.
pub fn write_rows<W: Write>(w: W, header: &[String], rows: &[FlatRow]) -> ::csv::Result<()> {
    if header.is_empty() {
        return Ok(());
    }
    let mut wtr = ::csv::Writer::from_writer(w);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(header.iter().map(|h| row.get(h).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same layout as `write_rows`, into a String (clipboard).
pub fn to_csv_string(header: &[String], rows: &[FlatRow]) -> ::csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, header, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/* ---------------- Reading ---------------- */

/// Parse CSV with a header line back into rows.
pub fn read_rows<R: Read>(r: R) -> ::csv::Result<Vec<FlatRow>> {
    let mut rdr = ::csv::Reader::from_reader(r);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(headers.iter().zip(rec.iter()).collect());
    }
    Ok(rows)
}
