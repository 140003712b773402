// src/specs/mod.rs
//! # Report “specs” module
//!
//! This module hosts the **report-specific flattening specifications** for the
//! Research Office API. Each spec focuses on a single report and encodes *which
//! JSON fields hold the ground truth* and *how they widen into CSV columns*.
//!
//! ## What lives here
//! - **Pure record → row functions** (`flatten(&Value) -> FlatRow`), one per report.
//! - **Column naming**, including the dynamic columns built from nested lists
//!   and maps (one column per criterion, per year, per award per year).
//! - **Tolerant extraction**: absent fixed fields become empty cells; absent or
//!   null nested lists/maps contribute no columns.
//!
//! ## What does **not** live here
//! - **HTTP and envelope handling** (`client`).
//! - **Header reconciliation across rows** (`csv::resolve_header`), which is
//!   where the column-drift policy lives.
//! - **GUI concerns or file paths**.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::run → client::fetch → ReportKind::flatten_all → file::write_export
//! ```
//!
//! ## Conventions & invariants
//! - Row order follows record order; column order follows field order in the
//!   record (fixed columns first, in the order each report file documents).
//! - Lists of strings are joined with `"; "`.
//! - Specs never fail: a record that is not an object yields the fixed columns,
//!   all empty.
//!
//! ## Current specs
//! - `unsuccessful_feedback` – rating bands and feedback comments.
//! - `ineligible_proposals` – project id + ineligibility comment.
//! - `funding_details` – summary, conditions and per-year / per-award funding.
pub mod funding_details;
pub mod ineligible_proposals;
pub mod unsuccessful_feedback;

use serde_json::Value;

use crate::{
    config::{consts::LIST_SEP, options::ReportKind},
    row::{render, FlatRow},
};

impl ReportKind {
    pub fn flatten(self, record: &Value) -> FlatRow {
        match self {
            ReportKind::UnsuccessfulFeedback => unsuccessful_feedback::flatten(record),
            ReportKind::IneligibleProposals => ineligible_proposals::flatten(record),
            ReportKind::FundingDetailsForSuccessfulProposals => funding_details::flatten(record),
        }
    }

    pub fn flatten_all(self, records: &[Value]) -> Vec<FlatRow> {
        records.iter().map(|r| self.flatten(r)).collect()
    }
}

/// Entries of a nested list; empty when absent, null or not a list.
pub(crate) fn list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    match record.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// A list of scalars joined with `"; "`. A lone scalar is rendered as-is.
pub(crate) fn joined(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(LIST_SEP),
        Some(other) => render(other),
        None => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_tolerates_missing_and_wrong_types() {
        let rec = json!({ "a": [1, 2], "b": null, "c": "x" });
        assert_eq!(list(&rec, "a").len(), 2);
        assert!(list(&rec, "b").is_empty());
        assert!(list(&rec, "c").is_empty());
        assert!(list(&rec, "zzz").is_empty());
    }

    #[test]
    fn joined_handles_lists_and_scalars() {
        let rec = json!({ "a": ["good", "needs work"], "b": "solo", "c": [] });
        assert_eq!(joined(&rec, "a"), "good; needs work");
        assert_eq!(joined(&rec, "b"), "solo");
        assert_eq!(joined(&rec, "c"), "");
        assert_eq!(joined(&rec, "zzz"), "");
    }

    #[test]
    fn flatten_all_preserves_order_and_dispatches() {
        let recs = vec![
            json!({ "projectId": "P1", "comment": "late" }),
            json!({ "projectId": "P2", "comment": "incomplete" }),
        ];
        let rows = ReportKind::IneligibleProposals.flatten_all(&recs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Project ID"), Some("P1"));
        assert_eq!(rows[1].get("Comment"), Some("incomplete"));
    }

    #[test]
    fn non_object_record_yields_empty_fixed_columns() {
        let row = ReportKind::IneligibleProposals.flatten(&json!("garbage"));
        let cells: Vec<_> = row.iter().collect();
        assert_eq!(cells, vec![("Project ID", ""), ("Comment", "")]);
    }
}
