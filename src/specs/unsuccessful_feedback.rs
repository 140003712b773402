// src/specs/unsuccessful_feedback.rs
//
// UnsuccessfulFeedback: banded ratings and assessor comments for proposals
// that were not funded.
//
// Columns:
//   Project ID, Proposal Rating Band,
//   Criterion Rating Band (<criterionName>)   one per criterionRatingBands entry
//   Feedback Comments                         feedbackComments joined with "; "

use serde_json::Value;

use super::{joined, list};
use crate::row::{render, FlatRow};

pub fn flatten(record: &Value) -> FlatRow {
    let mut row = FlatRow::new();
    row.set_json("Project ID", record.get("projectId"));
    row.set_json("Proposal Rating Band", record.get("proposalRatingBand"));

    for band in list(record, "criterionRatingBands") {
        let criterion = band.get("criterionName").map(render).unwrap_or_default();
        row.set_json(
            format!("Criterion Rating Band ({})", criterion),
            band.get("band"),
        );
    }

    row.set("Feedback Comments", joined(record, "feedbackComments"));
    row
}
