// src/specs/ineligible_proposals.rs
//
// IneligibleProposals: one row per proposal ruled ineligible.
//
// {
//     "status": "success",
//     "data": [
//         { "projectId": "XX150200028", "comment": "Comment" }
//     ]
// }
//
// Columns: Project ID, Comment

use serde_json::Value;

use crate::row::FlatRow;

pub fn flatten(record: &Value) -> FlatRow {
    let mut row = FlatRow::new();
    row.set_json("Project ID", record.get("projectId"));
    row.set_json("Comment", record.get("comment"));
    row
}
