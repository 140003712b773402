// src/specs/funding_details.rs
//
// FundingDetailsForSuccessfulProposals: what was approved, per year and per
// award, for each funded project.
//
// Columns:
//   Project ID, Project Summary, Special Conditions ("; "-joined)
//   <year> (Financial Year)              fundingAmountApprovedForEachFinancialYear
//   <year> (Calendar Year)               fundingAmountApprovedForEachCalendarYear
//   <award> (<year> Financial Year)      fundingAmountForAwardsApprovedForEachFinancialYear
//   <award> (<year> Calendar Year)       fundingAmountForAwardsApprovedForEachCalendarYear
//
// Award fields are maps of award name → [{ year, fundingAmount }]; awards
// keep the order the server sent them in.

use serde_json::Value;

use super::{joined, list};
use crate::row::{render, FlatRow};

#[derive(Clone, Copy)]
enum YearBasis {
    Financial,
    Calendar,
}

impl YearBasis {
    fn label(self) -> &'static str {
        match self {
            YearBasis::Financial => "Financial Year",
            YearBasis::Calendar => "Calendar Year",
        }
    }
}

pub fn flatten(record: &Value) -> FlatRow {
    let mut row = FlatRow::new();
    row.set_json("Project ID", record.get("projectId"));
    row.set_json("Project Summary", record.get("projectSummary"));
    row.set("Special Conditions", joined(record, "specialConditions"));

    per_year(&mut row, record, "fundingAmountApprovedForEachFinancialYear", YearBasis::Financial);
    per_year(&mut row, record, "fundingAmountApprovedForEachCalendarYear", YearBasis::Calendar);

    per_award(&mut row, record, "fundingAmountForAwardsApprovedForEachFinancialYear", YearBasis::Financial);
    per_award(&mut row, record, "fundingAmountForAwardsApprovedForEachCalendarYear", YearBasis::Calendar);

    row
}

fn year_of(period: &Value) -> String {
    period.get("year").map(render).unwrap_or_default()
}

fn per_year(row: &mut FlatRow, record: &Value, key: &str, basis: YearBasis) {
    for period in list(record, key) {
        row.set_json(
            format!("{} ({})", year_of(period), basis.label()),
            period.get("fundingAmount"),
        );
    }
}

fn per_award(row: &mut FlatRow, record: &Value, key: &str, basis: YearBasis) {
    let Some(Value::Object(awards)) = record.get(key) else { return };
    for (award, periods) in awards {
        let periods = match periods {
            Value::Array(p) => p.as_slice(),
            _ => &[],
        };
        for period in periods {
            row.set_json(
                format!("{} ({} {})", award, year_of(period), basis.label()),
                period.get("fundingAmount"),
            );
        }
    }
}
