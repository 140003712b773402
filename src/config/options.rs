// src/config/options.rs
use std::{fmt, path::PathBuf, str::FromStr};

use super::consts::*;
use crate::core::sanitize::sanitize_filename;

/// The three reports the Research Office API serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    UnsuccessfulFeedback,
    IneligibleProposals,
    FundingDetailsForSuccessfulProposals,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::UnsuccessfulFeedback,
        ReportKind::IneligibleProposals,
        ReportKind::FundingDetailsForSuccessfulProposals,
    ];

    /// Path segment used by the API (`{base}/{api_name}/`).
    pub fn api_name(self) -> &'static str {
        match self {
            ReportKind::UnsuccessfulFeedback => "UnsuccessfulFeedback",
            ReportKind::IneligibleProposals => "IneligibleProposals",
            ReportKind::FundingDetailsForSuccessfulProposals => {
                "FundingDetailsForSuccessfulProposals"
            }
        }
    }
}

impl Default for ReportKind {
    fn default() -> Self {
        ReportKind::ALL[0]
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReportKind::ALL
            .into_iter()
            .find(|k| k.api_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = ReportKind::ALL.iter().map(|k| k.api_name()).collect();
                format!("Unknown report: {} (expected one of: {})", wanted, known.join(", "))
            })
    }
}

/// How the CSV writer reconciles rows whose column sets differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// First row's columns, then any new ones in order of first appearance.
    /// Missing cells are written empty.
    #[default]
    Union,
    /// Every row must carry exactly the first row's columns.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self { base_url: s!(API_URL) }
    }
}

impl ApiOptions {
    /// Defaults, with the base URL taken from `RMS_API_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self { base_url: s!(url.trim()) },
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub column_policy: ColumnPolicy,
    /// Explicit destination; `None` means "derive from report + round".
    pub out_path: Option<PathBuf>,
}

impl ExportOptions {
    /// `<Report>_<round>.csv` in the working directory.
    pub fn default_file_name(report: ReportKind, scheme_round: &str) -> PathBuf {
        let round = sanitize_filename(scheme_round);
        let stem = if round.is_empty() {
            s!(report.api_name())
        } else {
            join!(report.api_name(), "_", &round)
        };
        PathBuf::from(join!(&stem, ".", EXPORT_EXT))
    }

    pub fn out_path_for(&self, report: ReportKind, scheme_round: &str) -> PathBuf {
        self.out_path
            .clone()
            .unwrap_or_else(|| Self::default_file_name(report, scheme_round))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_kind_parses_case_insensitively() {
        assert_eq!(
            "ineligibleproposals".parse::<ReportKind>(),
            Ok(ReportKind::IneligibleProposals)
        );
        assert_eq!(
            " FundingDetailsForSuccessfulProposals ".parse::<ReportKind>(),
            Ok(ReportKind::FundingDetailsForSuccessfulProposals)
        );
        assert!("Nope".parse::<ReportKind>().unwrap_err().contains("UnsuccessfulFeedback"));
    }

    #[test]
    fn first_report_is_default() {
        assert_eq!(ReportKind::default(), ReportKind::UnsuccessfulFeedback);
        assert_eq!(ReportKind::default().to_string(), "UnsuccessfulFeedback");
    }

    #[test]
    fn default_file_name_uses_report_and_round() {
        let p = ExportOptions::default_file_name(ReportKind::IneligibleProposals, "DP 2024/1");
        assert_eq!(p, PathBuf::from("IneligibleProposals_DP_2024-1.csv"));

        let blank = ExportOptions::default_file_name(ReportKind::UnsuccessfulFeedback, "  ");
        assert_eq!(blank, PathBuf::from("UnsuccessfulFeedback.csv"));
    }

    #[test]
    fn explicit_out_path_wins() {
        let export = ExportOptions {
            out_path: Some(PathBuf::from("mine.csv")),
            ..ExportOptions::default()
        };
        assert_eq!(
            export.out_path_for(ReportKind::UnsuccessfulFeedback, "DP24"),
            PathBuf::from("mine.csv")
        );
    }
}
