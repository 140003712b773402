// src/request.rs
use std::fmt;

use crate::config::consts::{PARAM_API_KEY, PARAM_SCHEME_ROUND};
use crate::config::options::ReportKind;
use crate::core::sanitize::mask_secret;
use crate::error::{RmsError, RmsResult};

/// One download action. Built once from the form (or CLI args), validated,
/// then handed read-only through client → flattener → writer.
#[derive(Clone, PartialEq, Eq)]
pub struct ReportRequest {
    report: ReportKind,
    scheme_round: String,
    api_key: String,
}

impl ReportRequest {
    /// Trims both inputs; rejects blanks with a single message naming every
    /// missing field.
    pub fn new(report: ReportKind, scheme_round: &str, api_key: &str) -> RmsResult<Self> {
        let scheme_round = scheme_round.trim();
        let api_key = api_key.trim();

        let mut missing = Vec::new();
        if scheme_round.is_empty() { missing.push("scheme round"); }
        if api_key.is_empty() { missing.push("API key"); }
        if !missing.is_empty() {
            return Err(RmsError::Validation(format!(
                "All fields are required (missing: {})",
                missing.join(", ")
            )));
        }

        Ok(Self {
            report,
            scheme_round: s!(scheme_round),
            api_key: s!(api_key),
        })
    }

    pub fn report(&self) -> ReportKind { self.report }

    pub fn scheme_round(&self) -> &str { &self.scheme_round }

    pub fn api_key(&self) -> &str { &self.api_key }

    /// Query parameters in the order the API documents them.
    pub fn query(&self) -> [(&'static str, &str); 2] {
        [
            (PARAM_SCHEME_ROUND, self.scheme_round.as_str()),
            (PARAM_API_KEY, self.api_key.as_str()),
        ]
    }
}

impl fmt::Debug for ReportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportRequest")
            .field("report", &self.report)
            .field("scheme_round", &self.scheme_round)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}
