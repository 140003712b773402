// src/config/state.rs
use std::path::PathBuf;

use super::options::{AppOptions, ExportOptions, ReportKind};
use crate::{
    error::{RmsError, RmsResult},
    request::ReportRequest,
};

/// What the form currently shows. Plain, editable data; nothing reads it
/// except `to_request` / `out_path` at the moment the user clicks.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub report: ReportKind,
    pub scheme_round: String,
    pub api_key: String,
    pub show_key: bool,

    // output text field UX: follows report + round until the user edits it
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl FormState {
    pub fn new(api_key: Option<String>) -> Self {
        let mut form = Self {
            api_key: api_key.unwrap_or_default(),
            ..Self::default()
        };
        form.refresh_out_path();
        form
    }

    /// Re-derive the output path from report + round unless the user owns it.
    pub fn refresh_out_path(&mut self) {
        if self.out_path_dirty {
            return;
        }
        self.out_path_text = ExportOptions::default_file_name(self.report, &self.scheme_round)
            .to_string_lossy()
            .into_owned();
    }

    /// Snapshot the form into an immutable, validated request.
    pub fn to_request(&self) -> RmsResult<ReportRequest> {
        ReportRequest::new(self.report, &self.scheme_round, &self.api_key)
    }

    pub fn out_path(&self) -> RmsResult<PathBuf> {
        let text = self.out_path_text.trim();
        if text.is_empty() {
            return Err(RmsError::Validation(s!("You must choose a path to save your file.")));
        }
        Ok(PathBuf::from(text))
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub form: FormState,
}

impl AppState {
    pub fn new(options: AppOptions, saved_key: Option<String>) -> Self {
        Self { options, form: FormState::new(saved_key) }
    }
}
