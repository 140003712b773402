// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::to_csv_string, gui::app::App};

/// Put the last export on the clipboard as CSV text.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(preview) = app.preview.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but nothing has been exported yet");
        return;
    };

    let txt = match to_csv_string(&preview.header, &preview.source) {
        Ok(t) => t,
        Err(e) => {
            loge!("Copy: could not build CSV text: {}", e);
            app.status(format!("Copy failed: {}", e));
            return;
        }
    };
    logf!("Copy: rows={}, headers={}", preview.source.len(), preview.header.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
