// src/gui/components/preview_table.rs
//
// Read-only view of the last export. Purely a view; the copy action reads
// `Preview::source`.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::PREVIEW_ROWS,
    gui::{actions, app::App},
    row::FlatRow,
    runner::RunSummary,
};

#[derive(Clone, Debug)]
pub struct Preview {
    pub header: Vec<String>,
    pub source: Vec<FlatRow>,
}

impl Preview {
    pub fn from_summary(sum: &RunSummary) -> Self {
        Self { header: sum.export.header.clone(), source: sum.rows.clone() }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(preview) = app.preview.as_ref() else {
        ui.weak("Nothing exported yet.");
        return;
    };

    let cols = preview.header.len();
    let total = preview.source.len();
    let shown = total.min(PREVIEW_ROWS);
    let mut copy = false;

    ui.horizontal(|ui| {
        if total > shown {
            ui.label(format!("Preview: first {} of {} row(s)", shown, total));
        } else {
            ui.label(format!("Preview: {} row(s)", total));
        }
        copy = ui.button("Copy").clicked();
    });

    if cols == 0 {
        ui.weak("The report returned no records.");
    } else {
        egui::ScrollArea::horizontal()
            .id_salt("preview_hscroll")
            .show(ui, |ui| {
                let mut table = TableBuilder::new(ui)
                    .striped(true)
                    .min_scrolled_height(0.0);
                for _ in 0..cols {
                    table = table.column(Column::auto().at_least(60.0).resizable(true).clip(true));
                }

                table
                    .header(20.0, |mut header| {
                        for h in &preview.header {
                            header.col(|ui| { ui.strong(h); });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, shown, |mut row| {
                            let row_idx = row.index();
                            if let Some(data) = preview.source.get(row_idx) {
                                for h in &preview.header {
                                    row.col(|ui| { ui.label(data.get(h).unwrap_or("")); });
                                }
                            }
                        });
                    });
            });
    }

    if copy {
        let ctx = ui.ctx().clone();
        actions::copy(app, &ctx);
    }
}
