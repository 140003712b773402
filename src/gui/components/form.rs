// src/gui/components/form.rs
//
// The three inputs, the output path, and the action buttons.

use eframe::egui::{self, TextEdit, TextStyle};

use crate::{
    config::options::ReportKind,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = app.dialog.is_none();
    let mut download = false;
    let mut save_key = false;
    let mut quit = false;

    ui.add_enabled_ui(enabled, |ui| {
        ui.vertical_centered(|ui| {
            ui.label("This app downloads and exports\nARC Research Office reports.");
        });
        ui.add_space(12.0);

        let form = &mut app.state.form;
        let before = (form.report, form.scheme_round.clone());

        egui::Grid::new("report_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Report Type:");
                egui::ComboBox::from_id_salt("report_type")
                    .selected_text(form.report.api_name())
                    .width(320.0)
                    .show_ui(ui, |ui| {
                        for kind in ReportKind::ALL {
                            ui.selectable_value(&mut form.report, kind, kind.api_name());
                        }
                    });
                ui.end_row();

                ui.label("Scheme Round:");
                ui.add(TextEdit::singleline(&mut form.scheme_round).desired_width(80.0));
                ui.end_row();

                ui.label("API Key:");
                ui.horizontal(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut form.api_key)
                            .password(!form.show_key)
                            .desired_width(280.0),
                    );
                    ui.checkbox(&mut form.show_key, "Show");
                });
                ui.end_row();

                ui.label("Save as:");
                if ui
                    .add(TextEdit::singleline(&mut form.out_path_text)
                        .font(TextStyle::Monospace)
                        .desired_width(320.0))
                    .changed()
                {
                    form.out_path_dirty = true;
                    logd!("UI: out_path_text changed (dirty=true) → {}", form.out_path_text);
                }
                ui.end_row();
            });

        if before.0 != form.report || before.1 != form.scheme_round {
            if before.0 != form.report {
                logf!("UI: Report → {}", form.report);
            }
            form.refresh_out_path();
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            download = ui.button("Download and export").clicked();
            save_key = ui.button("Save API Key").clicked();
            quit = ui.button("Quit").clicked();
        });
    });

    ui.label(format!("Status: {}", app.status_text()));

    // actions run after the form borrow is released
    if download {
        logf!("UI: Download and export clicked");
        actions::download_export(app);
    }
    if save_key {
        actions::save_api_key(app);
    }
    if quit {
        logf!("UI: Quit");
        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
