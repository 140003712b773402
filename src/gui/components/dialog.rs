// src/gui/components/dialog.rs
//
// One modal at a time: success or error. The form underneath is disabled
// while it is open.

use eframe::egui::{self, Align2, RichText};

use crate::gui::app::App;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Info, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Error, title: title.into(), message: message.into() }
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.as_ref() else { return };
    let mut close = false;

    egui::Window::new(&dialog.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            match dialog.kind {
                DialogKind::Info => {
                    ui.label(&dialog.message);
                }
                DialogKind::Error => {
                    let color = ui.visuals().error_fg_color;
                    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                        ui.label(RichText::new(&dialog.message).color(color));
                    });
                }
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    if close {
        app.dialog = None;
    }
}
