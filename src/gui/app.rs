// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, options::ApiOptions, options::AppOptions, state::AppState},
    key_store::KeyStore,
};

use super::components::{self, dialog::Dialog, preview_table::Preview};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let key_store = KeyStore::default();
    let app_options = AppOptions { api: ApiOptions::from_env(), ..AppOptions::default() };
    let state = AppState::new(app_options, key_store.load());

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, key_store)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub key_store: KeyStore,

    // at most one modal at a time
    pub dialog: Option<Dialog>,

    // last successful export, for the preview table
    pub preview: Option<Preview>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, key_store: KeyStore) -> Self {
        let status = if state.form.api_key.is_empty() {
            s!("Idle")
        } else {
            format!("Loaded API key from {}", key_store.path().display())
        };
        logf!("Init: report={} key_loaded={}", state.form.report, !state.form.api_key.is_empty());

        Self {
            state,
            key_store,
            dialog: None,
            preview: None,
            status: Arc::new(Mutex::new(status)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            components::form::draw(ui, self);

            ui.separator();

            components::preview_table::draw(ui, self);
        });

        components::dialog::draw(ctx, self);
    }
}
