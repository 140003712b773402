// src/gui/actions/key.rs
use crate::gui::{app::App, components::dialog::Dialog};

pub fn save_api_key(app: &mut App) {
    let dialog = match app.key_store.save(&app.state.form.api_key) {
        Ok(path) => Dialog::info("Done!", format!("Key saved to file {}", path.display())),
        Err(e) => {
            loge!("Key: save failed: {}", e);
            Dialog::error("Error", e.to_string())
        }
    };
    app.dialog = Some(dialog);
}
