// src/gui/actions/export.rs
use crate::{
    core::net::HttpTransport,
    error::{chain, RmsError},
    gui::{
        app::App,
        components::{dialog::Dialog, preview_table::Preview},
        progress::GuiProgress,
    },
    runner,
};

/// "Download and export": validate the form, run the pipeline on this thread,
/// and end in exactly one dialog.
pub fn download_export(app: &mut App) {
    let request = match app.state.form.to_request() {
        Ok(r) => r,
        Err(e) => return fail(app, &e),
    };
    let out = match app.state.form.out_path() {
        Ok(p) => p,
        Err(e) => return fail(app, &e),
    };

    // normalize the out path text so the field shows what was written
    app.state.form.out_path_text = out.to_string_lossy().into_owned();

    let transport = match HttpTransport::new() {
        Ok(t) => t,
        Err(e) => return fail(app, &e),
    };

    let mut prog = GuiProgress::new(app.status.clone());
    match runner::run(&transport, &app.state.options, &request, &out, Some(&mut prog)) {
        Ok(sum) => {
            let path = sum.export.path.display().to_string();
            app.preview = Some(Preview::from_summary(&sum));
            app.status(format!("Exported {} row(s) to {}", sum.export.row_count, path));
            app.dialog = Some(Dialog::info(
                "Done!",
                format!("Download complete! File saved to\n{}", path),
            ));
        }
        Err(e) => fail(app, &e),
    }
}

fn fail(app: &mut App, err: &RmsError) {
    if err.is_validation() {
        logd!("Export: rejected input: {}", err);
        app.dialog = Some(Dialog::error("Error", err.to_string()));
    } else {
        loge!("Export: {}", err);
        app.status(format!("Error: {}", err));
        app.dialog = Some(Dialog::error(
            "Error",
            format!("We experienced an error:\n{}", chain(err)),
        ));
    }
}
