// src/gui/actions/export.rs
use crate::{ file::{ self, ExportError }, gui::app::App };

/// Map the output folder text field onto the export options, if edited.
pub fn apply_out_dir(app: &mut App) {
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        app.state.gui.out_dir_text = app.state.options.export.out_dir().to_string_lossy().into_owned();
        app.state.gui.out_dir_dirty = false;
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir().display());
    }
}

pub fn export_csv(app: &mut App) {
    apply_out_dir(app);

    let export = &app.state.options.export;
    let path = export.csv_path();
    logf!("Export: Begin CSV layout={:?} → {}", export.csv_layout, path.display());

    let written = super::summary_csv(app, export.csv_layout)
        .map_err(ExportError::from)
        .and_then(|txt| file::write_export(&path, txt.as_bytes()));
    let status_msg = match written {
        Ok(p) => {
            logf!("Export: OK {}", p.display());
            format!("Saved {}", p.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(status_msg);
}
