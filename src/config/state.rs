// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Search text in the school picker
    pub school_query: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Section index (into router::SECTIONS) to scroll to on the next frame
    pub nav_target: Option<usize>,

    /// Output directory text field, mapped to ExportOptions on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            school_query: s!(),
            window_w: 1100,
            window_h: 800,
            nav_target: None,
            out_dir_text: s!(),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.out_dir().to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_dir_text, ..GuiState::default() },
        }
    }
}
