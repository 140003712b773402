// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://rms.arc.gov.au/RMS/Report/ResearchOfficeAPI";
pub const API_URL_ENV: &str = "RMS_API_URL";
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
pub const USER_AGENT: &str = concat!("rms_export/", env!("CARGO_PKG_VERSION"));

// Query parameter names
pub const PARAM_SCHEME_ROUND: &str = "schemeRound";
pub const PARAM_API_KEY: &str = "apiKey";

// Local files
pub const API_KEY_FILENAME: &str = ".rms-api-key";
pub const API_KEY_ENV: &str = "RMS_API_KEY";
pub const LOG_DIR: &str = ".rms";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const EXPORT_EXT: &str = "csv";
pub const LIST_SEP: &str = "; ";

// GUI
pub const APP_TITLE: &str = "ARC Research Management System (RMS)";
pub const WINDOW_W: f32 = 560.0;
pub const WINDOW_H: f32 = 520.0;
pub const PREVIEW_ROWS: usize = 200;
