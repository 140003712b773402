// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,download_export,save_api_key}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod key;     // src/gui/actions/key.rs

pub use copy::copy;
pub use export::download_export;
pub use key::save_api_key;
