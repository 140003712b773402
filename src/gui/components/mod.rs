// src/gui/components/mod.rs
pub mod dialog;
pub mod form;
pub mod preview_table;
