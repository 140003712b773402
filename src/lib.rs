// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod key_store;
pub mod progress;
pub mod request;
pub mod row;
pub mod runner;
pub mod specs;

pub use error::{RmsError, RmsResult};
