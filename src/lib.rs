//! Steam Desktop Guard - rotating Steam Guard codes in the terminal.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod client;
pub mod codegen;
pub mod collection;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rotation;
pub mod row_state;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
