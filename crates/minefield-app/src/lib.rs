//! Shared library module for the Minefield app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod action;
pub mod app;
pub mod config;
mod ui;
pub mod version;

pub use self::{app::MinefieldApp, config::Args};
