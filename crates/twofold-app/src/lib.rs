//! Shared library module for the Twofold terminal front-end.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod input;
pub mod render;
pub mod settings;
pub mod version;
