//! Shared library module for the Picslice app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use crate::app::PicsliceApp;

pub mod action;
pub mod app;
pub mod board_drag;
pub mod image_loader;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
