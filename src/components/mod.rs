//! UI Components for the TabDrop application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with language toggle
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadZone`] - Tabular file drop zone with classification
//! - [`PreviewSection`] - Per-kind view of the last accepted batch
//! - [`LogsPanel`] - Drop-zone activity log

mod footer;
mod header;
mod hero;
mod logs;
mod preview;
mod upload_zone;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use logs::*;
pub use preview::*;
pub use upload_zone::*;
