//! Application configuration.
//!
//! Centralized configuration for the TabDrop frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Application name shown in the header.
pub const APP_NAME: &str = "TabDrop";

/// Default accept filter handed to the drop zone.
///
/// Comma-separated, same grammar as a file input's `accept` attribute.
pub const DEFAULT_ACCEPT: &str = ".csv,.tsv";

/// Maximum log entries to keep in the activity panel.
pub const MAX_LOG_ENTRIES: usize = 100;

/// How long the rejected-batch notice stays visible (milliseconds).
pub const REJECT_NOTICE_MS: u32 = 4_000;
