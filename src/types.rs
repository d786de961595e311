//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Recognized tabular file kinds and classification
//! - **Batch Types** - The per-kind set a drop batch folds into
//! - **Log Types** - Activity log entries
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// Recognized tabular file kinds, keyed by filename suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Comma-separated values (`.csv`)
    CommaSeparated,
    /// Tab-separated values (`.tsv`)
    TabSeparated,
}

impl FileKind {
    /// Every recognized kind, in display order.
    pub const ALL: [FileKind; 2] = [FileKind::CommaSeparated, FileKind::TabSeparated];

    /// Canonical filename suffix for this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            FileKind::CommaSeparated => ".csv",
            FileKind::TabSeparated => ".tsv",
        }
    }

    /// Short label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::CommaSeparated => "CSV",
            FileKind::TabSeparated => "TSV",
        }
    }

    /// Classifies a filename by its suffix.
    ///
    /// The suffix is the substring from the last `.` to the end and is
    /// matched case-sensitively. A name whose only `.` is the leading
    /// character has no suffix. Anything unrecognized yields `None`.
    pub fn from_file_name(name: &str) -> Option<FileKind> {
        let dot = name.rfind('.').filter(|&i| i > 0)?;
        let suffix = &name[dot..];
        FileKind::ALL.into_iter().find(|kind| kind.suffix() == suffix)
    }
}

/// Minimal view of a host file reference.
///
/// Classification and folding only ever look at these two fields, so
/// they stay pure and testable off the browser.
pub trait DroppedFile {
    /// Base name as reported by the host, e.g. `"data.csv"`.
    fn file_name(&self) -> String;

    /// MIME type as reported by the host; empty when unknown.
    fn mime_type(&self) -> String;
}

impl DroppedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// Batch Types
// =============================================================================

/// Per-kind set of files accumulated from one drop batch.
///
/// Holds at most one file per recognized [`FileKind`]; a later file of
/// an already-seen kind replaces the earlier one. Unrecognized files
/// never enter the set.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedFileSet<F = web_sys::File> {
    entries: BTreeMap<FileKind, F>,
}

impl<F> Default for ClassifiedFileSet<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F> ClassifiedFileSet<F> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// File held for the given kind, if any.
    pub fn get(&self, kind: FileKind) -> Option<&F> {
        self.entries.get(&kind)
    }

    /// Entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (FileKind, &F)> {
        self.entries.iter().map(|(kind, file)| (*kind, file))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: DroppedFile> ClassifiedFileSet<F> {
    /// Folds one file into the set.
    ///
    /// Recognized suffixes insert or overwrite the entry for their
    /// kind; unrecognized files leave the set unchanged.
    pub fn fold(mut self, file: F) -> Self {
        if let Some(kind) = FileKind::from_file_name(&file.file_name()) {
            self.entries.insert(kind, file);
        }
        self
    }

    /// Folds a whole batch, left to right, into a fresh set.
    pub fn from_batch(files: impl IntoIterator<Item = F>) -> Self {
        files.into_iter().fold(Self::new(), Self::fold)
    }

    /// Names of the held files, in kind order.
    pub fn file_names(&self) -> Vec<String> {
        self.entries.values().map(DroppedFile::file_name).collect()
    }

    /// Serializable snapshot for logs and callback consumers.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            entries: self
                .entries
                .iter()
                .map(|(kind, file)| BatchEntry {
                    kind: *kind,
                    file_name: file.file_name(),
                })
                .collect(),
        }
    }
}

/// Snapshot of a classified batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

/// One classified file in a [`BatchSummary`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub kind: FileKind,
    pub file_name: String,
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// A single entry in the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Entry stamped with the current wall-clock time.
    pub fn now(level: LogLevel, message: String) -> Self {
        let timestamp = js_sys::Date::new_0()
            .to_locale_time_string("fr-FR")
            .as_string()
            .unwrap_or_else(|| "00:00:00".to_string());

        Self {
            level,
            message,
            timestamp,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Classification and folding are total; only DOM plumbing can fail.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Drag & drop capability failure.
    Dropzone(String),
    /// Unexpected DOM event shape.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dropzone(msg) => write!(f, "Dropzone error: {}", msg),
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl DroppedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }

        fn mime_type(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_classification_by_suffix() {
        assert_eq!(
            FileKind::from_file_name("data.csv"),
            Some(FileKind::CommaSeparated)
        );
        assert_eq!(
            FileKind::from_file_name("values.tsv"),
            Some(FileKind::TabSeparated)
        );
        assert_eq!(FileKind::from_file_name("notes.txt"), None);
        assert_eq!(FileKind::from_file_name("archive"), None);
        assert_eq!(FileKind::from_file_name(""), None);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(FileKind::from_file_name("DATA.CSV"), None);
        assert_eq!(FileKind::from_file_name("data.Csv"), None);
    }

    #[test]
    fn test_leading_dot_name_has_no_suffix() {
        assert_eq!(FileKind::from_file_name(".csv"), None);
        assert_eq!(FileKind::from_file_name(".tsv"), None);
    }

    #[test]
    fn test_only_last_suffix_counts() {
        assert_eq!(
            FileKind::from_file_name("report.backup.csv"),
            Some(FileKind::CommaSeparated)
        );
        assert_eq!(FileKind::from_file_name("data.csv.txt"), None);
    }

    #[test]
    fn test_batch_folds_recognized_files_only() {
        let set = ClassifiedFileSet::from_batch([
            FakeFile("data.csv"),
            FakeFile("notes.txt"),
            FakeFile("values.tsv"),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(FileKind::CommaSeparated),
            Some(&FakeFile("data.csv"))
        );
        assert_eq!(set.get(FileKind::TabSeparated), Some(&FakeFile("values.tsv")));
        assert_eq!(set.file_names(), vec!["data.csv", "values.tsv"]);
    }

    #[test]
    fn test_last_file_of_a_kind_wins() {
        let set = ClassifiedFileSet::from_batch([FakeFile("a.csv"), FakeFile("b.csv")]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(FileKind::CommaSeparated), Some(&FakeFile("b.csv")));
    }

    #[test]
    fn test_empty_batch_is_identity() {
        let set = ClassifiedFileSet::from_batch([FakeFile("data.csv")]);
        let same = [].into_iter().fold(set.clone(), ClassifiedFileSet::fold);

        assert_eq!(set, same);

        assert!(ClassifiedFileSet::<FakeFile>::from_batch([]).is_empty());
    }

    #[test]
    fn test_unrecognized_files_are_position_insensitive() {
        let front = ClassifiedFileSet::from_batch([
            FakeFile("notes.txt"),
            FakeFile("data.csv"),
            FakeFile("values.tsv"),
        ]);
        let back = ClassifiedFileSet::from_batch([
            FakeFile("data.csv"),
            FakeFile("values.tsv"),
            FakeFile("notes.txt"),
        ]);

        assert_eq!(front, back);
    }

    #[test]
    fn test_summary_serialization() {
        let set = ClassifiedFileSet::from_batch([FakeFile("data.csv"), FakeFile("values.tsv")]);
        let json = serde_json::to_string(&set.summary()).unwrap();

        assert_eq!(
            json,
            r#"{"entries":[{"kind":"CommaSeparated","fileName":"data.csv"},{"kind":"TabSeparated","fileName":"values.tsv"}]}"#
        );
    }
}
