//! Drag & drop capability binding.
//!
//! Checks a dropped batch against `accept` / `multiple` / `disabled`
//! and yields a single batch-level verdict. Classification of the
//! accepted files happens afterwards, in
//! [`crate::types::ClassifiedFileSet`].

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::types::{AppError, AppResult, DroppedFile};

/// Host-level constraints applied to a dropped batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropzoneOptions {
    /// Comma-separated accept filter (".csv,.tsv", "text/csv",
    /// "text/*"). `None` accepts everything.
    pub accept: Option<String>,
    /// Whether a batch may carry more than one file.
    pub multiple: bool,
    /// Suppresses drop handling entirely.
    pub disabled: bool,
}

/// Outcome of evaluating one batch against the options.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchVerdict<F> {
    /// Every file passed; delivery order preserved.
    Accepted(Vec<F>),
    /// Constraint violation; the whole batch is refused.
    Rejected,
    /// The zone is disabled; neither callback fires.
    Ignored,
}

/// Checks a batch against the zone constraints, all or nothing.
pub fn evaluate_batch<F: DroppedFile>(files: Vec<F>, options: &DropzoneOptions) -> BatchVerdict<F> {
    if options.disabled {
        return BatchVerdict::Ignored;
    }
    if !options.multiple && files.len() > 1 {
        return BatchVerdict::Rejected;
    }
    if let Some(accept) = options.accept.as_deref() {
        let all_match = files
            .iter()
            .all(|file| matches_accept(&file.file_name(), &file.mime_type(), accept));
        if !all_match {
            return BatchVerdict::Rejected;
        }
    }
    BatchVerdict::Accepted(files)
}

/// One file against a comma-separated accept filter.
///
/// Same grammar as a file input's `accept` attribute: ".ext" suffix
/// tokens (ASCII case-insensitive), exact MIME types, and "type/*"
/// wildcards. A filter with no tokens accepts everything.
fn matches_accept(name: &str, mime: &str, accept: &str) -> bool {
    let mut tokens = accept
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .peekable();

    if tokens.peek().is_none() {
        return true;
    }

    tokens.any(|token| {
        if token.starts_with('.') {
            name.to_ascii_lowercase()
                .ends_with(&token.to_ascii_lowercase())
        } else if let Some(base) = token.strip_suffix("/*") {
            mime.to_ascii_lowercase()
                .starts_with(&format!("{}/", base.to_ascii_lowercase()))
        } else {
            mime.eq_ignore_ascii_case(token)
        }
    })
}

/// Collects the files carried by a drop event.
pub fn read_dropped_files(event: &DragEvent) -> AppResult<Vec<File>> {
    let transfer = event
        .data_transfer()
        .ok_or_else(|| AppError::Dropzone("drop event carried no data transfer".to_string()))?;

    Ok(collect_file_list(transfer.files()))
}

/// Collects the files selected through the hidden file input.
pub fn read_picked_files(event: &Event) -> AppResult<Vec<File>> {
    let input = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| AppError::Dom("change event did not come from a file input".to_string()))?;

    let files = collect_file_list(input.files());

    // Reset so picking the same file again still fires a change event
    input.set_value("");

    Ok(files)
}

fn collect_file_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: &'static str,
        mime: &'static str,
    }

    impl DroppedFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    fn file(name: &'static str, mime: &'static str) -> FakeFile {
        FakeFile { name, mime }
    }

    fn options(accept: Option<&str>, multiple: bool, disabled: bool) -> DropzoneOptions {
        DropzoneOptions {
            accept: accept.map(str::to_string),
            multiple,
            disabled,
        }
    }

    #[test]
    fn test_extension_tokens_match_case_insensitively() {
        assert!(matches_accept("data.csv", "", ".csv,.tsv"));
        assert!(matches_accept("DATA.CSV", "", ".csv,.tsv"));
        assert!(!matches_accept("notes.txt", "", ".csv,.tsv"));
    }

    #[test]
    fn test_mime_tokens_match_exactly_or_by_wildcard() {
        assert!(matches_accept("x", "text/csv", "text/csv"));
        assert!(matches_accept("x", "Text/CSV", "text/csv"));
        assert!(matches_accept("x", "text/plain", "text/*"));
        assert!(!matches_accept("x", "application/json", "text/*"));
        assert!(!matches_accept("x", "", "text/csv"));
    }

    #[test]
    fn test_filter_tolerates_spaces_and_empty_tokens() {
        assert!(matches_accept("data.tsv", "", " .csv , .tsv ,"));
    }

    #[test]
    fn test_tokenless_filter_accepts_everything() {
        assert!(matches_accept("notes.txt", "text/plain", ""));
        assert!(matches_accept("notes.txt", "text/plain", " , "));
    }

    #[test]
    fn test_batch_without_filter_is_accepted() {
        let files = vec![file("data.csv", "text/csv"), file("notes.txt", "text/plain")];
        let verdict = evaluate_batch(files.clone(), &options(None, true, false));

        assert_eq!(verdict, BatchVerdict::Accepted(files));
    }

    #[test]
    fn test_single_file_mode_rejects_multi_file_batches() {
        let files = vec![file("a.csv", ""), file("b.tsv", "")];
        let verdict = evaluate_batch(files, &options(None, false, false));

        assert_eq!(verdict, BatchVerdict::Rejected);

        let one = vec![file("a.csv", "")];
        let verdict = evaluate_batch(one.clone(), &options(None, false, false));
        assert_eq!(verdict, BatchVerdict::Accepted(one));
    }

    #[test]
    fn test_one_filtered_file_rejects_the_whole_batch() {
        let files = vec![file("data.csv", ""), file("notes.txt", "")];
        let verdict = evaluate_batch(files, &options(Some(".csv,.tsv"), true, false));

        assert_eq!(verdict, BatchVerdict::Rejected);
    }

    #[test]
    fn test_disabled_zone_ignores_every_batch() {
        let files = vec![file("data.csv", "")];
        let verdict = evaluate_batch(files, &options(Some(".csv"), true, true));

        assert_eq!(verdict, BatchVerdict::Ignored);
    }

    #[test]
    fn test_empty_batch_is_accepted() {
        let verdict = evaluate_batch(Vec::<FakeFile>::new(), &options(Some(".csv"), false, false));

        assert_eq!(verdict, BatchVerdict::Accepted(Vec::new()));
    }
}
