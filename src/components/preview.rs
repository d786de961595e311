//! Classified batch preview.
//!
//! Shows the per-kind outcome of the last accepted drop: which kind
//! each held file was classified as, its name and its size.

use leptos::*;

use crate::i18n::{I18n, Language, TextKey};
use crate::types::ClassifiedFileSet;

/// Human-readable byte count.
fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes == 0 {
        "0 B".to_string()
    } else if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

#[component]
pub fn PreviewSection(
    language: ReadSignal<Language>,
    classified: ReadSignal<Option<ClassifiedFileSet>>,
) -> impl IntoView {
    view! {
        <div class="preview-section">
            <div class="preview-header">
                <div class="preview-title">
                    {move || I18n::new(language.get()).tr(TextKey::PreviewTitle)}
                </div>
            </div>

            <div class="preview-list">
                <For
                    each=move || {
                        classified
                            .get()
                            .map(|set| {
                                set.iter()
                                    .map(|(kind, file)| (kind, file.name(), file.size() as u64))
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default()
                    }
                    key=|(kind, name, _)| (*kind, name.clone())
                    children=move |(kind, name, size)| {
                        view! {
                            <div class="preview-item">
                                <span class="preview-item-kind">{kind.label()}</span>
                                <span class="preview-item-name">{name}</span>
                                <span class="preview-item-size">{format_file_size(size)}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
    }
}
