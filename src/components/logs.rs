//! Activity log panel.
//!
//! Collects drop-zone activity (accepted batches, rejections) and
//! displays it with auto-scroll, newest at the bottom.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MAX_LOG_ENTRIES;
use crate::i18n::{I18n, Language, TextKey};
use crate::types::{LogEntry, LogLevel};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    web_sys::window()
        .unwrap()
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
}

/// Appends one entry, dropping the oldest past the cap.
pub fn push_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: impl Into<String>) {
    let entry = LogEntry::now(level, message.into());
    set_logs.update(|logs| {
        logs.push(entry);
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    });
}

/// Activity log panel component.
#[component]
pub fn LogsPanel(
    /// Current UI language.
    language: ReadSignal<Language>,
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        // Track logs changes
        let _ = logs.get();

        // Scroll to bottom after DOM update
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">
                    {move || I18n::new(language.get()).tr(TextKey::LogsTitle)}
                </span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    {move || I18n::new(language.get()).tr(TextKey::LogsClear)}
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(_, entry)| {
                        view! {
                            <div class=format!("log-entry {}", entry.level.css_class())>
                                <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                {entry.level.emoji()} " " {entry.message.clone()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
