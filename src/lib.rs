//! TabDrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend providing a drag & drop intake zone for
//! tabular files. Dropped files are classified by suffix (CSV / TSV)
//! and the per-kind set is reported to the surrounding page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (language toggle)                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadZone (drop target + held file list)              │
//! │  ├── PreviewSection (when a batch is classified)            │
//! │  └── LogsPanel (drop-zone activity)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileKind, ClassifiedFileSet, etc.)
//! - [`i18n`] - Static text localization
//! - [`components`] - UI components (Header, UploadZone, Preview, etc.)
//! - [`services`] - Drag & drop capability binding

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod i18n;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Localization
pub use i18n::{detect_language, I18n, Language, TextKey};

// Types
pub use types::{
    // Files
    FileKind, DroppedFile, ClassifiedFileSet,
    // Batches
    BatchSummary, BatchEntry,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 TabDrop - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (language, set_language) = create_signal(detect_language());
    let (classified, set_classified) = create_signal(None::<ClassifiedFileSet>);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    let (reject_notice, set_reject_notice) = create_signal(false);

    let on_files_uploaded = Callback::new(move |batch: ClassifiedFileSet| {
        match serde_json::to_string(&batch.summary()) {
            Ok(json) => push_log(
                set_logs,
                LogLevel::Success,
                format!("Batch classified: {}", json),
            ),
            Err(e) => push_log(
                set_logs,
                LogLevel::Error,
                format!("Could not serialize batch summary: {}", e),
            ),
        }
        set_classified.set(Some(batch));
    });

    let on_files_rejected = Callback::new(move |_: ()| {
        push_log(
            set_logs,
            LogLevel::Warning,
            "Batch rejected by the drop zone constraints",
        );
        set_reject_notice.set(true);
        spawn_local(async move {
            TimeoutFuture::new(REJECT_NOTICE_MS).await;
            set_reject_notice.set(false);
        });
    });

    view! {
        <Header language=language set_language=set_language/>

        <div class="container">
            <Hero language=language/>

            <UploadZone
                language=language
                on_files_uploaded=on_files_uploaded
                on_files_rejected=on_files_rejected
                accept=DEFAULT_ACCEPT.to_string()
                multiple=true
            />

            // Transient notice after a rejected batch
            <Show
                when=move || reject_notice.get()
                fallback=|| view! { }
            >
                <div class="reject-notice">
                    {move || I18n::new(language.get()).tr(TextKey::RejectedNotice)}
                </div>
            </Show>

            // Preview section (appears after the first accepted batch)
            <Show
                when=move || classified.get().is_some()
                fallback=|| view! { }
            >
                <PreviewSection language=language classified=classified/>
            </Show>

            // Show LogsPanel when logs exist
            <Show
                when=move || !logs.get().is_empty()
                fallback=|| view! { }
            >
                <LogsPanel language=language logs=logs set_logs=set_logs/>
            </Show>
        </div>

        <Footer/>
    }
}
