//! Tabular file drop zone.
//!
//! Binds drag & drop plus a hidden file input, runs every accepted
//! batch through suffix classification and reports the resulting
//! per-kind set to the parent. Files with unrecognized suffixes are
//! silently left out.

use leptos::*;
use web_sys::{DragEvent, MouseEvent};

use crate::i18n::{I18n, Language, TextKey};
use crate::services::{
    evaluate_batch, read_dropped_files, read_picked_files, BatchVerdict, DropzoneOptions,
};
use crate::types::ClassifiedFileSet;

#[component]
pub fn UploadZone(
    /// Current UI language.
    language: ReadSignal<Language>,
    /// Called once per accepted batch with the freshly classified set.
    on_files_uploaded: Callback<ClassifiedFileSet>,
    /// Called when a batch violates the zone constraints.
    #[prop(optional)] on_files_rejected: Option<Callback<()>>,
    /// Comma-separated accept filter, passed through to the input.
    #[prop(optional)] accept: Option<String>,
    /// Whether a batch may carry more than one file.
    #[prop(default = true)] multiple: bool,
    /// Suppresses drop handling entirely.
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let (held_files, set_held_files) = create_signal(ClassifiedFileSet::new());

    let accept_attr = accept.clone();
    let options = store_value(DropzoneOptions {
        accept,
        multiple,
        disabled,
    });
    let input_ref = create_node_ref::<leptos::html::Input>();

    let handle_batch = move |files: Vec<web_sys::File>| {
        let total = files.len();
        match options.with_value(|opts| evaluate_batch(files, opts)) {
            BatchVerdict::Accepted(files) => {
                let batch = ClassifiedFileSet::from_batch(files);
                log::info!("📥 Batch accepted: {}/{} file(s) recognized", batch.len(), total);
                set_held_files.set(batch.clone());
                on_files_uploaded.call(batch);
            }
            BatchVerdict::Rejected => {
                log::warn!("🚫 Batch of {} file(s) rejected by zone constraints", total);
                if let Some(callback) = on_files_rejected {
                    callback.call(());
                }
            }
            BatchVerdict::Ignored => {}
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled {
            set_drag_active.set(true);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        match read_dropped_files(&ev) {
            Ok(files) => handle_batch(files),
            Err(e) => log::error!("❌ {}", e),
        }
    };

    let on_input_change = move |ev: web_sys::Event| match read_picked_files(&ev) {
        Ok(files) => handle_batch(files),
        Err(e) => log::error!("❌ {}", e),
    };

    // Handler for clicking the zone itself
    let open_file_dialog = move |_: MouseEvent| {
        if disabled {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-zone">
            <div
                class="upload-drop-area"
                class=("drag-active", move || drag_active.get())
                on:click=open_file_dialog
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    class="upload-input"
                    style="display:none"
                    node_ref=input_ref
                    accept=accept_attr
                    multiple=multiple
                    disabled=disabled
                    on:change=on_input_change
                    on:click=move |ev: MouseEvent| ev.stop_propagation()
                />
                <p class="upload-prompt">
                    {move || {
                        let i18n = I18n::new(language.get());
                        if drag_active.get() {
                            i18n.tr(TextKey::DropActivePrompt)
                        } else {
                            i18n.tr(TextKey::DropIdlePrompt)
                        }
                    }}
                </p>
            </div>

            <Show
                when=move || !held_files.get().is_empty()
                fallback=|| view! { }
            >
                <ul class="upload-file-list">
                    <For
                        each=move || held_files.get().file_names()
                        key=|name| name.clone()
                        children=move |name| view! { <li>{name}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}
