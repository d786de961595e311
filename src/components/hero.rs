//! Hero section component

use leptos::*;

use crate::i18n::{I18n, Language, TextKey};

#[component]
pub fn Hero(language: ReadSignal<Language>) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{move || I18n::new(language.get()).tr(TextKey::AppTitle)}</h1>
            <p class="subtitle">
                {move || I18n::new(language.get()).tr(TextKey::AppSubtitle)}
            </p>
        </div>
    }
}
