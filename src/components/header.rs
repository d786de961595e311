use leptos::*;

use crate::config::APP_NAME;
use crate::i18n::Language;

#[component]
pub fn Header(
    language: ReadSignal<Language>,
    set_language: WriteSignal<Language>,
) -> impl IntoView {
    // Handler for the language toggle
    let on_language_click = move |_| {
        let next = match language.get() {
            Language::English => Language::French,
            Language::French => Language::English,
        };
        log::info!("🌐 Language switched to {}", next.display_name());
        set_language.set(next);
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <button class="language-toggle" on:click=on_language_click>
                    {move || language.get().display_name()}
                </button>
            </div>
        </header>
    }
}
