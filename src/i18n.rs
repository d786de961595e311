//! Static text localization.
//!
//! Every user-facing string goes through [`I18n::tr`], a pure lookup
//! from a [`TextKey`] to its localized text. No runtime catalog, no
//! format machinery; the table is the source of truth.

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Maps a BCP-47 tag ("fr", "fr-FR", ...) to a supported language.
    pub fn from_code(code: &str) -> Self {
        if code.starts_with("fr") {
            Language::French
        } else {
            Language::English
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }
}

/// Keys for every localized string in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    DropIdlePrompt,
    DropActivePrompt,
    PreviewTitle,
    LogsTitle,
    LogsClear,
    RejectedNotice,
}

/// Pure text lookup for one language.
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        match (self.language, key) {
            (Language::English, TextKey::AppTitle) => "TabDrop",
            (Language::French, TextKey::AppTitle) => "TabDrop",
            (Language::English, TextKey::AppSubtitle) => {
                "Drop CSV or TSV files to stage them for import."
            }
            (Language::French, TextKey::AppSubtitle) => {
                "Déposez des fichiers CSV ou TSV pour préparer l'import."
            }
            (Language::English, TextKey::DropIdlePrompt) => {
                "Drag n' drop some files here, or click to select files"
            }
            (Language::French, TextKey::DropIdlePrompt) => {
                "Glissez-déposez des fichiers ici, ou cliquez pour sélectionner"
            }
            (Language::English, TextKey::DropActivePrompt) => "Drop the files here ...",
            (Language::French, TextKey::DropActivePrompt) => "Déposez les fichiers ici ...",
            (Language::English, TextKey::PreviewTitle) => "🗂 Classified files",
            (Language::French, TextKey::PreviewTitle) => "🗂 Fichiers classés",
            (Language::English, TextKey::LogsTitle) => "📋 Activity",
            (Language::French, TextKey::LogsTitle) => "📋 Activité",
            (Language::English, TextKey::LogsClear) => "Clear",
            (Language::French, TextKey::LogsClear) => "Effacer",
            (Language::English, TextKey::RejectedNotice) => {
                "🚫 Batch rejected: check the file count and types"
            }
            (Language::French, TextKey::RejectedNotice) => {
                "🚫 Lot rejeté : vérifiez le nombre et le type des fichiers"
            }
        }
    }
}

/// Picks the UI language from the browser locale, English fallback.
pub fn detect_language() -> Language {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}
