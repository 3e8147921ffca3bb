use std::path::PathBuf;

/// Locale applied when a requested locale is missing from the allow-list.
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Debug, Clone)]
pub struct Config {
    /// Locale identifiers the application accepts (e.g. "en", "fr")
    pub locales: Vec<String>,

    /// Directory holding one `<locale>.json` translation file per locale
    pub translations_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Comma-separated allow-list, e.g. "en,fr,de"
            locales: std::env::var("LOCALIZER_LOCALES")
                .map(|raw| parse_locales(&raw))
                .unwrap_or_else(|_| vec![FALLBACK_LOCALE.to_string()]),

            translations_dir: std::env::var("LOCALIZER_TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("translations")),
        }
    }

    /// Whether `locale` is in the configured allow-list.
    pub fn is_allowed(&self, locale: &str) -> bool {
        self.locales.iter().any(|allowed| allowed == locale)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: vec![FALLBACK_LOCALE.to_string()],
            translations_dir: PathBuf::from("translations"),
        }
    }
}

fn parse_locales(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
