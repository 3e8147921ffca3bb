//! The `Translator`: locale-validated translation lookup with placeholder
//! substitution, HTML-safe output, entity field resolution, and per-locale
//! date formatting.

use std::collections::HashMap;
use tracing::debug;

use crate::config::{Config, FALLBACK_LOCALE};
use crate::core::core_translations;
use crate::escape::escape_html;
use crate::format::{self, DEFAULT_DATETIME_PATTERN, DEFAULT_DATE_PATTERN};
use crate::metrics::LookupMetrics;
use crate::store::TranslationStore;

/// Holds the translation map for one locale at a time.
///
/// The locale is validated against the configured allow-list at every write
/// (construction and `set_locale`), falling back to `"en"`, so the stored
/// locale is always a member of the allow-list or the fallback. Reads return
/// the stored value as-is.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    translations: HashMap<String, String>,
    config: Config,
    store: TranslationStore,
}

impl Translator {
    /// Create a translator for `requested`, falling back to `"en"` when the
    /// locale is not in the configured allow-list, and load its translations.
    pub fn new(requested: &str, config: Config) -> Self {
        let locale = Self::resolve_locale(requested, &config);
        let store = TranslationStore::new(config.translations_dir.clone());
        let mut translator = Self {
            locale,
            translations: HashMap::new(),
            config,
            store,
        };
        translator.load_translations();
        translator
    }

    fn resolve_locale(requested: &str, config: &Config) -> String {
        if config.is_allowed(requested) {
            requested.to_string()
        } else {
            FALLBACK_LOCALE.to_string()
        }
    }

    /// Rebuild the translation map for the current locale: core entries
    /// first, then the locale's custom file so its entries win on key
    /// collision. Returns whether a custom resource file was found.
    fn load_translations(&mut self) -> bool {
        self.translations.clear();
        if let Some(core) = core_translations(&self.locale) {
            self.translations.extend(core);
        }
        let custom = self.store.load(&self.locale);
        let found = custom.is_some();
        if let Some(custom) = custom {
            self.translations.extend(custom);
        }
        debug!(
            locale = %self.locale,
            entries = self.translations.len(),
            custom_found = found,
            "loaded translations"
        );
        found
    }

    /// Translate `key`, substituting `{name}` placeholder tokens.
    ///
    /// An unknown key echoes back as its own translation; this is default
    /// behavior, not an error. Placeholder replacement is plain substring
    /// replacement, and replacement values are inserted verbatim. Unless
    /// `safe` is true, the final string is HTML-escaped; `safe` callers take
    /// responsibility for downstream escaping.
    pub fn translate(&self, key: &str, placeholders: &[(&str, &str)], safe: bool) -> String {
        let metrics = LookupMetrics::global();
        let mut text = match self.translations.get(key) {
            Some(value) => {
                metrics.record_hit();
                value.clone()
            }
            None => {
                metrics.record_key_fallback();
                key.to_string()
            }
        };
        for (name, value) in placeholders {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        if safe {
            text
        } else {
            escape_html(&text)
        }
    }

    /// Switch to `new_locale` (validated like construction) and reload.
    pub fn set_locale(&mut self, new_locale: &str) {
        self.locale = Self::resolve_locale(new_locale, &self.config);
        self.load_translations();
    }

    /// The current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Localized form of a field name: `"{field_name}_{locale}"`, escaped.
    ///
    /// Returns an empty string for an empty `field_name`. No placeholder
    /// substitution is applied.
    pub fn localized_field_name(&self, field_name: &str) -> String {
        if field_name.is_empty() {
            return String::new();
        }
        escape_html(&format!("{field_name}_{}", self.locale))
    }

    /// Resolve a localized field value out of an entity record.
    ///
    /// Resolution order for `field_name` under the current locale:
    /// a non-empty `"{field_name}_{locale}"` entry, else `default` when
    /// provided, else the plain `field_name` entry (even when empty), else
    /// the empty string. An empty record always yields an empty string.
    /// Escaped unless `safe`.
    pub fn entity(
        &self,
        record: &HashMap<String, String>,
        default: Option<&str>,
        field_name: &str,
        safe: bool,
    ) -> String {
        if record.is_empty() {
            return String::new();
        }

        let localized_key = format!("{field_name}_{}", self.locale);
        let value = match record.get(&localized_key) {
            Some(localized) if !localized.is_empty() => localized.as_str(),
            _ => match default {
                Some(default) => default,
                None => record.get(field_name).map(String::as_str).unwrap_or(""),
            },
        };

        if safe {
            value.to_string()
        } else {
            escape_html(value)
        }
    }

    /// Format a free-form date string with the locale's `__date` pattern.
    ///
    /// Unparseable input degrades to an empty string. A locale without a
    /// `__date` entry uses the built-in default pattern.
    pub fn format_date(&self, input: &str) -> String {
        let Some(when) = format::parse_date(input) else {
            LookupMetrics::global().record_date_parse_failure();
            return String::new();
        };
        let pattern = self.pattern_for("__date", DEFAULT_DATE_PATTERN);
        escape_html(&format::format_with_pattern(&when, pattern))
    }

    /// Format a free-form date string with the locale's `__dateTime`
    /// pattern, stripping the seconds token unless `show_seconds`.
    pub fn format_date_time(&self, input: &str, show_seconds: bool) -> String {
        let Some(when) = format::parse_date(input) else {
            LookupMetrics::global().record_date_parse_failure();
            return String::new();
        };
        let pattern = self.pattern_for("__dateTime", DEFAULT_DATETIME_PATTERN);
        if show_seconds {
            escape_html(&format::format_with_pattern(&when, pattern))
        } else {
            let stripped = format::strip_seconds(pattern);
            escape_html(&format::format_with_pattern(&when, &stripped))
        }
    }

    // Format patterns fall back to a real default, never to the key name
    // the way `translate` would.
    fn pattern_for<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.translations
            .get(key)
            .map(String::as_str)
            .unwrap_or(default)
    }
}
