//! Process-wide active translator.
//!
//! The hosting application installs one `Translator` per process (or per
//! request context) and the free functions here operate on it, so call
//! sites don't have to thread the handle through every signature. Every
//! accessor fails with `LocalizerError::NotInitialized` when nothing is
//! installed. Applications that prefer explicit handles can call the same
//! methods on `Translator` directly; these functions are thin delegations.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::LocalizerError;
use crate::translator::Translator;

/// The single active-instance slot.
static ACTIVE: RwLock<Option<Translator>> = RwLock::new(None);

/// Install `translator` as the process-wide active instance, replacing any
/// previous one.
pub fn install(translator: Translator) {
    *ACTIVE.write().unwrap() = Some(translator);
}

/// Remove the active instance. Subsequent accessor calls fail with
/// `NotInitialized` until `install` is called again.
pub fn clear() {
    *ACTIVE.write().unwrap() = None;
}

/// Whether a translator is currently installed.
pub fn is_initialized() -> bool {
    ACTIVE.read().unwrap().is_some()
}

fn with_active<T>(f: impl FnOnce(&Translator) -> T) -> Result<T, LocalizerError> {
    match ACTIVE.read().unwrap().as_ref() {
        Some(translator) => Ok(f(translator)),
        None => Err(LocalizerError::NotInitialized),
    }
}

/// Translate `key` on the active instance. See `Translator::translate`.
pub fn t(key: &str, placeholders: &[(&str, &str)], safe: bool) -> Result<String, LocalizerError> {
    with_active(|translator| translator.translate(key, placeholders, safe))
}

/// Localized field name on the active instance.
pub fn localized_field_name(field_name: &str) -> Result<String, LocalizerError> {
    with_active(|translator| translator.localized_field_name(field_name))
}

/// Resolve a localized entity field on the active instance.
pub fn entity(
    record: &HashMap<String, String>,
    default: Option<&str>,
    field_name: &str,
    safe: bool,
) -> Result<String, LocalizerError> {
    with_active(|translator| translator.entity(record, default, field_name, safe))
}

/// The active instance's locale.
///
/// Locale validation happens at write time (`Translator::new` /
/// `set_locale`), so no revalidation is needed here; this always equals
/// `Translator::locale` on the installed instance.
pub fn current_locale() -> Result<String, LocalizerError> {
    with_active(|translator| translator.locale().to_string())
}

/// Format a date string with the active locale's `__date` pattern.
pub fn date(input: &str) -> Result<String, LocalizerError> {
    with_active(|translator| translator.format_date(input))
}

/// Format a date-time string with the active locale's `__dateTime` pattern.
pub fn date_time(input: &str, show_seconds: bool) -> Result<String, LocalizerError> {
    with_active(|translator| translator.format_date_time(input, show_seconds))
}

/// Switch the active instance's locale (validated, with reload).
pub fn set_locale(new_locale: &str) -> Result<(), LocalizerError> {
    match ACTIVE.write().unwrap().as_mut() {
        Some(translator) => {
            translator.set_locale(new_locale);
            Ok(())
        }
        None => Err(LocalizerError::NotInitialized),
    }
}
