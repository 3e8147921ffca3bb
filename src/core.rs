//! Built-in core translations.
//!
//! A small set of entries compiled into the crate for the locales it ships
//! with, merged beneath each locale's custom file so applications can
//! override any entry key by key. The `__date` / `__dateTime` entries carry
//! the locale's date format patterns.

use std::collections::HashMap;

/// Core entries for `locale`, or `None` for locales without built-ins.
pub fn core_translations(locale: &str) -> Option<HashMap<String, String>> {
    let entries: &[(&str, &str)] = match locale {
        "en" => ENGLISH_CORE,
        "fr" => FRENCH_CORE,
        _ => return None,
    };
    Some(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

// ==================== English Core ====================

const ENGLISH_CORE: &[(&str, &str)] = &[
    // Date format patterns
    ("__date", "Y-m-d"),
    ("__dateTime", "Y-m-d H:i:s"),
    // Common UI strings
    ("yes", "Yes"),
    ("no", "No"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("search", "Search"),
    ("back", "Back"),
    ("loading", "Loading…"),
    ("required_field", "This field is required"),
    ("not_found", "Not found"),
];

// ==================== French Core ====================

const FRENCH_CORE: &[(&str, &str)] = &[
    // Date format patterns
    ("__date", "d/m/Y"),
    ("__dateTime", "d/m/Y H:i:s"),
    // Common UI strings
    ("yes", "Oui"),
    ("no", "Non"),
    ("save", "Enregistrer"),
    ("cancel", "Annuler"),
    ("delete", "Supprimer"),
    ("search", "Rechercher"),
    ("back", "Retour"),
    ("loading", "Chargement…"),
    ("required_field", "Ce champ est obligatoire"),
    ("not_found", "Introuvable"),
];
