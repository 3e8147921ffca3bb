//! Integration tests for the localizer crate.
//!
//! These tests verify the interaction between multiple modules: translation
//! resource files on disk, the process-wide context, locale switching, and
//! the complete lookup/escape/format workflow.

use std::collections::HashMap;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;

use localizer::{context, Config, LocalizerError, Translator};

// ==================== Test Helpers ====================

/// Create a translations directory with French and English resource files.
fn create_translations_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_locale_file(
        dir.path(),
        "fr",
        r#"{
            "greeting": "Bonjour {name}",
            "items_left": "{count} articles restants",
            "footer": "Propulsé par <strong>Exemple</strong>",
            "cancel": "Abandonner"
        }"#,
    );
    write_locale_file(
        dir.path(),
        "en",
        r#"{
            "greeting": "Hello {name}",
            "items_left": "{count} items left"
        }"#,
    );
    dir
}

fn write_locale_file(dir: &Path, locale: &str, contents: &str) {
    std::fs::write(dir.join(format!("{locale}.json")), contents)
        .expect("Failed to write locale file");
}

/// Config allowing en/fr/de over the given translations directory.
fn create_test_config(dir: &TempDir) -> Config {
    Config {
        locales: vec!["en".to_string(), "fr".to_string(), "de".to_string()],
        translations_dir: dir.path().to_path_buf(),
    }
}

fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ==================== Translator Handle Workflow ====================

#[test]
fn test_full_lookup_workflow_from_files() {
    let dir = create_translations_dir();
    let translator = Translator::new("fr", create_test_config(&dir));

    assert_eq!(translator.locale(), "fr");
    assert_eq!(
        translator.translate("greeting", &[("name", "Ada")], true),
        "Bonjour Ada"
    );
    assert_eq!(
        translator.translate("items_left", &[("count", "3")], false),
        "3 articles restants"
    );
    // Custom file entry wins over the French core entry
    assert_eq!(translator.translate("cancel", &[], true), "Abandonner");
    // Core-only entry still resolves
    assert_eq!(translator.translate("yes", &[], true), "Oui");
}

#[test]
fn test_escaping_applies_to_file_entries() {
    let dir = create_translations_dir();
    let translator = Translator::new("fr", create_test_config(&dir));

    assert_eq!(
        translator.translate("footer", &[], false),
        "Propulsé par &lt;strong&gt;Exemple&lt;/strong&gt;"
    );
    assert_eq!(
        translator.translate("footer", &[], true),
        "Propulsé par <strong>Exemple</strong>"
    );
}

#[test]
fn test_locale_switching_swaps_maps() {
    let dir = create_translations_dir();
    let mut translator = Translator::new("fr", create_test_config(&dir));
    assert_eq!(
        translator.translate("greeting", &[("name", "Ada")], true),
        "Bonjour Ada"
    );

    translator.set_locale("en");
    assert_eq!(
        translator.translate("greeting", &[("name", "Ada")], true),
        "Hello Ada"
    );

    // Unknown locale falls back to "en" and stays functional
    translator.set_locale("zz");
    assert_eq!(translator.locale(), "en");
    assert_eq!(
        translator.translate("greeting", &[("name", "Ada")], true),
        "Hello Ada"
    );
}

#[test]
fn test_disallowed_construction_locale_falls_back() {
    let dir = create_translations_dir();
    let translator = Translator::new("pt", create_test_config(&dir));
    assert_eq!(translator.locale(), "en");
}

#[test]
fn test_locale_with_no_resources_echoes_keys() {
    let dir = create_translations_dir();
    let translator = Translator::new("de", create_test_config(&dir));
    assert_eq!(translator.locale(), "de");
    assert_eq!(translator.translate("greeting", &[], true), "greeting");
    // Built-in default patterns apply without __date/__dateTime entries
    assert_eq!(translator.format_date("2024-01-05"), "2024-01-05");
}

#[test]
fn test_entity_resolution_against_locale() {
    let dir = create_translations_dir();
    let translator = Translator::new("fr", create_test_config(&dir));

    let product = record(&[("name", "Widget"), ("name_fr", "Gadget")]);
    assert_eq!(translator.entity(&product, None, "name", false), "Gadget");

    let unlocalized = record(&[("name", "Widget")]);
    assert_eq!(translator.entity(&unlocalized, None, "name", false), "Widget");
    assert_eq!(
        translator.entity(&unlocalized, Some("Fallback"), "name", false),
        "Fallback"
    );
}

#[test]
fn test_date_formats_follow_locale_file_overrides() {
    let dir = create_translations_dir();
    write_locale_file(dir.path(), "de", r#"{"__date": "d.m.Y", "__dateTime": "d.m.Y H:i:s"}"#);
    let translator = Translator::new("de", create_test_config(&dir));

    assert_eq!(translator.format_date("2024-01-05"), "05.01.2024");
    assert_eq!(
        translator.format_date_time("2024-01-05 10:20:30", false),
        "05.01.2024 10:20"
    );
}

// ==================== Process-Wide Context Workflow ====================

#[test]
#[serial]
fn test_context_accessors_require_install() {
    context::clear();
    assert_eq!(
        context::t("greeting", &[], false),
        Err(LocalizerError::NotInitialized)
    );
    assert_eq!(context::current_locale(), Err(LocalizerError::NotInitialized));
    assert_eq!(context::date("2024-01-05"), Err(LocalizerError::NotInitialized));
}

#[test]
#[serial]
fn test_context_full_workflow() {
    let dir = create_translations_dir();
    context::install(Translator::new("fr", create_test_config(&dir)));

    assert_eq!(context::current_locale().unwrap(), "fr");
    assert_eq!(
        context::t("greeting", &[("name", "Ada & Co")], false).unwrap(),
        "Bonjour Ada &amp; Co"
    );
    assert_eq!(context::localized_field_name("name").unwrap(), "name_fr");

    let product = record(&[("name_fr", "Gadget")]);
    assert_eq!(
        context::entity(&product, None, "name", false).unwrap(),
        "Gadget"
    );

    assert_eq!(context::date("2024-01-05").unwrap(), "05/01/2024");
    assert_eq!(
        context::date_time("2024-01-05 10:20:30", true).unwrap(),
        "05/01/2024 10:20:30"
    );
    assert_eq!(context::date("not-a-date").unwrap(), "");

    context::set_locale("en").unwrap();
    assert_eq!(
        context::t("greeting", &[("name", "Ada")], false).unwrap(),
        "Hello Ada"
    );
    assert_eq!(context::date("2024-01-05").unwrap(), "2024-01-05");

    context::clear();
    assert_eq!(
        context::t("greeting", &[], false),
        Err(LocalizerError::NotInitialized)
    );
}

#[test]
#[serial]
fn test_context_survives_reinstall_per_request() {
    let dir = create_translations_dir();
    let config = create_test_config(&dir);

    // Simulate two requests with different locales sharing one process
    context::install(Translator::new("fr", config.clone()));
    assert_eq!(context::t("yes", &[], false).unwrap(), "Oui");

    context::install(Translator::new("en", config));
    assert_eq!(context::t("yes", &[], false).unwrap(), "Yes");

    context::clear();
}
