use thiserror::Error;

/// Errors surfaced by the process-wide context accessors.
///
/// Everything else in this crate is defined fallback behavior rather than
/// failure: unknown keys echo, unparseable dates format to empty strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocalizerError {
    /// No translator has been installed in the shared context slot.
    #[error("localization context not initialized; install a Translator first")]
    NotInitialized,
}
