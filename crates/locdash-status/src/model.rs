//! Translation status data model.
//!
//! These types mirror the JSON shape emitted by the status-computation
//! step. They are treated as read-only inputs for the duration of a
//! single render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One translation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Language tag, unique across the configured locale list.
    pub lang: String,
    /// Human-readable display name.
    pub label: String,
}

impl Locale {
    /// Create a new locale.
    pub fn new(lang: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            label: label.into(),
        }
    }
}

/// Key-level completeness of a translated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completeness {
    /// Whether every tracked key has a translation.
    pub complete: bool,
    /// Keys absent from the translation. Only meaningful when `complete`
    /// is false.
    #[serde(default)]
    pub missing_keys: Vec<String>,
}

impl Completeness {
    /// A fully translated file.
    pub fn complete() -> Self {
        Self {
            complete: true,
            missing_keys: Vec::new(),
        }
    }

    /// A partially translated file with the given untranslated keys.
    pub fn incomplete(missing_keys: Vec<String>) -> Self {
        Self {
            complete: false,
            missing_keys,
        }
    }
}

impl Default for Completeness {
    fn default() -> Self {
        Self::complete()
    }
}

/// Translation state of one (content item, locale) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStatus {
    /// No translated file exists for this locale.
    pub is_missing: bool,
    /// The translation is stale relative to its source.
    pub is_outdated: bool,
    /// Key-level completeness of the translated file.
    #[serde(default)]
    pub completeness: Completeness,
    /// Hosting URL of the translated file, when known.
    #[serde(default)]
    pub git_hosting_file_url: Option<String>,
    /// Hosting URL of the source change history, when known.
    #[serde(default)]
    pub git_hosting_history_url: Option<String>,
}

/// One source content item tracked for translation coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTranslationStatus {
    /// Locale-independent identity of the item, unique within a status list.
    pub shared_path: String,
    /// Hosting URL of the source file, when known.
    #[serde(default)]
    pub git_hosting_file_url: Option<String>,
    /// Per-locale translation status. An absent entry is equivalent to an
    /// explicit missing translation.
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationStatus>,
}

impl FileTranslationStatus {
    /// Create a status entry with no known translations.
    pub fn new(shared_path: impl Into<String>) -> Self {
        Self {
            shared_path: shared_path.into(),
            git_hosting_file_url: None,
            translations: BTreeMap::new(),
        }
    }

    /// Look up the translation record for one locale.
    pub fn translation(&self, lang: &str) -> Option<&TranslationStatus> {
        self.translations.get(lang)
    }
}
