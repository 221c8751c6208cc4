//! Three-way status classification.
//!
//! A translation is classified as missing, outdated, or done with the
//! priority missing > outdated > done. The classification is a single
//! exhaustive match, so an upstream record carrying both `is_missing`
//! and `is_outdated` is always reported as missing and never counted
//! twice.

use crate::model::{FileTranslationStatus, TranslationStatus};
use serde::{Deserialize, Serialize};

/// Translation state of one (content item, locale) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationState {
    /// Translation exists, is current, and is complete.
    Done,
    /// Translation exists but is stale or incomplete.
    Outdated,
    /// No translation artifact exists.
    Missing,
}

impl TranslationStatus {
    /// Classify this translation record.
    pub fn state(&self) -> TranslationState {
        if self.is_missing {
            TranslationState::Missing
        } else if self.is_outdated || !self.completeness.complete {
            TranslationState::Outdated
        } else {
            TranslationState::Done
        }
    }
}

impl FileTranslationStatus {
    /// Classify this item for one locale. An absent locale entry is
    /// missing, not an error.
    pub fn state_for(&self, lang: &str) -> TranslationState {
        match self.translations.get(lang) {
            None => TranslationState::Missing,
            Some(translation) => translation.state(),
        }
    }
}

/// Partition of a whole status list for one locale.
///
/// The outdated and missing sets are materialized because the locale
/// summary renders their items; the done count is derived from the
/// partition, so the three counts always sum to the list length.
#[derive(Debug)]
pub struct LocaleBreakdown<'a> {
    /// Items with a stale or incomplete translation.
    pub outdated: Vec<&'a FileTranslationStatus>,
    /// Items with no translation artifact.
    pub missing: Vec<&'a FileTranslationStatus>,
    total: usize,
}

impl<'a> LocaleBreakdown<'a> {
    /// Partition `status` for the given locale tag.
    pub fn classify(status: &'a [FileTranslationStatus], lang: &str) -> Self {
        let mut outdated = Vec::new();
        let mut missing = Vec::new();
        for item in status {
            match item.state_for(lang) {
                TranslationState::Done => {}
                TranslationState::Outdated => outdated.push(item),
                TranslationState::Missing => missing.push(item),
            }
        }
        Self {
            outdated,
            missing,
            total: status.len(),
        }
    }

    /// Number of content items in the classified list.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of items with a current, complete translation.
    pub fn done_count(&self) -> usize {
        self.total - self.outdated.len() - self.missing.len()
    }

    /// Number of items with a stale or incomplete translation.
    pub fn outdated_count(&self) -> usize {
        self.outdated.len()
    }

    /// Number of items with no translation artifact.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Whether every item is fully translated for this locale.
    pub fn is_complete(&self) -> bool {
        self.outdated.is_empty() && self.missing.is_empty()
    }
}
