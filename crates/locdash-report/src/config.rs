//! Dashboard configuration types.

use crate::assets;
use crate::error::{ReportError, Result};
use crate::progress::ZeroTotalPolicy;
use locdash_status::{Locale, TranslationState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// The closed vocabulary of UI strings consulted by the built-in renderers.
///
/// Serde keys use the dotted names of the original configuration format.
/// Every field is required and unknown keys are rejected, so an incomplete
/// or misspelled table fails when the configuration is deserialized, never
/// deep inside a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiText {
    /// `lang` attribute of the generated document.
    pub lang: String,
    /// `dir` attribute of the generated document.
    pub dir: String,
    /// Heading of the status-by-locale section.
    #[serde(rename = "statusByLocale.heading")]
    pub status_by_locale_heading: String,
    /// Title of one locale block; placeholders `{locale_name}`, `{locale_tag}`.
    #[serde(rename = "statusByLocale.detailsTitleFormat")]
    pub details_title_format: String,
    /// Count summary of one locale block; placeholders `{done_amount}`,
    /// `{done_word}`, `{outdated_amount}`, `{outdated_word}`,
    /// `{missing_amount}`, `{missing_word}`.
    #[serde(rename = "statusByLocale.detailsSummaryFormat")]
    pub details_summary_format: String,
    /// Label of the link to a stale translated file.
    #[serde(rename = "statusByLocale.outdatedTranslationLink")]
    pub outdated_translation_link: String,
    /// Label of the link to an incomplete translated file.
    #[serde(rename = "statusByLocale.incompleteTranslationLink")]
    pub incomplete_translation_link: String,
    /// Label of the link to the source change history.
    #[serde(rename = "statusByLocale.sourceChangeHistoryLink")]
    pub source_change_history_link: String,
    /// Heading of the missing-keys list of an incomplete translation.
    #[serde(rename = "statusByLocale.missingKeys")]
    pub missing_keys_heading: String,
    /// Message shown when a locale has no outdated and no missing items.
    #[serde(rename = "statusByLocale.completeTranslation")]
    pub complete_translation: String,
    /// Label of the "create this translation" action link.
    #[serde(rename = "statusByLocale.createFileLink")]
    pub create_file_link: String,
    /// Heading of the status-by-content section.
    #[serde(rename = "statusByContent.heading")]
    pub status_by_content_heading: String,
    /// Label of the fixed first table column.
    #[serde(rename = "statusByContent.tableRowPage")]
    pub table_row_page: String,
    /// Table legend; placeholders `{missing_emoji}`, `{missing_word}`,
    /// `{outdated_emoji}`, `{outdated_word}`, `{done_emoji}`, `{done_word}`.
    #[serde(rename = "statusByContent.tableSummaryFormat")]
    pub table_summary_format: String,
    #[serde(rename = "status.done")]
    pub status_done: String,
    #[serde(rename = "status.outdated")]
    pub status_outdated: String,
    #[serde(rename = "status.missing")]
    pub status_missing: String,
    #[serde(rename = "status.emojiDone")]
    pub emoji_done: String,
    #[serde(rename = "status.emojiOutdated")]
    pub emoji_outdated: String,
    #[serde(rename = "status.emojiMissing")]
    pub emoji_missing: String,
}

impl UiText {
    /// Accessible status label for a classification.
    pub fn status_word(&self, state: TranslationState) -> &str {
        match state {
            TranslationState::Done => &self.status_done,
            TranslationState::Outdated => &self.status_outdated,
            TranslationState::Missing => &self.status_missing,
        }
    }

    /// Status emoji for a classification.
    pub fn status_emoji(&self, state: TranslationState) -> &str {
        match state {
            TranslationState::Done => &self.emoji_done,
            TranslationState::Outdated => &self.emoji_outdated,
            TranslationState::Missing => &self.emoji_missing,
        }
    }
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            dir: "ltr".to_string(),
            status_by_locale_heading: "Translation status by locale".to_string(),
            details_title_format: "{locale_name} ({locale_tag})".to_string(),
            details_summary_format:
                "{done_amount} {done_word}, {outdated_amount} {outdated_word}, {missing_amount} {missing_word}"
                    .to_string(),
            outdated_translation_link: "outdated translation".to_string(),
            incomplete_translation_link: "incomplete translation".to_string(),
            source_change_history_link: "source change history".to_string(),
            missing_keys_heading: "Missing keys".to_string(),
            complete_translation: "This translation is complete, amazing job! 🎉".to_string(),
            create_file_link: "Create file".to_string(),
            status_by_content_heading: "Translation status by content".to_string(),
            table_row_page: "Content".to_string(),
            table_summary_format:
                "{missing_emoji} {missing_word}, {outdated_emoji} {outdated_word}, {done_emoji} {done_word}"
                    .to_string(),
            status_done: "done".to_string(),
            status_outdated: "outdated".to_string(),
            status_missing: "missing".to_string(),
            emoji_done: "✔".to_string(),
            emoji_outdated: "🔄".to_string(),
            emoji_missing: "❌".to_string(),
        }
    }
}

/// Site-level presentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Dashboard title, used for the document title and the main heading.
    pub title: String,
    /// Dashboard description, used for SEO meta tags.
    pub description: String,
    /// Canonical site URL. When unset, canonical and `og:url` tags are
    /// omitted from the document.
    #[serde(default)]
    pub site: Option<String>,
    /// UI string table.
    #[serde(default)]
    pub ui: UiText,
    /// Path prefixes stripped from displayed item paths, tried in order.
    #[serde(default)]
    pub bases_to_hide: Option<Vec<String>>,
    /// Custom CSS files inlined after the built-in stylesheet.
    #[serde(default)]
    pub custom_css: Option<Vec<PathBuf>>,
    /// Progress bar rendering policy for an empty content set.
    #[serde(default)]
    pub zero_total: ZeroTotalPolicy,
}

impl Dashboard {
    /// Create a dashboard with the default UI strings.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            site: None,
            ui: UiText::default(),
            bases_to_hide: None,
            custom_css: None,
            zero_total: ZeroTotalPolicy::default(),
        }
    }

    /// Set the canonical site URL.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Replace the UI string table.
    pub fn with_ui(mut self, ui: UiText) -> Self {
        self.ui = ui;
        self
    }

    /// Set the path prefixes to hide from displayed paths.
    pub fn with_bases_to_hide(mut self, bases: Vec<String>) -> Self {
        self.bases_to_hide = Some(bases);
        self
    }

    /// Set the custom CSS files to inline.
    pub fn with_custom_css(mut self, paths: Vec<PathBuf>) -> Self {
        self.custom_css = Some(paths);
        self
    }
}

/// Complete configuration for one render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Presentation configuration.
    pub dashboard: Dashboard,
    /// Translation targets, in display order.
    pub locales: Vec<Locale>,
    /// Custom CSS contents loaded by [`DashboardConfig::load_assets`], in
    /// `custom_css` order. Not part of the serialized configuration.
    #[serde(skip)]
    pub inlined_css: Option<Vec<String>>,
}

impl DashboardConfig {
    /// Create a configuration.
    pub fn new(dashboard: Dashboard, locales: Vec<Locale>) -> Self {
        Self {
            dashboard,
            locales,
            inlined_css: None,
        }
    }

    /// Validate the configuration: a meaningful dashboard needs at least
    /// one locale, and locale tags must be unique.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            return Err(ReportError::InvalidConfig(
                "at least one locale must be configured".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for locale in &self.locales {
            if !seen.insert(locale.lang.as_str()) {
                return Err(ReportError::InvalidConfig(format!(
                    "duplicate locale tag '{}'",
                    locale.lang
                )));
            }
        }
        Ok(())
    }

    /// Read and inline the configured custom CSS files. Any missing file
    /// fails the whole operation before rendering starts.
    pub fn load_assets(&mut self) -> Result<()> {
        self.inlined_css = assets::inline_custom_css(self.dashboard.custom_css.as_deref())?;
        Ok(())
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ui_direction() {
        let ui = UiText::default();
        assert_eq!(ui.lang, "en");
        assert_eq!(ui.dir, "ltr");
    }

    #[test]
    fn test_status_word_lookup() {
        let ui = UiText::default();
        assert_eq!(ui.status_word(TranslationState::Done), "done");
        assert_eq!(ui.status_emoji(TranslationState::Missing), "❌");
    }

    #[test]
    fn test_incomplete_ui_table_rejected() {
        // Every key is required; a partial table is a configuration error.
        let err = serde_json::from_str::<UiText>(r#"{ "lang": "en", "dir": "ltr" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_ui_key_rejected() {
        let mut table = serde_json::to_value(UiText::default()).unwrap();
        table
            .as_object_mut()
            .unwrap()
            .insert("statusByLocale.typo".to_string(), "x".into());
        assert!(serde_json::from_value::<UiText>(table).is_err());
    }

    #[test]
    fn test_ui_round_trips_with_dotted_keys() {
        let json = serde_json::to_value(UiText::default()).unwrap();
        assert!(json.get("statusByLocale.heading").is_some());
        assert!(json.get("status.emojiDone").is_some());
        let parsed: UiText = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, UiText::default());
    }

    #[test]
    fn test_validate_requires_locales() {
        let config = DashboardConfig::new(Dashboard::new("T", "D"), vec![]);
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_tags() {
        let config = DashboardConfig::new(
            Dashboard::new("T", "D"),
            vec![Locale::new("pt", "Português"), Locale::new("pt", "Portuguese")],
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dashboard_builder() {
        let dashboard = Dashboard::new("Status", "Coverage")
            .with_site("https://example.com")
            .with_bases_to_hide(vec!["docs/".to_string()]);
        assert_eq!(dashboard.site.as_deref(), Some("https://example.com"));
        assert_eq!(dashboard.bases_to_hide.unwrap(), vec!["docs/"]);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = DashboardConfig::new(
            Dashboard::new("Status", "Coverage"),
            vec![Locale::new("fr", "Français")],
        );
        let json = config.to_json().unwrap();
        let parsed = DashboardConfig::from_json(&json).unwrap();
        assert_eq!(parsed.locales, config.locales);
        assert_eq!(parsed.dashboard, config.dashboard);
    }
}
