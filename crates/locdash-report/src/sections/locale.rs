//! Status-by-locale section: one expandable block per configured locale.

use crate::config::{Dashboard, DashboardConfig};
use crate::format::{format_template, html_escape};
use crate::progress::{progress_bar, DEFAULT_BAR_SIZE};
use crate::sections::links::{create_link, link, page_link};
use locdash_status::{FileTranslationStatus, Locale, LocaleBreakdown};

/// Render the status-by-locale section.
pub fn status_by_locale(config: &DashboardConfig, status: &[FileTranslationStatus]) -> String {
    let mut out = format!(
        "<h2 id=\"by-locale\"><a href=\"#by-locale\">{}</a></h2>\n",
        html_escape(&config.dashboard.ui.status_by_locale_heading)
    );
    for locale in &config.locales {
        out.push_str(&locale_details(status, &config.dashboard, locale));
    }
    out
}

/// One locale block: header, count summary, progress bar, then either the
/// outdated/missing detail lists or a "fully translated" message.
fn locale_details(
    status: &[FileTranslationStatus],
    dashboard: &Dashboard,
    locale: &Locale,
) -> String {
    let ui = &dashboard.ui;
    let breakdown = LocaleBreakdown::classify(status, &locale.lang);

    let title = format_template(
        &ui.details_title_format,
        &[("locale_name", &locale.label), ("locale_tag", &locale.lang)],
    );
    let summary = format_template(
        &ui.details_summary_format,
        &[
            ("done_amount", breakdown.done_count().to_string().as_str()),
            ("done_word", &ui.status_done),
            (
                "outdated_amount",
                breakdown.outdated_count().to_string().as_str(),
            ),
            ("outdated_word", &ui.status_outdated),
            (
                "missing_amount",
                breakdown.missing_count().to_string().as_str(),
            ),
            ("missing_word", &ui.status_missing),
        ],
    );
    let bar = progress_bar(
        breakdown.total(),
        breakdown.outdated_count(),
        breakdown.missing_count(),
        DEFAULT_BAR_SIZE,
        dashboard.zero_total,
    );

    let details = if breakdown.is_complete() {
        format!("<p>{}</p>\n", html_escape(&ui.complete_translation))
    } else {
        let mut lists = String::new();
        if !breakdown.outdated.is_empty() {
            lists.push_str(&outdated_pages(&breakdown.outdated, &locale.lang, dashboard));
        }
        if !breakdown.missing.is_empty() {
            lists.push_str(&missing_pages(&breakdown.missing, &locale.lang, dashboard));
        }
        lists
    };

    format!(
        "<details>\n<summary>\n<strong>{}</strong>\n<br />\n<span class=\"progress-summary\">{}</span>\n<br />\n{bar}\n</summary>\n{details}</details>\n",
        html_escape(&title),
        html_escape(&summary),
    )
}

/// Outdated item list. Incomplete translations expand into their list of
/// untranslated keys.
fn outdated_pages(
    pages: &[&FileTranslationStatus],
    lang: &str,
    dashboard: &Dashboard,
) -> String {
    let ui = &dashboard.ui;
    let mut items = String::new();
    for page in pages {
        let links = content_details_links(page, lang, dashboard);
        let incomplete = page
            .translation(lang)
            .is_some_and(|t| !t.completeness.complete);
        if incomplete {
            let keys: String = page
                .translation(lang)
                .map(|t| t.completeness.missing_keys.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|key| format!("<li>{}</li>\n", html_escape(key)))
                .collect();
            items.push_str(&format!(
                "<li>\n<details>\n<summary>{links}</summary>\n<h4>{}</h4>\n<ul>\n{keys}</ul>\n</details>\n</li>\n",
                html_escape(&ui.missing_keys_heading),
            ));
        } else {
            items.push_str(&format!("<li>{links}</li>\n"));
        }
    }
    format!(
        "<h3 class=\"capitalize\">{}</h3>\n<ul>\n{items}</ul>\n",
        html_escape(&ui.status_outdated)
    )
}

/// Missing item list, with a create-translation action link when the
/// target locale's hosting URL is known.
fn missing_pages(
    pages: &[&FileTranslationStatus],
    lang: &str,
    dashboard: &Dashboard,
) -> String {
    let ui = &dashboard.ui;
    let mut items = String::new();
    for page in pages {
        let entry = page_link(page, dashboard);
        let create = page
            .translation(lang)
            .and_then(|t| t.git_hosting_file_url.as_deref())
            .map(|href| format!(" {}", create_link(href, &ui.create_file_link)))
            .unwrap_or_default();
        items.push_str(&format!("<li>{entry}{create}</li>\n"));
    }
    format!(
        "<h3 class=\"capitalize\">{}</h3>\n<ul>\n{items}</ul>\n",
        html_escape(&ui.status_missing)
    )
}

/// Item links for an outdated entry: the source file plus a parenthetical
/// with the translated-file and source-history links when known.
fn content_details_links(
    page: &FileTranslationStatus,
    lang: &str,
    dashboard: &Dashboard,
) -> String {
    let ui = &dashboard.ui;
    let mut out = page_link(page, dashboard);

    if let Some(translation) = page.translation(lang) {
        let file = translation.git_hosting_file_url.as_deref();
        let history = translation.git_hosting_history_url.as_deref();
        if file.is_some() || history.is_some() {
            let file_link = file
                .map(|href| {
                    let label = if translation.completeness.complete {
                        &ui.outdated_translation_link
                    } else {
                        &ui.incomplete_translation_link
                    };
                    link(href, label)
                })
                .unwrap_or_default();
            let history_link = history
                .map(|href| link(href, &ui.source_change_history_link))
                .unwrap_or_default();
            out.push_str(&format!(" ({file_link}, {history_link})"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dashboard;
    use locdash_status::{Completeness, TranslationStatus};
    use std::collections::BTreeMap;

    fn config_with_locale(lang: &str, label: &str) -> DashboardConfig {
        DashboardConfig::new(
            Dashboard::new("Status", "Coverage"),
            vec![Locale::new(lang, label)],
        )
    }

    fn item(path: &str, lang: &str, status: TranslationStatus) -> FileTranslationStatus {
        FileTranslationStatus {
            shared_path: path.to_string(),
            git_hosting_file_url: None,
            translations: BTreeMap::from([(lang.to_string(), status)]),
        }
    }

    #[test]
    fn test_complete_locale_renders_message_not_lists() {
        let config = config_with_locale("fr", "Français");
        let status = vec![item("docs/a.md", "fr", TranslationStatus::default())];
        let out = status_by_locale(&config, &status);
        assert!(out.contains("amazing job"));
        assert!(!out.contains("<h3 class=\"capitalize\">"));
    }

    #[test]
    fn test_summary_counts_from_classifier() {
        let config = config_with_locale("fr", "Français");
        let status = vec![
            FileTranslationStatus::new("docs/a.md"),
            item(
                "docs/b.md",
                "fr",
                TranslationStatus {
                    is_outdated: true,
                    ..TranslationStatus::default()
                },
            ),
            item("docs/c.md", "fr", TranslationStatus::default()),
        ];
        let out = status_by_locale(&config, &status);
        assert!(out.contains("1 done, 1 outdated, 1 missing"));
    }

    #[test]
    fn test_incomplete_translation_lists_missing_keys() {
        let config = config_with_locale("pt", "Português");
        let status = vec![item(
            "docs/a.md",
            "pt",
            TranslationStatus {
                completeness: Completeness::incomplete(vec!["hero.title".to_string()]),
                git_hosting_file_url: Some("https://example.com/pt/a.md".to_string()),
                ..TranslationStatus::default()
            },
        )];
        let out = status_by_locale(&config, &status);
        assert!(out.contains("Missing keys"));
        assert!(out.contains("<li>hero.title</li>"));
        assert!(out.contains("incomplete translation"));
    }

    #[test]
    fn test_missing_page_gets_create_link() {
        let config = config_with_locale("es", "Español");
        let status = vec![item(
            "docs/a.md",
            "es",
            TranslationStatus {
                is_missing: true,
                git_hosting_file_url: Some("https://example.com/new/es/a.md".to_string()),
                ..TranslationStatus::default()
            },
        )];
        let out = status_by_locale(&config, &status);
        assert!(out.contains("create-button"));
        assert!(out.contains("Create file"));
    }

    #[test]
    fn test_missing_page_without_url_has_no_create_link() {
        let config = config_with_locale("es", "Español");
        let status = vec![FileTranslationStatus::new("docs/a.md")];
        let out = status_by_locale(&config, &status);
        assert!(!out.contains("create-button"));
    }
}
