//! Status-by-content section: one table row per content item, one column
//! per configured locale.

use crate::config::{Dashboard, DashboardConfig};
use crate::format::{format_template, html_escape};
use crate::sections::links::{emoji_status_link, page_link};
use locdash_status::{FileTranslationStatus, Locale};

/// Render the status-by-content table with its legend.
pub fn status_by_content(config: &DashboardConfig, status: &[FileTranslationStatus]) -> String {
    let dashboard = &config.dashboard;
    let ui = &dashboard.ui;

    let mut header = format!("<th>{}</th>", html_escape(&ui.table_row_page));
    for locale in &config.locales {
        header.push_str(&format!("<th>{}</th>", html_escape(&locale.lang)));
    }

    let legend = format_template(
        &ui.table_summary_format,
        &[
            ("missing_emoji", &ui.emoji_missing),
            ("missing_word", &ui.status_missing),
            ("outdated_emoji", &ui.emoji_outdated),
            ("outdated_word", &ui.status_outdated),
            ("done_emoji", &ui.emoji_done),
            ("done_word", &ui.status_done),
        ],
    );

    format!(
        "<h2 id=\"by-content\"><a href=\"#by-content\">{}</a></h2>\n<table class=\"status-by-content\">\n<thead>\n<tr>{header}</tr>\n</thead>\n{}</table>\n<sup class=\"capitalize\">{}</sup>\n",
        html_escape(&ui.status_by_content_heading),
        table_body(status, &config.locales, dashboard),
        html_escape(&legend),
    )
}

fn table_body(
    status: &[FileTranslationStatus],
    locales: &[Locale],
    dashboard: &Dashboard,
) -> String {
    let mut rows = String::new();
    for page in status {
        let mut cells = format!("<td>{}</td>", page_link(page, dashboard));
        for locale in locales {
            cells.push_str(&content_status_cell(page, &locale.lang, dashboard));
        }
        rows.push_str(&format!("<tr>{cells}</tr>\n"));
    }
    format!("<tbody>\n{rows}</tbody>\n")
}

/// One (item, locale) cell: a status glyph, linked to the locale-specific
/// file URL when available.
fn content_status_cell(page: &FileTranslationStatus, lang: &str, dashboard: &Dashboard) -> String {
    let state = page.state_for(lang);
    let href = page
        .translation(lang)
        .and_then(|t| t.git_hosting_file_url.as_deref());
    format!(
        "<td>{}</td>",
        emoji_status_link(&dashboard.ui, href, state)
    )
}
