//! Hyperlink building blocks shared by the dashboard sections.

use crate::assets::collapsed_path;
use crate::config::{Dashboard, UiText};
use crate::format::html_escape;
use locdash_status::{FileTranslationStatus, TranslationState};

/// A plain labeled hyperlink.
pub fn link(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        html_escape(href),
        html_escape(text)
    )
}

/// The visually distinguished "create this translation" call to action.
pub fn create_link(href: &str, text: &str) -> String {
    format!(
        r#"<a class="create-button" href="{}">{}</a>"#,
        html_escape(href),
        html_escape(text)
    )
}

/// Emoji status indicator, linked to the translated file when its URL is
/// known and unlinked otherwise. The accessible title and emoji both come
/// from the UI string table.
pub fn emoji_status_link(ui: &UiText, href: Option<&str>, state: TranslationState) -> String {
    let title = html_escape(ui.status_word(state));
    let emoji = html_escape(ui.status_emoji(state));
    match href {
        Some(href) => format!(
            r#"<a href="{}" title="{title}"><span aria-hidden="true">{emoji}</span></a>"#,
            html_escape(href)
        ),
        None => format!(r#"<span title="{title}"><span aria-hidden="true">{emoji}</span></span>"#),
    }
}

/// Item identity fragment: the collapsed shared path, linked to the source
/// file when its URL is known.
pub(crate) fn page_link(page: &FileTranslationStatus, dashboard: &Dashboard) -> String {
    let label = collapsed_path(&page.shared_path, dashboard.bases_to_hide.as_deref());
    match &page.git_hosting_file_url {
        Some(href) => link(href, &label),
        None => html_escape(&label),
    }
}
