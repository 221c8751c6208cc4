//! Built-in dashboard section renderers.
//!
//! Each renderer is a pure function of the configuration and the
//! externally computed status list, producing an HTML fragment. The
//! composition resolver in [`crate::renderer`] decides, per section,
//! whether the built-in runs or a caller-supplied override replaces it.

pub mod content;
pub mod links;
pub mod locale;

pub use content::status_by_content;
pub use links::{create_link, emoji_status_link, link};
pub use locale::status_by_locale;

use crate::config::Dashboard;
use crate::format::html_escape;

/// Canonical SEO and OpenGraph meta tags. Canonical and `og:url` tags are
/// omitted when no site URL is configured.
pub fn meta(dashboard: &Dashboard) -> String {
    let title = html_escape(&dashboard.title);
    let description = html_escape(&dashboard.description);

    let mut out = format!(
        "<meta charset=\"utf-8\" />\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, minimum-scale=1\" />\n<title>{title}</title>\n<meta name=\"description\" content=\"{description}\" />\n"
    );
    if let Some(site) = &dashboard.site {
        out.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            html_escape(site)
        ));
    }
    out.push_str(&format!(
        "<meta property=\"og:title\" content=\"{title}\" />\n<meta property=\"og:type\" content=\"website\" />\n"
    ));
    if let Some(site) = &dashboard.site {
        out.push_str(&format!(
            "<meta property=\"og:url\" content=\"{}\" />\n",
            html_escape(site)
        ));
    }
    out.push_str(&format!(
        "<meta property=\"og:description\" content=\"{description}\" />"
    ));
    out
}

/// Built-in body: title block, locale summary, then the content table.
/// The slot fragments are spliced by the shell at fixed positions around
/// the title, independent of any section override.
pub fn body(
    dashboard: &Dashboard,
    before_title: &str,
    after_title: &str,
    by_locale: &str,
    by_content: &str,
) -> String {
    format!(
        "<main>\n<div class=\"limit-to-viewport\">\n{before_title}<h1>{}</h1>\n{after_title}{by_locale}</div>\n{by_content}</main>",
        html_escape(&dashboard.title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_without_site_omits_canonical_tags() {
        let out = meta(&Dashboard::new("Status", "Coverage"));
        assert!(out.contains("<title>Status</title>"));
        assert!(out.contains(r#"property="og:description""#));
        assert!(!out.contains("canonical"));
        assert!(!out.contains("og:url"));
    }

    #[test]
    fn test_meta_with_site_has_canonical_and_og_url() {
        let out = meta(&Dashboard::new("Status", "Coverage").with_site("https://example.com"));
        assert!(out.contains(r#"<link rel="canonical" href="https://example.com" />"#));
        assert!(out.contains(r#"<meta property="og:url" content="https://example.com" />"#));
    }

    #[test]
    fn test_meta_escapes_title_and_description() {
        let out = meta(&Dashboard::new("A <b> title", r#"say "hi""#));
        assert!(out.contains("A &lt;b&gt; title"));
        assert!(out.contains("say &quot;hi&quot;"));
    }

    #[test]
    fn test_body_splices_slots_around_title() {
        let out = body(
            &Dashboard::new("Status", "Coverage"),
            "<!-- before -->",
            "<!-- after -->",
            "<p>locales</p>",
            "<p>table</p>",
        );
        let before = out.find("<!-- before -->").unwrap();
        let title = out.find("<h1>").unwrap();
        let after = out.find("<!-- after -->").unwrap();
        assert!(before < title && title < after);
    }
}
