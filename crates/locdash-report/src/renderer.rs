//! Dashboard renderer and composition resolution.
//!
//! The renderer resolves, for every overridable section, either the
//! caller-supplied override or the built-in renderer, and splices the
//! additive slot fragments at the fixed shell positions. Overrides are
//! total replacements; slots never replace built-in output.

use crate::config::DashboardConfig;
use crate::error::{ReportError, Result};
use crate::format::html_escape;
use crate::sections;
use crate::styles;
use locdash_status::FileTranslationStatus;
use tracing::{debug, info};

/// Error type caller-supplied extension functions may return. It surfaces
/// to the caller of [`DashboardRenderer::render`] unmodified, as the
/// source of a [`ReportError::Extension`].
pub type ExtensionError = Box<dyn std::error::Error + Send + Sync>;

/// Renderer for a section that only consults the configuration.
pub type SectionFn =
    Box<dyn Fn(&DashboardConfig) -> std::result::Result<String, ExtensionError> + Send + Sync>;

/// Renderer for a section that also consumes the status list.
pub type StatusSectionFn = Box<
    dyn Fn(&DashboardConfig, &[FileTranslationStatus]) -> std::result::Result<String, ExtensionError>
        + Send
        + Sync,
>;

/// Replacement renderers for the named overridable sections. A registered
/// override fully controls its section; absence falls back to the
/// built-in renderer.
#[derive(Default)]
pub struct Overrides {
    pub meta: Option<SectionFn>,
    pub styles: Option<SectionFn>,
    pub body: Option<StatusSectionFn>,
    pub status_by_locale: Option<StatusSectionFn>,
    pub status_by_content: Option<StatusSectionFn>,
}

/// Additive fragments injected at fixed shell positions: inside `<head>`
/// between meta and styles, and immediately before/after the title.
#[derive(Default)]
pub struct Slots {
    pub head: Option<SectionFn>,
    pub before_title: Option<SectionFn>,
    pub after_title: Option<SectionFn>,
}

/// Extension surface for a render.
#[derive(Default)]
pub struct RendererConfig {
    pub overrides: Overrides,
    pub slots: Slots,
}

/// Dashboard renderer.
///
/// Rendering is a single-pass, side-effect-free computation: the
/// configuration and status list are read-only inputs and every
/// invocation produces a fresh output document.
pub struct DashboardRenderer {
    config: DashboardConfig,
    renderer: RendererConfig,
}

impl DashboardRenderer {
    /// Create a renderer with no overrides or slots.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            renderer: RendererConfig::default(),
        }
    }

    /// Attach an extension surface.
    pub fn with_renderer(mut self, renderer: RendererConfig) -> Self {
        self.renderer = renderer;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render the complete dashboard document.
    pub fn render(&self, status: &[FileTranslationStatus]) -> Result<String> {
        self.config.validate()?;
        debug!(
            items = status.len(),
            locales = self.config.locales.len(),
            "rendering dashboard"
        );

        let ui = &self.config.dashboard.ui;
        let meta = self
            .run_section("meta", &self.renderer.overrides.meta)?
            .unwrap_or_else(|| sections::meta(&self.config.dashboard));
        let head_slot = self.slot_content("head", &self.renderer.slots.head)?;
        let styles = self
            .run_section("styles", &self.renderer.overrides.styles)?
            .unwrap_or_else(|| styles::styles(&self.config));
        let body = self.render_body(status)?;

        let html = format!(
            "<!doctype html>\n<html dir=\"{dir}\" lang=\"{lang}\">\n<head>\n{meta}\n{head_slot}\n{styles}\n</head>\n<body>\n{body}\n</body>\n</html>\n",
            dir = html_escape(&ui.dir),
            lang = html_escape(&ui.lang),
        );

        info!(bytes = html.len(), "dashboard rendered");
        Ok(html)
    }

    /// Body area: the slot fragments belong to the shell, so they are
    /// spliced around the title position whether or not the body section
    /// itself is overridden.
    fn render_body(&self, status: &[FileTranslationStatus]) -> Result<String> {
        let before_title = self.slot_content("beforeTitle", &self.renderer.slots.before_title)?;
        let after_title = self.slot_content("afterTitle", &self.renderer.slots.after_title)?;

        if let Some(body) =
            self.run_status_section("body", &self.renderer.overrides.body, status)?
        {
            return Ok(format!("{before_title}{body}{after_title}"));
        }

        let by_locale = self
            .run_status_section(
                "statusByLocale",
                &self.renderer.overrides.status_by_locale,
                status,
            )?
            .unwrap_or_else(|| sections::status_by_locale(&self.config, status));
        let by_content = self
            .run_status_section(
                "statusByContent",
                &self.renderer.overrides.status_by_content,
                status,
            )?
            .unwrap_or_else(|| sections::status_by_content(&self.config, status));

        Ok(sections::body(
            &self.config.dashboard,
            &before_title,
            &after_title,
            &by_locale,
            &by_content,
        ))
    }

    fn run_section(&self, name: &'static str, f: &Option<SectionFn>) -> Result<Option<String>> {
        match f {
            Some(f) => f(&self.config)
                .map(Some)
                .map_err(|source| ReportError::Extension { name, source }),
            None => Ok(None),
        }
    }

    fn run_status_section(
        &self,
        name: &'static str,
        f: &Option<StatusSectionFn>,
        status: &[FileTranslationStatus],
    ) -> Result<Option<String>> {
        match f {
            Some(f) => f(&self.config, status)
                .map(Some)
                .map_err(|source| ReportError::Extension { name, source }),
            None => Ok(None),
        }
    }

    fn slot_content(&self, name: &'static str, f: &Option<SectionFn>) -> Result<String> {
        Ok(self.run_section(name, f)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dashboard;
    use locdash_status::Locale;

    fn renderer() -> DashboardRenderer {
        DashboardRenderer::new(DashboardConfig::new(
            Dashboard::new("Status", "Coverage"),
            vec![Locale::new("fr", "Français")],
        ))
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let renderer =
            DashboardRenderer::new(DashboardConfig::new(Dashboard::new("T", "D"), vec![]));
        assert!(matches!(
            renderer.render(&[]),
            Err(ReportError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_override_error_propagates_with_section_name() {
        let mut extensions = RendererConfig::default();
        extensions.overrides.body = Some(Box::new(|_, _| Err("custom body failed".into())));
        let renderer = renderer().with_renderer(extensions);

        let err = renderer.render(&[]).unwrap_err();
        match err {
            ReportError::Extension { name, source } => {
                assert_eq!(name, "body");
                assert_eq!(source.to_string(), "custom body failed");
            }
            other => panic!("expected extension error, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_error_propagates() {
        let mut extensions = RendererConfig::default();
        extensions.slots.head = Some(Box::new(|_| Err("head slot failed".into())));
        let renderer = renderer().with_renderer(extensions);

        let err = renderer.render(&[]).unwrap_err();
        assert!(matches!(err, ReportError::Extension { name: "head", .. }));
    }

    #[test]
    fn test_body_override_still_receives_shell_slots() {
        let mut extensions = RendererConfig::default();
        extensions.overrides.body = Some(Box::new(|_, _| Ok("<p>custom body</p>".to_string())));
        extensions.slots.before_title = Some(Box::new(|_| Ok("<!-- bt -->".to_string())));
        extensions.slots.after_title = Some(Box::new(|_| Ok("<!-- at -->".to_string())));
        let renderer = renderer().with_renderer(extensions);

        let html = renderer.render(&[]).unwrap();
        assert!(html.contains("<!-- bt --><p>custom body</p><!-- at -->"));
    }
}
