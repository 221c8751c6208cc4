//! HTML dashboard generator for translation coverage.
//!
//! Renders a static, deterministic HTML document summarizing the
//! translation status of a content set across multiple target locales.
//! The status itself is computed by an external component and consumed
//! here as a ready-made data structure.
//!
//! # Sections
//!
//! - Meta: canonical SEO/OpenGraph tags
//! - Styles: built-in stylesheet plus inlined custom CSS
//! - Status by locale: per-locale counts, progress bar, detail lists
//! - Status by content: content x locale table of status glyphs
//!
//! Every section can be replaced through [`renderer::Overrides`], and
//! extra content can be injected at fixed points through
//! [`renderer::Slots`].
//!
//! # Example
//!
//! ```
//! use locdash_report::{Dashboard, DashboardConfig, DashboardRenderer};
//! use locdash_status::Locale;
//!
//! let dashboard = Dashboard::new("Translation Status", "Coverage overview");
//! let config = DashboardConfig::new(dashboard, vec![Locale::new("pt", "Português")]);
//! let renderer = DashboardRenderer::new(config);
//! let html = renderer.render(&[]).unwrap();
//! assert!(html.starts_with("<!doctype html>"));
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod format;
pub mod progress;
pub mod renderer;
pub mod sections;
pub mod styles;

pub use config::{Dashboard, DashboardConfig, UiText};
pub use error::{ReportError, Result};
pub use progress::ZeroTotalPolicy;
pub use renderer::{DashboardRenderer, Overrides, RendererConfig, Slots};
