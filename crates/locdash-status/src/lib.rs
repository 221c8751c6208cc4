//! Shared translation status types and classification.
//!
//! This crate provides the foundational types consumed by the dashboard
//! renderer:
//! - The per-item, per-locale translation status shape produced by an
//!   external status-computation component
//! - The three-way done/outdated/missing classification that every
//!   renderer agrees on

pub mod classify;
pub mod model;

pub use classify::{LocaleBreakdown, TranslationState};
pub use model::{Completeness, FileTranslationStatus, Locale, TranslationStatus};
