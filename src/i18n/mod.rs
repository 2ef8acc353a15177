//! Bilingual (ru/en) content switching.
//!
//! # Architecture
//!
//! - `locale`: the closed set of site locales
//! - `context`: shared handle to the active locale
//! - `labels`: fixed per-locale strings for the contact form and banners
//! - `registry`: one-time discovery of translatable page nodes
//! - `engine`: rendering, toggling and preference restore
//!
//! # Example
//!
//! ```rust,ignore
//! use bilingual_site::i18n::{LocaleContext, LocalizationEngine};
//!
//! let mut engine = LocalizationEngine::new(ui, LocaleContext::default(), prefs, metrics);
//! engine.discover();
//! engine.update_language_button();
//! engine.restore_from_preference();
//! ```

mod context;
mod engine;
mod labels;
mod locale;
mod registry;

pub use context::LocaleContext;
pub use engine::{render_fixed_labels, LocalizationEngine, FIXED_LABEL_FIELDS};
pub use labels::{FormLabelSet, ENGLISH_LABELS, RUSSIAN_LABELS};
pub use locale::{Locale, LocaleError};
pub use registry::{LocalizedText, RenderTarget, TranslatableEntry, TranslationRegistry};
