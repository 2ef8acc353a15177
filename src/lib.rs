//! Bilingual (Russian/English) content switching and contact form handling
//! for a static informational site.
//!
//! The host page is reached only through [`ui::UiTree`] and the locale
//! preference only through [`prefs::PreferenceStore`].

pub mod config;
pub mod form;
pub mod i18n;
pub mod metrics;
pub mod prefs;
pub mod site;
pub mod ui;

pub use site::Site;
