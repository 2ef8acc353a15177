//! Localization engine.
//!
//! Owns the registry of discovered entries, switches the active locale and
//! re-renders the page. The active locale lives in a [`LocaleContext`] shared
//! with the contact form.

use crate::i18n::{FormLabelSet, Locale, LocaleContext, TranslatableEntry, TranslationRegistry};
use crate::metrics::SiteMetrics;
use crate::prefs::{PreferenceStore, PREFERRED_LANGUAGE_KEY};
use crate::ui::{lock_ui, SharedUi, UiTree, LANGUAGE_BUTTON_ID, RU_TEXT_ATTR};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Form fields whose placeholders come from the fixed label set.
pub const FIXED_LABEL_FIELDS: [&str; 5] = ["name", "email", "phone", "subject", "message"];

pub struct LocalizationEngine<U: UiTree> {
    ui: SharedUi<U>,
    locale: LocaleContext,
    prefs: Box<dyn PreferenceStore + Send>,
    registry: TranslationRegistry,
    metrics: Arc<SiteMetrics>,
}

impl<U: UiTree> LocalizationEngine<U> {
    pub fn new(
        ui: SharedUi<U>,
        locale: LocaleContext,
        prefs: Box<dyn PreferenceStore + Send>,
        metrics: Arc<SiteMetrics>,
    ) -> Self {
        Self {
            ui,
            locale,
            prefs,
            registry: TranslationRegistry::new(),
            metrics,
        }
    }

    /// The active locale.
    pub fn current(&self) -> Locale {
        self.locale.get()
    }

    /// Handle to the active locale, for components that only read it.
    pub fn context(&self) -> LocaleContext {
        self.locale.clone()
    }

    pub fn entries(&self) -> &[TranslatableEntry] {
        self.registry.entries()
    }

    /// Register every translatable node on the page.
    ///
    /// Intended to run once at startup; a second call registers duplicates.
    pub fn discover(&mut self) -> usize {
        let mut ui = lock_ui(&self.ui);
        let count = self.registry.discover(&mut *ui);
        info!("Registered {} translatable elements", count);
        count
    }

    /// Apply `locale` to every entry, then to the fixed form labels.
    pub fn render(&self, locale: Locale) {
        let mut ui = lock_ui(&self.ui);

        for entry in self.registry.entries() {
            if let Some(text) = entry.text.get(locale) {
                entry.target.apply(&mut *ui, entry.node, text);
            }
        }

        render_fixed_labels(&mut *ui, locale);
        self.metrics.record_render();
        debug!("Rendered {} entries in {}", self.registry.len(), locale);
    }

    /// Apply the fixed form labels for `locale`.
    pub fn render_fixed_labels(&self, locale: Locale) {
        let mut ui = lock_ui(&self.ui);
        render_fixed_labels(&mut *ui, locale);
    }

    /// Switch to the other locale, re-render and persist the choice.
    pub fn toggle(&mut self) -> Locale {
        let next = self.current().other();
        self.locale.set(next);

        self.render(next);
        self.update_language_button();

        if let Err(e) = self.prefs.set(PREFERRED_LANGUAGE_KEY, next.code()) {
            warn!("Failed to persist language preference: {:#}", e);
        }

        self.metrics.record_toggle();
        info!("Language switched to {}", next);
        next
    }

    /// Adopt the stored locale preference, if any.
    ///
    /// A stored value that isn't a known locale is ignored.
    pub fn restore_from_preference(&mut self) {
        let Some(stored) = self.prefs.get(PREFERRED_LANGUAGE_KEY) else {
            debug!("No stored language preference");
            return;
        };

        match stored.parse::<Locale>() {
            Ok(locale) if locale != self.current() => {
                info!("Restoring stored language preference: {}", locale);
                self.locale.set(locale);
                self.render(locale);
                self.update_language_button();
            }
            Ok(_) => debug!("Stored language preference matches active locale"),
            Err(e) => warn!("Ignoring stored language preference: {}", e),
        }
    }

    /// Show the locale a click on the indicator would switch to.
    pub fn update_language_button(&self) {
        let mut ui = lock_ui(&self.ui);
        match ui.find_by_id(LANGUAGE_BUTTON_ID) {
            Some(button) => ui.set_text(button, self.current().other().short_label()),
            None => debug!("No language indicator on page"),
        }
    }
}

/// Apply the fixed placeholders and submit text for `locale`.
///
/// A submit control carrying its own translation keeps it.
pub fn render_fixed_labels<U: UiTree + ?Sized>(ui: &mut U, locale: Locale) {
    let labels = FormLabelSet::for_locale(locale);

    for field in FIXED_LABEL_FIELDS {
        if let (Some(node), Some(placeholder)) =
            (ui.find_by_id(field), labels.placeholder_for(field))
        {
            ui.set_placeholder(node, placeholder);
        }
    }

    if let Some(submit) = ui.submit_control() {
        if ui.attribute(submit, RU_TEXT_ATTR).is_none() {
            ui.set_text(submit, labels.submit);
        }
    }
}
