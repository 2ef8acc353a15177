//! Composition root.
//!
//! Builds both components around one shared page, one locale context and one
//! metrics instance, and runs them in startup order.

use crate::form::{ContactForm, FormDelivery, SubmissionOutcome, SubmitEvent};
use crate::i18n::{FormLabelSet, Locale, LocaleContext, LocalizationEngine};
use crate::metrics::{MetricsReport, SiteMetrics};
use crate::prefs::PreferenceStore;
use crate::ui::{SharedUi, UiTree};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Site<U: UiTree> {
    pub engine: LocalizationEngine<U>,
    pub form: ContactForm<U>,
    metrics: Arc<SiteMetrics>,
}

impl<U: UiTree + Send + 'static> Site<U> {
    pub fn new(
        ui: SharedUi<U>,
        prefs: Box<dyn PreferenceStore + Send>,
        banner_timeout: Duration,
    ) -> Self {
        let metrics = Arc::new(SiteMetrics::new());
        let locale = LocaleContext::new(Locale::default());

        Self {
            engine: LocalizationEngine::new(
                Arc::clone(&ui),
                locale.clone(),
                prefs,
                Arc::clone(&metrics),
            ),
            form: ContactForm::new(ui, locale, banner_timeout, Arc::clone(&metrics)),
            metrics,
        }
    }

    /// Replace the contact form delivery backend.
    pub fn with_delivery(mut self, delivery: Box<dyn FormDelivery + Send>) -> Self {
        self.form = self.form.with_delivery(delivery);
        self
    }

    /// Startup: discover translatable nodes, set the indicator, restore preference.
    pub fn init(&mut self) {
        self.engine.discover();
        self.engine.update_language_button();
        self.engine.restore_from_preference();
        info!("Site initialized in {}", self.engine.current());
    }

    pub fn current_locale(&self) -> Locale {
        self.engine.current()
    }

    pub fn toggle_language(&mut self) -> Locale {
        self.engine.toggle()
    }

    pub fn phone_input(&self) -> Option<String> {
        self.form.handle_phone_input()
    }

    pub fn submit(&mut self, event: &mut SubmitEvent) -> SubmissionOutcome {
        self.form.handle_submit(event)
    }

    /// Donations are not implemented; the host shows this notice instead.
    pub fn donate_clicked(&self) -> &'static str {
        FormLabelSet::for_locale(self.current_locale()).donate_notice
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
