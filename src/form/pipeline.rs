//! Contact form submission pipeline.
//!
//! `Idle → Submitted → {Accepted, Rejected} → Idle`. Each submit builds a
//! fresh [`FormSubmission`], validates it, hands accepted submissions to a
//! [`FormDelivery`] and reports the outcome with a localized banner.

use crate::form::{format_phone_input, BannerController, FormSubmission, FormValidator, ValidationFailure};
use crate::i18n::LocaleContext;
use crate::metrics::SiteMetrics;
use crate::ui::{lock_ui, BannerKind, SharedUi, UiTree};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Element id of the phone field.
pub const PHONE_FIELD_ID: &str = "phone";

/// Where accepted submissions go.
pub trait FormDelivery {
    fn deliver(&self, submission: &FormSubmission) -> Result<()>;
}

/// Delivery that only logs; nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDelivery;

impl FormDelivery for LoggingDelivery {
    fn deliver(&self, submission: &FormSubmission) -> Result<()> {
        info!(
            "Contact form accepted with {} fields (no delivery backend configured)",
            submission.len()
        );
        Ok(())
    }
}

/// Submit notification from the form; suppressing it stops page navigation.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validated and delivered; success banner shown, form cleared
    Accepted,
    /// Failed validation; error banner shown
    Invalid(ValidationFailure),
    /// Valid but the delivery backend failed; error banner shown
    DeliveryFailed(String),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

pub struct ContactForm<U> {
    ui: SharedUi<U>,
    locale: LocaleContext,
    banner: BannerController<U>,
    delivery: Box<dyn FormDelivery + Send>,
    metrics: Arc<SiteMetrics>,
}

impl<U: UiTree + Send + 'static> ContactForm<U> {
    pub fn new(
        ui: SharedUi<U>,
        locale: LocaleContext,
        banner_timeout: Duration,
        metrics: Arc<SiteMetrics>,
    ) -> Self {
        Self {
            banner: BannerController::new(Arc::clone(&ui), banner_timeout),
            ui,
            locale,
            delivery: Box::new(LoggingDelivery),
            metrics,
        }
    }

    /// Replace the delivery backend.
    pub fn with_delivery(mut self, delivery: Box<dyn FormDelivery + Send>) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn banner(&self) -> &BannerController<U> {
        &self.banner
    }

    /// Re-mask the phone field after an input event.
    ///
    /// # Returns
    /// The new field value, `None` when the page has no phone field.
    pub fn handle_phone_input(&self) -> Option<String> {
        let mut ui = lock_ui(&self.ui);
        let field = ui.find_by_id(PHONE_FIELD_ID)?;
        let raw = ui.value(field)?;

        let formatted = format_phone_input(&raw, self.locale.get());
        ui.set_value(field, &formatted);
        self.metrics.record_phone_format();
        Some(formatted)
    }

    /// Read the current form field values.
    pub fn collect_submission(&self) -> FormSubmission {
        FormSubmission::from_pairs(lock_ui(&self.ui).form_values())
    }

    /// Handle a submit event using the values currently in the form.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmissionOutcome {
        let submission = self.collect_submission();
        self.submit(event, &submission)
    }

    /// Validate and deliver a submission, then report it with a banner.
    pub fn submit(&mut self, event: &mut SubmitEvent, submission: &FormSubmission) -> SubmissionOutcome {
        event.prevent_default();
        let locale = self.locale.get();

        let outcome = match FormValidator::validate_detailed(submission) {
            Err(failure) => {
                debug!("Contact form rejected: {}", failure);
                SubmissionOutcome::Invalid(failure)
            }
            Ok(()) => match self.delivery.deliver(submission) {
                Ok(()) => SubmissionOutcome::Accepted,
                Err(e) => {
                    warn!("Contact form delivery failed: {:#}", e);
                    SubmissionOutcome::DeliveryFailed(format!("{:#}", e))
                }
            },
        };

        if outcome.is_accepted() {
            self.banner.show(BannerKind::Success, locale);
            lock_ui(&self.ui).reset_form();
            self.metrics.record_submission_accepted();
        } else {
            self.banner.show(BannerKind::Error, locale);
            self.metrics.record_submission_rejected();
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DEFAULT_BANNER_TIMEOUT;
    use crate::i18n::Locale;
    use crate::ui::{MemoryDocument, Node, NodeKind};
    use std::sync::Mutex;

    struct FailingDelivery;

    impl FormDelivery for FailingDelivery {
        fn deliver(&self, _submission: &FormSubmission) -> Result<()> {
            anyhow::bail!("backend unavailable")
        }
    }

    fn contact_page() -> MemoryDocument {
        let mut doc = MemoryDocument::new(true);
        doc.push(Node::new(NodeKind::Input).with_id("name").in_form("name"));
        doc.push(Node::new(NodeKind::Input).with_id("email").in_form("email"));
        doc.push(Node::new(NodeKind::Input).with_id("phone").in_form("phone"));
        doc.push(Node::new(NodeKind::Input).with_id("subject").in_form("subject"));
        doc.push(Node::new(NodeKind::TextArea).with_id("message").in_form("message"));
        doc.push(Node::new(NodeKind::Submit).in_form("submit"));
        doc
    }

    fn form_with(
        doc: MemoryDocument,
        locale: Locale,
    ) -> (ContactForm<MemoryDocument>, SharedUi<MemoryDocument>) {
        let ui = Arc::new(Mutex::new(doc));
        let form = ContactForm::new(
            Arc::clone(&ui),
            LocaleContext::new(locale),
            DEFAULT_BANNER_TIMEOUT,
            Arc::new(SiteMetrics::new()),
        );
        (form, ui)
    }

    fn fill(ui: &SharedUi<MemoryDocument>, values: &[(&str, &str)]) {
        let mut doc = lock_ui(ui);
        for (id, value) in values {
            if let Some(node) = doc.find_by_id(id) {
                doc.set_value(node, value);
            }
        }
    }

    fn valid_values() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Aida"),
            ("email", "aida@example.kg"),
            ("subject", "Volunteering"),
            ("message", "Hello"),
        ]
    }

    // ==================== Phone Input Tests ====================

    #[test]
    fn test_phone_input_masks_in_active_locale() {
        let (form, ui) = form_with(contact_page(), Locale::Ru);
        fill(&ui, &[("phone", "0700123456")]);

        assert_eq!(form.handle_phone_input(), Some("+996 (700) 123-456".to_string()));
        assert_eq!(
            lock_ui(&ui).node_by_id("phone").unwrap().value,
            "+996 (700) 123-456"
        );
    }

    #[test]
    fn test_phone_input_follows_locale_changes() {
        let (form, ui) = form_with(contact_page(), Locale::Ru);
        form.locale.set(Locale::En);
        fill(&ui, &[("phone", "5551234567")]);

        assert_eq!(form.handle_phone_input(), Some("+1 (555) 123-4567".to_string()));
    }

    #[test]
    fn test_phone_input_without_field() {
        let mut doc = contact_page();
        doc.nodes.retain(|n| n.id.as_deref() != Some("phone"));
        let (form, _ui) = form_with(doc, Locale::Ru);

        assert_eq!(form.handle_phone_input(), None);
        assert_eq!(form.metrics.phone_formats(), 0);
    }

    // ==================== Submit Tests ====================

    #[tokio::test]
    async fn test_valid_submit_shows_success_and_resets() {
        let (mut form, ui) = form_with(contact_page(), Locale::En);
        fill(&ui, &valid_values());
        let mut event = SubmitEvent::new();

        let outcome = form.handle_submit(&mut event);

        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert!(event.is_default_prevented());
        let doc = lock_ui(&ui);
        assert_eq!(doc.banners.len(), 1);
        assert_eq!(doc.banners[0].kind, BannerKind::Success);
        assert_eq!(
            doc.banners[0].text,
            "Message sent successfully! We will contact you soon."
        );
        assert!(doc.nodes.iter().all(|n| n.value.is_empty()));
    }

    #[tokio::test]
    async fn test_invalid_submit_shows_error_and_keeps_values() {
        let (mut form, ui) = form_with(contact_page(), Locale::Ru);
        fill(&ui, &[("name", "Aida"), ("email", "not-an-email"), ("subject", "S"), ("message", "M")]);
        let mut event = SubmitEvent::new();

        let outcome = form.handle_submit(&mut event);

        assert_eq!(outcome, SubmissionOutcome::Invalid(ValidationFailure::InvalidEmail));
        assert!(event.is_default_prevented());
        let doc = lock_ui(&ui);
        assert_eq!(doc.banners.len(), 1);
        assert_eq!(doc.banners[0].kind, BannerKind::Error);
        assert!(doc.banners[0].text.starts_with("Ошибка"));
        assert_eq!(doc.node_by_id("name").unwrap().value, "Aida");
    }

    #[tokio::test]
    async fn test_delivery_failure_shows_error() {
        let (form, ui) = form_with(contact_page(), Locale::En);
        let mut form = form.with_delivery(Box::new(FailingDelivery));
        fill(&ui, &valid_values());

        let outcome = form.handle_submit(&mut SubmitEvent::new());

        assert!(matches!(outcome, SubmissionOutcome::DeliveryFailed(ref msg) if msg.contains("backend unavailable")));
        assert_eq!(lock_ui(&ui).banners[0].kind, BannerKind::Error);
        assert_eq!(form.metrics.submissions_rejected(), 1);
    }

    #[tokio::test]
    async fn test_explicit_submission_is_used() {
        let (mut form, ui) = form_with(contact_page(), Locale::En);
        let submission = FormSubmission::new()
            .with("name", "A")
            .with("email", "a@b.c")
            .with("subject", "S")
            .with("message", "M")
            .with("phone", "+996 (700) 123-456");

        let outcome = form.submit(&mut SubmitEvent::new(), &submission);

        assert!(outcome.is_accepted());
        assert_eq!(lock_ui(&ui).banners[0].kind, BannerKind::Success);
        assert_eq!(form.metrics.submissions_accepted(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_banner_lifecycle() {
        let (mut form, ui) = form_with(contact_page(), Locale::En);
        fill(&ui, &[("name", "A"), ("email", "a@b.c"), ("subject", "S"), ("message", "M"), ("phone", "123")]);

        form.handle_submit(&mut SubmitEvent::new());
        {
            let doc = lock_ui(&ui);
            assert_eq!(doc.banners.len(), 1);
            assert_eq!(doc.banners[0].kind, BannerKind::Error);
            assert!(doc.banners.iter().all(|b| b.kind != BannerKind::Success));
        }

        tokio::time::sleep(DEFAULT_BANNER_TIMEOUT + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;

        assert!(lock_ui(&ui).banners.is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_replaces_banner() {
        let (mut form, ui) = form_with(contact_page(), Locale::En);

        form.handle_submit(&mut SubmitEvent::new());
        fill(&ui, &valid_values());
        form.handle_submit(&mut SubmitEvent::new());

        let doc = lock_ui(&ui);
        assert_eq!(doc.banners.len(), 1);
        assert_eq!(doc.banners[0].kind, BannerKind::Success);
    }
}
