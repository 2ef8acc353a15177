use crate::i18n::{FormLabelSet, Locale};
use crate::ui::{lock_ui, BannerId, BannerKind, SharedUi, UiTree};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How long a banner stays up unless replaced.
pub const DEFAULT_BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// Localized banner text.
pub fn banner_text(kind: BannerKind, locale: Locale) -> &'static str {
    let labels = FormLabelSet::for_locale(locale);
    match kind {
        BannerKind::Success => labels.success_banner,
        BannerKind::Error => labels.error_banner,
    }
}

/// Shows form result banners and expires them.
///
/// At most one banner is visible and at most one expiry timer is pending:
/// showing a banner removes the previous one and aborts its timer.
pub struct BannerController<U> {
    ui: SharedUi<U>,
    timeout: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<U: UiTree + Send + 'static> BannerController<U> {
    pub fn new(ui: SharedUi<U>, timeout: Duration) -> Self {
        Self {
            ui,
            timeout,
            pending: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace any visible banner with a new one and schedule its removal.
    ///
    /// Outside a tokio runtime the banner is shown but never expires.
    ///
    /// # Returns
    /// The banner id, or `None` when the page has no form to show it in.
    pub fn show(&mut self, kind: BannerKind, locale: Locale) -> Option<BannerId> {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let inserted = {
            let mut ui = lock_ui(&self.ui);
            ui.remove_banners();
            ui.insert_banner(kind, banner_text(kind, locale))
        };

        let Some(banner) = inserted else {
            debug!("No form on page, {:?} banner not shown", kind);
            return None;
        };

        match Handle::try_current() {
            Ok(runtime) => {
                let ui = Arc::clone(&self.ui);
                let timeout = self.timeout;
                self.pending = Some(runtime.spawn(async move {
                    sleep(timeout).await;
                    lock_ui(&ui).remove_banner(banner);
                    debug!("Banner {:?} expired", banner);
                }));
            }
            Err(_) => warn!("No async runtime, banner {:?} will not expire", banner),
        }

        Some(banner)
    }

    /// Whether an expiry timer is still waiting.
    pub fn has_pending_expiry(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
