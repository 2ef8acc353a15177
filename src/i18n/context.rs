use crate::i18n::Locale;
use std::sync::{Arc, RwLock};

/// Shared handle to the active locale.
///
/// Cloning yields another handle to the same value. Only the localization
/// engine changes it; the contact form reads it.
#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
    active: Arc<RwLock<Locale>>,
}

impl LocaleContext {
    pub fn new(initial: Locale) -> Self {
        Self {
            active: Arc::new(RwLock::new(initial)),
        }
    }

    /// The active locale.
    pub fn get(&self) -> Locale {
        *self
            .active
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn set(&self, locale: Locale) {
        *self
            .active
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_russian() {
        assert_eq!(LocaleContext::default().get(), Locale::Ru);
    }

    #[test]
    fn test_clones_share_state() {
        let context = LocaleContext::new(Locale::Ru);
        let reader = context.clone();

        context.set(Locale::En);
        assert_eq!(reader.get(), Locale::En);
    }
}
