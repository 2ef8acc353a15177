//! Translatable entry registry.
//!
//! Discovery runs once at startup. Each page node carrying both locale text
//! attributes becomes a [`TranslatableEntry`] whose render target is decided
//! from the node kind at that moment, not on every render.

use crate::i18n::Locale;
use crate::ui::{NodeKind, NodeRef, UiTree, EN_TEXT_ATTR, RU_TEXT_ATTR};
use tracing::debug;

/// Prefix of ids assigned to translatable nodes that lack one.
const SYNTHETIC_ID_PREFIX: &str = "translate-";

/// Text of one node in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    pub ru: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ru: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ru: ru.into(),
            en: en.into(),
        }
    }

    /// Text for a locale, `None` when empty.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let text = match locale {
            Locale::Ru => &self.ru,
            Locale::En => &self.en,
        };
        (!text.is_empty()).then_some(text.as_str())
    }

    /// Whether neither locale has text.
    pub fn is_empty(&self) -> bool {
        self.ru.is_empty() && self.en.is_empty()
    }
}

/// Where an entry's text is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Visible text content
    Text,
    /// Placeholder hint of a text-entry field
    Placeholder,
}

impl RenderTarget {
    /// Pick the target for a node kind.
    pub fn for_kind(kind: NodeKind) -> Self {
        if kind.is_text_entry() {
            RenderTarget::Placeholder
        } else {
            RenderTarget::Text
        }
    }

    /// Write `text` to `node` through this target.
    pub fn apply<U: UiTree + ?Sized>(&self, ui: &mut U, node: NodeRef, text: &str) {
        match self {
            RenderTarget::Text => ui.set_text(node, text),
            RenderTarget::Placeholder => ui.set_placeholder(node, text),
        }
    }
}

/// A discovered translatable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableEntry {
    /// Element id (assigned during discovery when missing)
    pub id: String,

    /// Non-owning reference into the page
    pub node: NodeRef,

    pub text: LocalizedText,

    pub target: RenderTarget,
}

/// Registered entries plus the synthetic id counter.
#[derive(Debug, Default)]
pub struct TranslationRegistry {
    entries: Vec<TranslatableEntry>,
    next_synthetic_id: usize,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the page once and register every translatable node.
    ///
    /// Running it again registers the same nodes a second time.
    ///
    /// # Returns
    /// The number of entries added by this scan.
    pub fn discover<U: UiTree + ?Sized>(&mut self, ui: &mut U) -> usize {
        let before = self.entries.len();

        for node in ui.translatable_nodes() {
            let Some(kind) = ui.node_kind(node) else {
                continue;
            };

            let text = LocalizedText::new(
                ui.attribute(node, RU_TEXT_ATTR).unwrap_or_default(),
                ui.attribute(node, EN_TEXT_ATTR).unwrap_or_default(),
            );
            if text.is_empty() {
                debug!("Skipping translatable node {:?} with no text", node);
                continue;
            }

            let id = match ui.node_id(node).filter(|id| !id.is_empty()) {
                Some(id) => id,
                None => {
                    let id = self.allocate_id(ui);
                    ui.set_node_id(node, &id);
                    id
                }
            };

            self.entries.push(TranslatableEntry {
                id,
                node,
                text,
                target: RenderTarget::for_kind(kind),
            });
        }

        let added = self.entries.len() - before;
        debug!("Discovered {} translatable nodes", added);
        added
    }

    /// Next `translate-<n>` id not already used in the page.
    fn allocate_id<U: UiTree + ?Sized>(&mut self, ui: &U) -> String {
        loop {
            self.next_synthetic_id += 1;
            let candidate = format!("{}{}", SYNTHETIC_ID_PREFIX, self.next_synthetic_id);
            if ui.find_by_id(&candidate).is_none() {
                return candidate;
            }
        }
    }

    pub fn entries(&self) -> &[TranslatableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
