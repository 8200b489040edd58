use crate::domain::DEFAULT_FOOTER;

use super::slot::{PreviewEntry, PreviewSlot};

/// Card region mirroring the form: one slot per field plus the footer caption.
#[derive(Debug, Clone)]
pub struct PreviewArea {
    loading: Option<String>,
    slots: Vec<PreviewSlot>,
    footer: String,
}

impl Default for PreviewArea {
    fn default() -> Self {
        Self::new(DEFAULT_FOOTER)
    }
}

impl PreviewArea {
    pub fn new(footer: impl Into<String>) -> Self {
        Self {
            loading: None,
            slots: Vec::new(),
            footer: footer.into(),
        }
    }

    pub fn show_loading(&mut self, text: impl Into<String>) {
        self.loading = Some(text.into());
    }

    pub fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub fn loading(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub(crate) fn push_slot(&mut self, slot: PreviewSlot) {
        self.slots.push(slot);
    }

    pub fn slots(&self) -> &[PreviewSlot] {
        &self.slots
    }

    pub fn slot(&self, position: usize) -> Option<&PreviewSlot> {
        self.slots.iter().find(|slot| slot.position() == position)
    }

    pub fn entries(&self) -> Vec<PreviewEntry> {
        self.slots.iter().map(PreviewSlot::entry).collect()
    }

    /// Preview lines rendered as `Label: value`.
    pub fn lines(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| slot.entry().to_string())
            .collect()
    }
}
