use tracing::trace;

use crate::domain::FieldDefinition;
use crate::form::ChangeSource;

use super::{area::PreviewArea, slot::PreviewSlot};

/// Creates preview slots and keeps them in sync with their widgets.
#[derive(Debug)]
pub struct PreviewBinder<'a> {
    area: &'a mut PreviewArea,
}

impl<'a> PreviewBinder<'a> {
    pub fn new(area: &'a mut PreviewArea) -> Self {
        Self { area }
    }

    /// Append a slot for `definition`, initialised to the empty display text.
    pub fn create_slot(&mut self, definition: &FieldDefinition) -> PreviewSlot {
        let slot = PreviewSlot::new(definition.position, definition.label.clone());
        self.area.push_slot(slot.clone());
        slot
    }

    pub fn subscribe(&self, slot: PreviewSlot, source: &ChangeSource) {
        source.subscribe(move |event| {
            trace!(position = event.position, text = %event.text, "preview slot updated");
            slot.set_text(&event.text);
        });
    }

    pub fn bind(&mut self, definition: &FieldDefinition, source: &ChangeSource) {
        let slot = self.create_slot(definition);
        self.subscribe(slot, source);
    }
}
