use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::form::EMPTY_DISPLAY;

/// Preview line bound to one field. The displayed text is shared with the subscription that
/// keeps it current.
#[derive(Debug, Clone)]
pub struct PreviewSlot {
    position: usize,
    label: String,
    text: Rc<RefCell<String>>,
}

impl PreviewSlot {
    pub fn new(position: usize, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            text: Rc::new(RefCell::new(EMPTY_DISPLAY.to_string())),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub(crate) fn set_text(&self, text: &str) {
        let mut current = self.text.borrow_mut();
        if *current != text {
            current.clear();
            current.push_str(text);
        }
    }

    pub fn entry(&self) -> PreviewEntry {
        PreviewEntry {
            label: self.label.clone(),
            text: self.text(),
        }
    }
}

/// Point-in-time copy of one preview line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub label: String,
    pub text: String,
}

impl fmt::Display for PreviewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.text)
    }
}
