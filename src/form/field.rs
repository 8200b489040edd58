use crate::domain::{FieldDefinition, FieldKind, is_break};

use super::{
    checked::CheckedValues,
    error::FieldInputError,
    events::{ChangeEvent, ChangeSource},
};

/// Text shown for a field without a value.
pub const EMPTY_DISPLAY: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckboxItem {
    Toggle { value: String, checked: bool },
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
    Radio {
        group: String,
        options: Vec<String>,
        selected: Option<usize>,
    },
    Checkbox {
        items: Vec<CheckboxItem>,
        checked: CheckedValues,
    },
}

impl FieldValue {
    pub fn from_definition(definition: &FieldDefinition) -> Self {
        match &definition.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Select(options) => FieldValue::Select {
                options: options.clone(),
                selected: None,
            },
            FieldKind::Radio(options) => FieldValue::Radio {
                group: definition.group_name(),
                options: options.clone(),
                selected: None,
            },
            FieldKind::Checkbox(options) => FieldValue::Checkbox {
                items: options
                    .iter()
                    .map(|option| {
                        if is_break(option) {
                            CheckboxItem::Break
                        } else {
                            CheckboxItem::Toggle {
                                value: option.clone(),
                                checked: false,
                            }
                        }
                    })
                    .collect(),
                checked: CheckedValues::new(),
            },
        }
    }

    /// Preview text for the current state.
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(text) => {
                if text.is_empty() {
                    EMPTY_DISPLAY.to_string()
                } else {
                    text.clone()
                }
            }
            FieldValue::Select { options, selected } | FieldValue::Radio { options, selected, .. } => {
                selected
                    .and_then(|idx| options.get(idx))
                    .cloned()
                    .unwrap_or_else(|| EMPTY_DISPLAY.to_string())
            }
            FieldValue::Checkbox { checked, .. } => {
                if checked.is_empty() {
                    EMPTY_DISPLAY.to_string()
                } else {
                    checked.joined()
                }
            }
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        match self {
            FieldValue::Select { options, selected } | FieldValue::Radio { options, selected, .. } => {
                selected.and_then(|idx| options.get(idx)).map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn toggle_count(&self) -> usize {
        match self {
            FieldValue::Checkbox { items, .. } => items
                .iter()
                .filter(|item| matches!(item, CheckboxItem::Toggle { .. }))
                .count(),
            _ => 0,
        }
    }

    pub fn break_count(&self) -> usize {
        match self {
            FieldValue::Checkbox { items, .. } => items
                .iter()
                .filter(|item| matches!(item, CheckboxItem::Break))
                .count(),
            _ => 0,
        }
    }
}

/// Interactive input for one field. Every value-changing interaction publishes the projected
/// display text on the widget's [`ChangeSource`].
#[derive(Debug)]
pub struct FieldWidget {
    definition: FieldDefinition,
    value: FieldValue,
    placeholder: Option<String>,
    changes: ChangeSource,
    dirty: bool,
}

impl FieldWidget {
    pub(crate) fn new(
        definition: FieldDefinition,
        placeholder: Option<String>,
        changes: ChangeSource,
    ) -> Self {
        let value = FieldValue::from_definition(&definition);
        Self {
            definition,
            value,
            placeholder,
            changes,
            dirty: false,
        }
    }

    pub fn position(&self) -> usize {
        self.definition.position
    }

    pub fn label(&self) -> &str {
        &self.definition.label
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Hint text of a text input, or the non-selectable first entry of a dropdown.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn display_value(&self) -> String {
        self.value.display_value()
    }

    /// Replace the contents of a text input. Every call counts as one input event.
    pub fn input_text(&mut self, text: &str) -> Result<(), FieldInputError> {
        let FieldValue::Text(buffer) = &mut self.value else {
            return Err(unsupported(&self.definition, "text input"));
        };
        buffer.clear();
        buffer.push_str(text);
        self.after_edit();
        Ok(())
    }

    /// Pick an option of a dropdown or radio group by its literal text.
    ///
    /// Returns `Ok(false)` when the option was already selected.
    pub fn choose(&mut self, option: &str) -> Result<bool, FieldInputError> {
        let index = match &self.value {
            FieldValue::Select { options, .. } | FieldValue::Radio { options, .. } => options
                .iter()
                .position(|candidate| candidate == option)
                .ok_or_else(|| FieldInputError::unknown_option(self.position(), option))?,
            _ => return Err(unsupported(&self.definition, "choosing an option")),
        };
        self.choose_index(index)
    }

    pub fn choose_index(&mut self, index: usize) -> Result<bool, FieldInputError> {
        let position = self.definition.position;
        let changed = match &mut self.value {
            FieldValue::Select { options, selected } | FieldValue::Radio { options, selected, .. } => {
                if index >= options.len() {
                    return Err(FieldInputError::missing_item(position, index));
                }
                let changed = *selected != Some(index);
                *selected = Some(index);
                changed
            }
            _ => return Err(unsupported(&self.definition, "choosing an option")),
        };
        if changed {
            self.after_edit();
        }
        Ok(changed)
    }

    /// Set the toggle at `item` (counting layout breaks) to `checked`.
    ///
    /// Returns `Ok(false)` when the toggle already had that state.
    pub fn set_checked(&mut self, item: usize, checked: bool) -> Result<bool, FieldInputError> {
        let position = self.definition.position;
        let changed = match &mut self.value {
            FieldValue::Checkbox {
                items,
                checked: values,
            } => match items.get_mut(item) {
                Some(CheckboxItem::Toggle {
                    value,
                    checked: state,
                }) => {
                    if *state == checked {
                        false
                    } else {
                        *state = checked;
                        if checked {
                            values.check(value);
                        } else {
                            values.uncheck(value);
                        }
                        true
                    }
                }
                _ => return Err(FieldInputError::missing_item(position, item)),
            },
            _ => return Err(unsupported(&self.definition, "toggling")),
        };
        if changed {
            self.after_edit();
        }
        Ok(changed)
    }

    /// Flip the first toggle whose value is `option`. Returns the new checked state.
    pub fn toggle_option(&mut self, option: &str) -> Result<bool, FieldInputError> {
        let found = match &self.value {
            FieldValue::Checkbox { items, .. } => {
                items.iter().enumerate().find_map(|(idx, item)| match item {
                    CheckboxItem::Toggle { value, checked } if value == option => {
                        Some((idx, *checked))
                    }
                    _ => None,
                })
            }
            _ => return Err(unsupported(&self.definition, "toggling")),
        };
        let (item, was_checked) =
            found.ok_or_else(|| FieldInputError::unknown_option(self.position(), option))?;
        self.set_checked(item, !was_checked)?;
        Ok(!was_checked)
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.changes.emit(&ChangeEvent {
            position: self.position(),
            text: self.display_value(),
        });
    }
}

fn unsupported(definition: &FieldDefinition, action: &str) -> FieldInputError {
    FieldInputError::unsupported(definition.position, definition.kind.literal(), action)
}
