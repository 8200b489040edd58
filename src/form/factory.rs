use tracing::debug;

use crate::app::CardOptions;
use crate::domain::{FieldDefinition, FieldKind};

use super::{events::ChangeSource, field::FieldWidget};

/// Builds the input widget for one field definition.
#[derive(Debug, Clone)]
pub struct WidgetFactory {
    text_placeholder: String,
    select_placeholder: String,
}

impl Default for WidgetFactory {
    fn default() -> Self {
        Self::from_options(&CardOptions::default())
    }
}

impl WidgetFactory {
    pub fn new(text_placeholder: impl Into<String>, select_placeholder: impl Into<String>) -> Self {
        Self {
            text_placeholder: text_placeholder.into(),
            select_placeholder: select_placeholder.into(),
        }
    }

    pub fn from_options(options: &CardOptions) -> Self {
        Self::new(
            options.text_placeholder.clone(),
            options.select_placeholder.clone(),
        )
    }

    /// Returns the widget together with the source its change events are published on.
    pub fn build(&self, definition: &FieldDefinition) -> (FieldWidget, ChangeSource) {
        let placeholder = match definition.kind {
            FieldKind::Text => Some(self.text_placeholder.clone()),
            FieldKind::Select(_) => Some(self.select_placeholder.clone()),
            FieldKind::Radio(_) | FieldKind::Checkbox(_) => None,
        };
        let source = ChangeSource::new();
        let widget = FieldWidget::new(definition.clone(), placeholder, source.clone());
        debug!(
            position = definition.position,
            label = %definition.label,
            kind = %definition.kind,
            "built field widget"
        );
        (widget, source)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::form::{CheckboxItem, EMPTY_DISPLAY, FieldValue};

    fn build_recorded(kind: FieldKind) -> (FieldWidget, Rc<RefCell<Vec<String>>>) {
        let definition = FieldDefinition::new(0, "Field", kind);
        let (widget, source) = WidgetFactory::default().build(&definition);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        source.subscribe(move |event| sink.borrow_mut().push(event.text.clone()));
        (widget, seen)
    }

    fn options(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn text_emits_on_every_input() {
        let (mut widget, seen) = build_recorded(FieldKind::Text);
        assert_eq!(widget.placeholder(), Some("please enter"));
        widget.input_text("A").unwrap();
        widget.input_text("Ad").unwrap();
        widget.input_text("Ad").unwrap();
        widget.input_text("").unwrap();
        assert_eq!(*seen.borrow(), vec!["A", "Ad", "Ad", EMPTY_DISPLAY]);
    }

    #[test]
    fn text_keeps_spacing_verbatim() {
        let (mut widget, _) = build_recorded(FieldKind::Text);
        widget.input_text("  Ada  ").unwrap();
        assert_eq!(widget.display_value(), "  Ada  ");
    }

    #[test]
    fn select_overwrites_and_rejects_placeholder() {
        let (mut widget, seen) = build_recorded(FieldKind::Select(options(&["Dev", "PM"])));
        assert_eq!(widget.placeholder(), Some("please choose"));
        assert_eq!(widget.display_value(), EMPTY_DISPLAY);
        assert!(widget.choose("please choose").is_err());
        assert!(widget.choose("Dev").unwrap());
        assert!(widget.choose("PM").unwrap());
        assert!(!widget.choose("PM").unwrap());
        assert_eq!(*seen.borrow(), vec!["Dev", "PM"]);
        assert_eq!(widget.value().selected_option(), Some("PM"));
    }

    #[test]
    fn radio_groups_by_position() {
        let definition = FieldDefinition::new(3, "Size", FieldKind::Radio(options(&[" S", "M"])));
        let (mut widget, _) = WidgetFactory::default().build(&definition);
        match widget.value() {
            FieldValue::Radio { group, .. } => assert_eq!(group, "radio-3"),
            other => panic!("unexpected value {other:?}"),
        }
        assert!(widget.placeholder().is_none());
        widget.choose(" S").unwrap();
        assert_eq!(widget.display_value(), " S");
    }

    #[test]
    fn checkbox_projects_in_check_order() {
        let (mut widget, seen) =
            build_recorded(FieldKind::Checkbox(options(&["A", "---", "B", "C"])));
        assert_eq!(widget.value().toggle_count(), 3);
        assert_eq!(widget.value().break_count(), 1);

        widget.toggle_option("B").unwrap();
        widget.toggle_option("A").unwrap();
        assert_eq!(widget.display_value(), "B / A");
        widget.toggle_option("B").unwrap();
        assert_eq!(widget.display_value(), "A");
        widget.toggle_option("A").unwrap();
        assert_eq!(*seen.borrow(), vec!["B", "B / A", "A", EMPTY_DISPLAY]);
    }

    #[test]
    fn padded_sentinel_is_a_break_not_a_toggle() {
        let (mut widget, _) = build_recorded(FieldKind::Checkbox(options(&["  ---  ", "X"])));
        match widget.value() {
            FieldValue::Checkbox { items, .. } => {
                assert_eq!(items[0], CheckboxItem::Break);
                assert_eq!(
                    items[1],
                    CheckboxItem::Toggle {
                        value: "X".into(),
                        checked: false
                    }
                );
            }
            other => panic!("unexpected value {other:?}"),
        }
        assert!(widget.set_checked(0, true).is_err());
        assert!(widget.toggle_option("  ---  ").is_err());
    }

    #[test]
    fn every_sentinel_adds_a_break() {
        let (mut widget, seen) =
            build_recorded(FieldKind::Checkbox(options(&["---", "A", " --- ", "---", "B"])));
        match widget.value() {
            FieldValue::Checkbox { items, .. } => {
                assert_eq!(items[0], CheckboxItem::Break);
                assert_eq!(items[2], CheckboxItem::Break);
                assert_eq!(items[3], CheckboxItem::Break);
            }
            other => panic!("unexpected value {other:?}"),
        }
        assert_eq!(widget.value().break_count(), 3);
        assert_eq!(widget.value().toggle_count(), 2);

        widget.toggle_option("B").unwrap();
        widget.toggle_option("A").unwrap();
        assert_eq!(widget.display_value(), "B / A");
        assert_eq!(*seen.borrow(), vec!["B", "B / A"]);
    }

    #[test]
    fn set_checked_is_silent_when_state_is_unchanged() {
        let (mut widget, seen) = build_recorded(FieldKind::Checkbox(options(&["A", "B"])));
        assert!(widget.set_checked(1, true).unwrap());
        assert!(!widget.set_checked(1, true).unwrap());
        assert!(!widget.set_checked(0, false).unwrap());
        assert_eq!(*seen.borrow(), vec!["B"]);
    }

    #[test]
    fn interactions_of_another_kind_are_rejected() {
        let (mut widget, seen) = build_recorded(FieldKind::Text);
        assert!(widget.choose("x").is_err());
        assert!(widget.toggle_option("x").is_err());
        assert!(!widget.is_dirty());
        assert!(seen.borrow().is_empty());
    }
}
