use std::fmt;

/// Header column (0-based) that carries the footer caption.
pub const FOOTER_COLUMN: usize = 26;
/// Caption used when the header does not provide one.
pub const DEFAULT_FOOTER: &str = "X Profile Card Generator";
/// Separator between options inside a single cell.
pub const OPTION_DELIMITER: char = '|';
/// Checkbox option that renders as a layout break instead of a toggle.
pub const BREAK_SENTINEL: &str = "---";

/// Parsed card schema: the ordered field set plus the footer metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSchema {
    /// Trimmed, non-blank caption from the header row, if any.
    pub caption: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

impl CardSchema {
    pub fn footer(&self) -> &str {
        self.footer_or(DEFAULT_FOOTER)
    }

    pub fn footer_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.caption.as_deref().unwrap_or(fallback)
    }

    pub fn field(&self, position: usize) -> Option<&FieldDefinition> {
        self.fields.get(position)
    }

    pub fn field_by_label(&self, label: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(Vec<String>),
    Radio(Vec<String>),
    Checkbox(Vec<String>),
}

impl FieldKind {
    /// Build a kind from its literal schema name. Matching is exact and case-sensitive.
    pub fn from_literal(kind: &str, options: Vec<String>) -> Option<Self> {
        match kind {
            "text" => Some(FieldKind::Text),
            "select" => Some(FieldKind::Select(options)),
            "radio" => Some(FieldKind::Radio(options)),
            "checkbox" => Some(FieldKind::Checkbox(options)),
            _ => None,
        }
    }

    pub fn literal(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Select(_) => "select",
            FieldKind::Radio(_) => "radio",
            FieldKind::Checkbox(_) => "checkbox",
        }
    }

    /// Raw option list as declared in the schema, break sentinels included.
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Text => &[],
            FieldKind::Select(options)
            | FieldKind::Radio(options)
            | FieldKind::Checkbox(options) => options,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub position: usize,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub fn new(position: usize, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            position,
            label: label.into(),
            kind,
        }
    }

    /// Name shared by every button of a radio group.
    pub fn group_name(&self) -> String {
        format!("radio-{}", self.position)
    }
}

/// Whether a checkbox option is the layout break sentinel.
pub fn is_break(option: &str) -> bool {
    option.trim() == BREAK_SENTINEL
}
