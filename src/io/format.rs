use std::fmt;

/// Supported encodings for printing a card preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewFormat {
    /// One `Label: value` line per field, followed by the footer.
    #[default]
    Text,
    Json,
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewFormat::Text => write!(f, "text"),
            PreviewFormat::Json => write!(f, "json"),
        }
    }
}
