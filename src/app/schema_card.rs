use crate::domain::parse_card_schema;
use crate::io::{SchemaSource, StaticSchemaSource};

use super::{options::CardOptions, page::CardPage};

/// Loads a card schema from its source and renders the form and preview for it.
pub struct SchemaCard {
    source: Box<dyn SchemaSource>,
    options: CardOptions,
}

impl std::fmt::Debug for SchemaCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCard")
            .field("source", &self.source.origin())
            .field("options", &self.options)
            .finish()
    }
}

impl SchemaCard {
    pub fn new(source: impl SchemaSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            options: CardOptions::default(),
        }
    }

    pub fn from_boxed(source: Box<dyn SchemaSource>) -> Self {
        Self {
            source,
            options: CardOptions::default(),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(StaticSchemaSource::new(text))
    }

    pub fn with_options(mut self, options: CardOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch, parse and build. Retrieval is the only await; everything after it is synchronous.
    pub async fn render(self) -> CardPage {
        let SchemaCard { source, options } = self;
        let mut page = CardPage::loading(options);
        match source.fetch_schema_text().await {
            Ok(text) => page.apply_schema(&parse_card_schema(&text)),
            Err(err) => page.fail(&err),
        }
        page
    }
}
