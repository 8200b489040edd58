use tracing::{error, info, warn};

use crate::domain::CardSchema;
use crate::export::{CardRegion, Download, ExportError, ImageExporter, export_card};
use crate::form::{FieldWidget, FormArea, WidgetFactory};
use crate::io::SchemaRetrievalError;
use crate::preview::{PreviewArea, PreviewBinder};

use super::{options::CardOptions, status::LoadState};

/// One session of the card generator: the form area, the preview area and the load state.
#[derive(Debug)]
pub struct CardPage {
    state: LoadState,
    form: FormArea,
    preview: PreviewArea,
    options: CardOptions,
}

impl CardPage {
    /// A page waiting for its schema; both areas show the loading indicator.
    pub fn loading(options: CardOptions) -> Self {
        let mut form = FormArea::new();
        form.show_loading(options.loading_text.clone());
        let mut preview = PreviewArea::new(options.default_footer.clone());
        preview.show_loading(options.loading_text.clone());
        Self {
            state: LoadState::Loading,
            form,
            preview,
            options,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    pub fn form(&self) -> &FormArea {
        &self.form
    }

    pub fn preview(&self) -> &PreviewArea {
        &self.preview
    }

    pub fn widget_mut(&mut self, position: usize) -> Option<&mut FieldWidget> {
        self.form.widget_mut(position)
    }

    pub fn widget_by_label_mut(&mut self, label: &str) -> Option<&mut FieldWidget> {
        self.form.widget_by_label_mut(label)
    }

    /// Build every widget and its preview slot in position order, then become ready.
    pub fn apply_schema(&mut self, schema: &CardSchema) {
        if self.state.is_terminal() {
            warn!(state = %self.state, "ignoring schema for a page that finished loading");
            return;
        }

        self.form.clear();
        self.preview.clear_loading();
        self.preview
            .set_footer(schema.footer_or(&self.options.default_footer));

        let factory = WidgetFactory::from_options(&self.options);
        let mut binder = PreviewBinder::new(&mut self.preview);
        for definition in &schema.fields {
            let slot = binder.create_slot(definition);
            let (widget, changes) = factory.build(definition);
            binder.subscribe(slot, &changes);
            self.form.append(widget);
        }

        self.state = LoadState::Ready;
        info!(fields = schema.fields.len(), "card form ready");
    }

    /// Replace the form with the error notice. The preview area is left as it is.
    pub fn fail(&mut self, err: &SchemaRetrievalError) {
        if self.state.is_terminal() {
            warn!(state = %self.state, "ignoring failure for a page that finished loading");
            return;
        }
        error!(error = ?err, "failed to load card schema");
        self.form.show_notice(self.options.error_notice.clone());
        self.state = LoadState::Failed;
    }

    /// Snapshot of the card region as currently displayed.
    pub fn region(&self) -> CardRegion {
        CardRegion::capture(&self.preview)
    }

    /// Export the card as it looks right now, whatever the load state.
    pub async fn export(&self, exporter: &dyn ImageExporter) -> Result<Download, ExportError> {
        export_card(&self.preview, exporter, &self.options).await
    }
}
