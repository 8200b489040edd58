#![deny(rust_2018_idioms)]
//! Schema-driven card forms.
//!
//! A tabular schema (CSV text, usually published from a spreadsheet) declares one field per
//! row. [`SchemaCard`] fetches it, builds an input widget per field and mirrors every widget
//! into a preview slot of the card. The card can then be exported as an image.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use schemacard::{SchemaCard, SvgCardExporter};
//!
//! let mut page = SchemaCard::from_text("question,type,options\nName,text\nRole,select,Dev|PM")
//!     .render()
//!     .await;
//! if let Some(name) = page.widget_by_label_mut("Name") {
//!     name.input_text("Ada")?;
//! }
//! assert_eq!(page.preview().lines()[0], "Name: Ada");
//! let download = page.export(&SvgCardExporter).await?;
//! # let _ = download;
//! # Ok(())
//! # }
//! ```

mod app;
pub mod domain;
pub mod export;
pub mod form;
pub mod io;
pub mod preview;

pub use app::{CardOptions, CardPage, LoadState, SchemaCard};
pub use domain::{CardSchema, FieldDefinition, FieldKind, parse_card_schema};
#[cfg(feature = "raster")]
pub use export::PngCardExporter;
pub use export::{CardRegion, Download, ExportError, ImageBlob, ImageExporter, SvgCardExporter};
pub use form::{ChangeEvent, ChangeSource, FieldInputError, FieldValue, FieldWidget};
#[cfg(feature = "http")]
pub use io::HttpSchemaSource;
pub use io::{
    FileSchemaSource, OutputDestination, OutputOptions, PreviewFormat, SchemaRetrievalError,
    SchemaSource, StaticSchemaSource, emit_preview, write_download,
};

pub mod prelude {
    pub use super::{CardOptions, CardPage, LoadState, SchemaCard, SchemaSource};
}
