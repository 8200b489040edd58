mod format;
#[cfg(feature = "http")]
mod http;
mod output;
mod source;

pub use format::PreviewFormat;
#[cfg(feature = "http")]
pub use http::HttpSchemaSource;
pub use output::{OutputDestination, OutputOptions, emit_preview, write_download};
pub use source::{FileSchemaSource, SchemaRetrievalError, SchemaSource, StaticSchemaSource};
