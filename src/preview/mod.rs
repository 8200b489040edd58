mod area;
mod binder;
mod slot;

pub use area::PreviewArea;
pub use binder::PreviewBinder;
pub use slot::{PreviewEntry, PreviewSlot};
