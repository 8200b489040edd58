mod area;
mod checked;
mod error;
mod events;
mod factory;
mod field;

pub use area::{FormArea, FormNode};
pub use checked::{CHECKED_SEPARATOR, CheckedValues};
pub use error::FieldInputError;
pub use events::{ChangeEvent, ChangeSource};
pub use factory::WidgetFactory;
pub use field::{CheckboxItem, EMPTY_DISPLAY, FieldValue, FieldWidget};
