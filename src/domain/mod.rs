mod parser;
mod schema;

pub use parser::{RawRow, parse_card_schema, split_rows};
pub use schema::{
    BREAK_SENTINEL, CardSchema, DEFAULT_FOOTER, FOOTER_COLUMN, FieldDefinition, FieldKind,
    OPTION_DELIMITER, is_break,
};
