mod options;
mod page;
mod schema_card;
mod status;

pub use options::CardOptions;
pub use page::CardPage;
pub use schema_card::SchemaCard;
pub use status::LoadState;
