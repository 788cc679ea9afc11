pub mod filter;
pub mod gallery;
pub mod news;
pub mod record;
pub mod schema;

pub use filter::Filter;
pub use record::{Collection, Features, Fragment, Media, MediaKind, Record, RecordDate};
