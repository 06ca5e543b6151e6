pub mod activity;
pub mod catalog;
pub mod view;

pub use activity::Activity;
pub use catalog::Catalog;
pub use view::{CategoryOption, SortKey, SortKeyParseError, ViewQuery, ALL_CATEGORIES_LABEL};
