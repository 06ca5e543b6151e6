pub mod domain;

pub use domain::{
    Activity, Catalog, CategoryOption, SortKey, SortKeyParseError, ViewQuery,
    ALL_CATEGORIES_LABEL,
};
