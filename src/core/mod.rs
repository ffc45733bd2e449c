pub mod controller;
pub mod filter;
pub mod flatten;
pub mod options;
pub mod pipeline;
pub mod sort;

pub use crate::domain::model::{Catalog, CategorySelection, FlatItem, SortCriterion};
pub use crate::domain::ports::{CatalogSource, Renderer, SelectionState};
pub use crate::utils::error::Result;
