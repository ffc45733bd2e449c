pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::catalog::{JsonCatalogFile, SampleCatalog};
pub use adapters::render::{
    CsvFileRenderer, JsonFileRenderer, MemoryRenderer, RenderFormat, TableFileRenderer,
    TableRenderer,
};
pub use config::{settings::ViewSettings, toml_config::TomlConfig};
pub use crate::core::{controller::CatalogController, pipeline};
pub use domain::model::{
    Catalog, CategorySelection, FlatItem, Item, Price, Selection, SortCriterion, ALL_CATEGORIES,
};
pub use domain::ports::{CatalogSource, Renderer, SelectionState};
pub use utils::error::{CatalogError, Result};
