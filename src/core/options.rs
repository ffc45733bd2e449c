use crate::domain::model::{Catalog, ALL_CATEGORIES};
use serde::Serialize;

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub item_count: usize,
}

/// The `"all"` option followed by every catalog category in catalog order.
pub fn category_options(catalog: &Catalog) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(catalog.category_count() + 1);
    options.push(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All categories".to_string(),
        item_count: catalog.item_count(),
    });
    options.extend(catalog.categories().map(|(name, items)| CategoryOption {
        value: name.to_string(),
        label: name.to_string(),
        item_count: items.len(),
    }));
    options
}
