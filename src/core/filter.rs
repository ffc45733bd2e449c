use crate::domain::model::{CategorySelection, FlatItem};

/// Narrows to one category, or passes everything through for `All`.
pub fn filter(items: Vec<FlatItem>, selection: &CategorySelection) -> Vec<FlatItem> {
    match selection {
        CategorySelection::All => items,
        CategorySelection::Only(category) => items
            .into_iter()
            .filter(|item| item.category == *category)
            .collect(),
    }
}
