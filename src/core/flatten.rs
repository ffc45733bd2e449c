use crate::domain::model::{Catalog, FlatItem};

/// Every item of every category, in catalog order, tagged with its category.
pub fn flatten(catalog: &Catalog) -> Vec<FlatItem> {
    let mut flat = Vec::with_capacity(catalog.item_count());
    for (category, items) in catalog.categories() {
        flat.extend(items.iter().map(|item| FlatItem::tagged(item, category)));
    }
    flat
}
