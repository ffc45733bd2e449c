use crate::core::{filter::filter, flatten::flatten, sort::sort};
use crate::domain::model::{Catalog, CategorySelection, FlatItem, SortCriterion};
use crate::domain::ports::SelectionState;

/// flatten -> filter -> sort, recomputed from the full catalog every time.
pub fn run(catalog: &Catalog, category: &CategorySelection, criterion: SortCriterion) -> Vec<FlatItem> {
    let flat = flatten(catalog);
    tracing::debug!("Flattened {} items from {} categories", flat.len(), catalog.category_count());

    let filtered = filter(flat, category);
    tracing::debug!("Category '{}' kept {} items", category.value(), filtered.len());

    let sorted = sort(filtered, criterion);
    tracing::debug!("Sorted with {:?}", criterion);

    sorted
}

/// Same as [`run`], reading the raw selector values from `state`.
pub fn run_with_state<S: SelectionState + ?Sized>(catalog: &Catalog, state: &S) -> Vec<FlatItem> {
    let category = CategorySelection::from_value(state.selected_category());
    let criterion = SortCriterion::from_token(state.sort_criterion());
    run(catalog, &category, criterion)
}
