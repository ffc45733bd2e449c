use crate::core::options::{category_options, CategoryOption};
use crate::core::pipeline;
use crate::domain::model::Catalog;
use crate::domain::ports::{Renderer, SelectionState};
use crate::utils::error::Result;

/// Runs the pipeline and hands the result to the renderer on each trigger.
pub struct CatalogController<R: Renderer> {
    catalog: Catalog,
    renderer: R,
    refreshes: u64,
}

impl<R: Renderer> CatalogController<R> {
    pub fn new(catalog: Catalog, renderer: R) -> Self {
        Self {
            catalog,
            renderer,
            refreshes: 0,
        }
    }

    /// Recomputes the view from the full catalog and renders it.
    /// Returns the number of rendered items.
    pub fn refresh<S: SelectionState + ?Sized>(&mut self, state: &S) -> Result<usize> {
        self.refreshes += 1;
        tracing::debug!(
            "Refresh #{}: category='{}', sort='{}'",
            self.refreshes,
            state.selected_category(),
            state.sort_criterion()
        );

        let items = pipeline::run_with_state(&self.catalog, state);

        self.renderer.render(&items)?;
        tracing::info!("Rendered {} items", items.len());

        Ok(items.len())
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::MemoryRenderer;
    use crate::domain::model::{FlatItem, Item, Selection};
    use crate::utils::error::CatalogError;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_category(
                "fruits",
                vec![
                    Item::new("Apple", "1.50", "a.png"),
                    Item::new("Banana", "0.50", "b.png"),
                ],
            )
            .with_category("drinks", vec![Item::new("Water", "1.00", "w.png")])
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&mut self, _items: &[FlatItem]) -> Result<()> {
            Err(CatalogError::RenderError {
                message: "sink closed".to_string(),
            })
        }
    }

    #[test]
    fn test_refresh_renders_pipeline_output() {
        let mut controller = CatalogController::new(catalog(), MemoryRenderer::new());

        let count = controller
            .refresh(&Selection::new("fruits", "priceAscending"))
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(controller.renderer().names(), vec!["Banana", "Apple"]);
        assert_eq!(controller.refresh_count(), 1);
    }

    #[test]
    fn test_each_refresh_replaces_previous_frame() {
        let mut controller = CatalogController::new(catalog(), MemoryRenderer::new());

        controller.refresh(&Selection::default()).unwrap();
        assert_eq!(controller.renderer().frame().len(), 3);

        controller.refresh(&Selection::new("drinks", "")).unwrap();
        assert_eq!(controller.renderer().names(), vec!["Water"]);

        controller.refresh(&Selection::new("snacks", "")).unwrap();
        assert!(controller.renderer().frame().is_empty());
        assert_eq!(controller.renderer().render_count(), 3);
    }

    #[test]
    fn test_refresh_does_not_touch_catalog() {
        let original = catalog();
        let mut controller = CatalogController::new(original.clone(), MemoryRenderer::new());
        controller
            .refresh(&Selection::new("all", "nameDescending"))
            .unwrap();
        assert_eq!(controller.catalog(), &original);
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut controller = CatalogController::new(catalog(), FailingRenderer);
        let err = controller.refresh(&Selection::default()).unwrap_err();
        assert!(matches!(err, CatalogError::RenderError { .. }));
    }
}
