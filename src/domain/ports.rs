use crate::domain::model::{Catalog, FlatItem, Selection};
use crate::utils::error::Result;

/// Supplies the catalog once at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;

    /// Human readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Current selector values, owned by whatever drives the controls.
pub trait SelectionState {
    fn selected_category(&self) -> &str;
    fn sort_criterion(&self) -> &str;
}

/// Sink for the final ordered sequence. Every call replaces whatever the
/// previous call produced.
pub trait Renderer {
    fn render(&mut self, items: &[FlatItem]) -> Result<()>;
}

impl SelectionState for Selection {
    fn selected_category(&self) -> &str {
        &self.category
    }

    fn sort_criterion(&self) -> &str {
        &self.sort
    }
}

impl CatalogSource for Catalog {
    fn load(&self) -> Result<Catalog> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        (**self).render(items)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, items: &[FlatItem]) -> Result<()> {
        (**self).render(items)
    }
}
