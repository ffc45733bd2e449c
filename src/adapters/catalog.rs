use crate::domain::model::{Catalog, Item};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_catalog;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog stored as a JSON object of `category -> [ {name, price, image} ]`.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(origin: &str, content: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_json::from_str(content)
            .map_err(|e| CatalogError::malformed(origin, e.to_string()))?;
        validate_catalog(origin, &catalog)?;
        Ok(catalog)
    }
}

impl CatalogSource for JsonCatalogFile {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let catalog = Self::parse(&self.describe(), &content)?;
        tracing::debug!(
            "Loaded {} categories, {} items",
            catalog.category_count(),
            catalog.item_count()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Built-in demo catalog used when no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(Catalog::new()
            .with_category(
                "fruits",
                vec![
                    Item::new("Apple", "1.50", "images/apple.png"),
                    Item::new("Banana", "0.50", "images/banana.png"),
                    Item::new("Cherry", "4.20", "images/cherry.png"),
                    Item::new("Mango", "2.10", "images/mango.png"),
                ],
            )
            .with_category(
                "vegetables",
                vec![
                    Item::new("Carrot", "0.80", "images/carrot.png"),
                    Item::new("Broccoli", "1.75", "images/broccoli.png"),
                    Item::new("Potato", "0.60", "images/potato.png"),
                ],
            )
            .with_category(
                "drinks",
                vec![
                    Item::new("Water", "1.00", "images/water.png"),
                    Item::new("Orange juice", "2.50", "images/orange-juice.png"),
                    Item::new("Coffee", "3.00", "images/coffee.png"),
                ],
            ))
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_json_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "fruits": [
                    {"name": "Apple", "price": "1.50", "image": "a.png"},
                    {"name": "Banana", "price": "0.50", "image": "b.png"}
                ],
                "drinks": [{"name": "Water", "price": 1.0, "image": "w.png"}]
            }"#,
        )
        .unwrap();

        let catalog = JsonCatalogFile::new(file.path()).load().unwrap();
        let categories: Vec<&str> = catalog.category_names().collect();
        assert_eq!(categories, vec!["fruits", "drinks"]);
        assert_eq!(catalog.item_count(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = JsonCatalogFile::new("/definitely/not/here/catalog.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }

    #[test]
    fn test_non_mapping_catalog_is_malformed() {
        for content in [
            r#"[{"name": "Apple"}]"#,
            r#"{"fruits": {"name": "Apple"}}"#,
            r#"{"fruits": [{"price": "1"}]}"#,
            "not json",
        ] {
            let err = JsonCatalogFile::parse("inline", content).unwrap_err();
            assert!(
                matches!(err, CatalogError::MalformedCatalog { .. }),
                "{} -> {:?}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_huge_price_does_not_reject_catalog() {
        let catalog = JsonCatalogFile::parse(
            "inline",
            r#"{"a": [{"name": "x", "price": 1e400}, {"name": "y", "price": 2}]}"#,
        )
        .unwrap();

        let items = catalog.items("a").unwrap();
        assert_eq!(items[0].price.numeric(), None);
        assert_eq!(items[1].price.numeric(), Some(2.0));
    }

    #[test]
    fn test_reserved_category_rejected() {
        let err = JsonCatalogFile::parse("inline", r#"{"all": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCatalog { .. }));
    }

    #[test]
    fn test_sample_catalog_passes_validation() {
        let catalog = SampleCatalog.load().unwrap();
        assert!(validate_catalog("sample", &catalog).is_ok());
        assert_eq!(catalog.category_count(), 3);
    }
}
