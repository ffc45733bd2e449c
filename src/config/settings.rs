use crate::adapters::catalog::{JsonCatalogFile, SampleCatalog};
use crate::adapters::render::RenderFormat;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::Selection;
use crate::domain::ports::{CatalogSource, Renderer};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_required_field,
    Validate,
};
use std::path::PathBuf;

/// Effective settings after merging defaults, the config file and CLI flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSettings {
    /// `None` selects the built-in sample catalog.
    pub catalog_path: Option<PathBuf>,
    pub selection: Selection,
    pub format: RenderFormat,
    pub output_path: Option<PathBuf>,
    pub clear_screen: bool,
}

impl ViewSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let defaults = Selection::default();
        Ok(Self {
            catalog_path: config.catalog_path().map(PathBuf::from),
            selection: Selection::new(
                config.category().unwrap_or(&defaults.category),
                config.sort().unwrap_or(&defaults.sort),
            ),
            format: config
                .format()
                .map(str::parse::<RenderFormat>)
                .transpose()?
                .unwrap_or_default(),
            output_path: config.output_path().map(PathBuf::from),
            clear_screen: config.clear_screen(),
        })
    }

    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(JsonCatalogFile::new(path.clone())),
            None => Box::new(SampleCatalog),
        }
    }

    /// Each frame of an interactive session replaces the previous one, so a
    /// table drawn on a terminal clears the screen first.
    pub fn interactive(mut self, stdout_is_terminal: bool) -> Self {
        if stdout_is_terminal && self.format == RenderFormat::Table && self.output_path.is_none()
        {
            self.clear_screen = true;
        }
        self
    }

    pub fn build_renderer(&self) -> Result<Box<dyn Renderer>> {
        self.format.build(self.output_path.as_deref(), self.clear_screen)
    }
}

impl Validate for ViewSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog_path {
            let path = path.to_string_lossy();
            validate_path("catalog.path", &path)?;
            validate_file_extension("catalog.path", &path, &["json"])?;
        }

        validate_non_empty_string("view.category", &self.selection.category)?;

        match self.format {
            RenderFormat::Table => {
                if let Some(output) = &self.output_path {
                    validate_path("render.output_path", &output.to_string_lossy())?;
                }
            }
            RenderFormat::Csv | RenderFormat::Json => {
                let output = validate_required_field("render.output_path", &self.output_path)?;
                let output = output.to_string_lossy();
                validate_path("render.output_path", &output)?;
                validate_file_extension("render.output_path", &output, &[self.format.as_str()])?;
            }
        }
        Ok(())
    }
}
