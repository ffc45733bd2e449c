use crate::config::settings::ViewSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "catalog-view")]
#[command(about = "Browse a category catalog, filtered by category and sorted by price or name")]
pub struct CliConfig {
    /// Catalog JSON file (defaults to the built-in sample)
    #[arg(long)]
    pub catalog: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Initial category ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Initial sort: priceAscending, priceDescending, nameAscending, nameDescending
    #[arg(long)]
    pub sort: Option<String>,

    /// Output format: table, csv or json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file, rewritten on every refresh
    #[arg(short, long)]
    pub output: Option<String>,

    /// Clear the terminal before each table
    #[arg(long)]
    pub clear_screen: bool,

    /// Read category/sort commands from stdin after the first render
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the category options and exit
    #[arg(long)]
    pub list_categories: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and applies command line overrides on top.
    pub fn resolve(&self) -> Result<ViewSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        let settings = self.apply(ViewSettings::from_toml(&file)?)?;
        if self.interactive {
            return Ok(settings.interactive(std::io::stdout().is_terminal()));
        }
        Ok(settings)
    }

    pub fn apply(&self, mut settings: ViewSettings) -> Result<ViewSettings> {
        if let Some(catalog) = &self.catalog {
            settings.catalog_path = Some(PathBuf::from(catalog));
        }
        if let Some(category) = &self.category {
            settings.selection.category = category.clone();
        }
        if let Some(sort) = &self.sort {
            settings.selection.sort = sort.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.parse()?;
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(PathBuf::from(output));
        }
        if self.clear_screen {
            settings.clear_screen = true;
        }
        Ok(settings)
    }
}
