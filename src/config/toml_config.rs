use crate::adapters::render::RenderFormat;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub view: Option<ViewConfig>,
    pub render: Option<RenderConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

/// Initial selector values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    pub category: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: Option<String>,
    pub output_path: Option<String>,
    pub clear_screen: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        self.view.as_ref().and_then(|v| v.category.as_deref())
    }

    pub fn sort(&self) -> Option<&str> {
        self.view.as_ref().and_then(|v| v.sort.as_deref())
    }

    pub fn format(&self) -> Option<&str> {
        self.render.as_ref().and_then(|r| r.format.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.render.as_ref().and_then(|r| r.output_path.as_deref())
    }

    pub fn clear_screen(&self) -> bool {
        self.render
            .as_ref()
            .and_then(|r| r.clear_screen)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.catalog_path() {
            validate_path("catalog.path", path)?;
        }
        if let Some(category) = self.category() {
            validate_non_empty_string("view.category", category)?;
        }
        if let Some(format) = self.format() {
            validate_one_of("render.format", format, &RenderFormat::NAMES)?;
        }
        if let Some(output) = self.output_path() {
            validate_path("render.output_path", output)?;
        }
        Ok(())
    }
}
