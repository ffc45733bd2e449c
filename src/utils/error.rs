use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Malformed catalog from {origin}: {message}")]
    MalformedCatalog { origin: String, message: String },

    #[error("Render failed: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Catalog,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::MalformedCatalog { .. } => ErrorCategory::Catalog,
            CatalogError::SerializationError(_)
            | CatalogError::CsvError(_)
            | CatalogError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::High,
            // nothing can be shown without a catalog
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::MalformedCatalog { .. } => {
                "The catalog must be a JSON object mapping category names to arrays of {name, price, image}"
            }
            CatalogError::SerializationError(_)
            | CatalogError::CsvError(_)
            | CatalogError::RenderError { .. } => {
                "Check that the output location is writable, then retry"
            }
            CatalogError::ConfigError { .. } | CatalogError::ConfigValidationError { .. } => {
                "Fix the configuration file syntax and try again"
            }
            CatalogError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value; run with --help to see accepted values"
            }
            CatalogError::MissingConfigError { .. } => {
                "Provide the missing setting on the command line or in the config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::MalformedCatalog { origin, message } => {
                format!("The catalog in {} could not be used: {}", origin, message)
            }
            CatalogError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            CatalogError::MissingConfigError { field } => {
                format!("The setting '{}' is required here", field)
            }
            other => other.to_string(),
        }
    }

    pub fn malformed(origin: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::MalformedCatalog {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
