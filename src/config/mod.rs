#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;
