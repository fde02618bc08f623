pub mod toml_config;

use crate::domain::model::FilmId;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SwapiError};
use crate::utils::validation::{validate_trailing_slash, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://swapi-api.hbtn.io/api/films/";

#[derive(Debug, Clone, Parser)]
#[command(name = "swapi-characters")]
#[command(about = "Print the character references of a Star Wars film")]
pub struct CliConfig {
    /// Film identifier appended to the API base URL
    #[arg(value_name = "EPISODE")]
    pub episode: Option<String>,

    /// Base URL of the films endpoint, ending with '/'
    #[arg(long, env = "SWAPI_BASE_URL")]
    pub base_url: Option<String>,

    /// Optional TOML config file
    #[arg(long, env = "SWAPI_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn film_id(&self, program: &str) -> Result<FilmId> {
        FilmId::from_arg(self.episode.as_deref()).ok_or_else(|| SwapiError::UsageError {
            program: program.to_string(),
        })
    }

    /// Flag and environment win over the config file, which wins over the default.
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let base_url = self
            .base_url
            .clone()
            .or(file_config.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let settings = Settings { base_url };
        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_trailing_slash("base_url", &self.base_url)
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}
