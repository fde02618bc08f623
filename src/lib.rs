pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::ReqwestTransport;
pub use config::{CliConfig, Settings};
pub use crate::core::{lister::FilmCharacterLister, runner::run};
pub use utils::error::{Result, SwapiError};
