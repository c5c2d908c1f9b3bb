pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, GeneratorSettings};

pub use app::renderers::{render_console, render_html, ConsoleRenderer, HtmlRenderer};
pub use self::core::{
    generator::WebsiteGenerator,
    loader::{load, load_records},
    normalize::{normalize, normalize_all},
};
pub use domain::model::{Entity, GenerationReport, RawRecord};
pub use utils::error::{ErrorCategory, GeneratorError, Result};
