pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "animals_data.json";
pub const DEFAULT_OUTPUT_PATH: &str = "animals.html";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub input_path: String,
    pub output_path: String,
    pub template_path: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            template_path: None,
        }
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_file_extension("output", &self.output_path, &["html", "htm"])?;
        if let Some(template) = &self.template_path {
            validate_path("template", template)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "animal-cards")]
#[command(about = "Prints animal records and renders them as an HTML card list")]
pub struct CliConfig {
    /// JSON file holding the array of animal records [default: animals_data.json]
    #[arg(short, long)]
    pub input: Option<String>,

    /// HTML file to write [default: animals.html]
    #[arg(short, long)]
    pub output: Option<String>,

    /// HTML template containing the __REPLACE_ANIMALS_INFO__ marker
    #[arg(short, long)]
    pub template: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags win over the config file, which wins over the defaults.
    pub fn resolve(&self) -> Result<GeneratorSettings> {
        let mut settings = GeneratorSettings::default();

        if let Some(config_path) = &self.config {
            tracing::debug!("Loading configuration from {}", config_path);
            toml_config::TomlConfig::from_file(config_path)?.apply_to(&mut settings);
        }

        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if let Some(template) = &self.template {
            settings.template_path = Some(template.clone());
        }

        settings.validate()?;
        Ok(settings)
    }
}
