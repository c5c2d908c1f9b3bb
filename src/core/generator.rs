use crate::app::renderers::{ConsoleRenderer, HtmlRenderer};
use crate::config::GeneratorSettings;
use crate::core::loader::load_records;
use crate::core::normalize::normalize_all;
use crate::domain::model::GenerationReport;
use crate::domain::ports::{Renderer, Storage};
use crate::utils::error::{GeneratorError, Result};
use std::io::Write;

/// Runs load, normalize, console print, HTML render and write, in that order.
pub struct WebsiteGenerator<S: Storage> {
    storage: S,
    settings: GeneratorSettings,
    console: ConsoleRenderer,
    html: HtmlRenderer,
}

impl<S: Storage> WebsiteGenerator<S> {
    pub fn new(storage: S, settings: GeneratorSettings) -> Self {
        Self {
            storage,
            settings,
            console: ConsoleRenderer::new(),
            html: HtmlRenderer::new(),
        }
    }

    /// Loads the custom template named in the settings, if any, through the same storage.
    pub fn with_configured_template(storage: S, settings: GeneratorSettings) -> Result<Self> {
        let html = match &settings.template_path {
            Some(path) => {
                tracing::debug!("Loading HTML template from {}", path);
                let bytes = storage.read_file(path)?;
                let template =
                    String::from_utf8(bytes).map_err(|e| GeneratorError::TemplateError {
                        message: format!("{} is not valid UTF-8: {}", path, e),
                    })?;
                HtmlRenderer::with_template(template)?
            }
            None => HtmlRenderer::new(),
        };

        Ok(Self {
            storage,
            settings,
            console: ConsoleRenderer::new(),
            html,
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// `console` receives the text listing; the HTML goes to the configured output path.
    pub fn run<W: Write>(&self, console: &mut W) -> Result<GenerationReport> {
        let records = load_records(&self.storage, &self.settings.input_path)?;
        tracing::info!("Loaded {} records from {}", records.len(), self.settings.input_path);

        let entities = normalize_all(&records);

        console.write_all(self.console.render(&entities).as_bytes())?;
        console.flush()?;

        let html = self.html.render(&entities);
        tracing::debug!(
            "Writing {} bytes of HTML to {}",
            html.len(),
            self.settings.output_path
        );
        self.storage
            .write_file(&self.settings.output_path, html.as_bytes())?;

        Ok(GenerationReport {
            output_path: self.settings.output_path.clone(),
            entity_count: entities.len(),
            html_bytes: html.len(),
        })
    }
}
