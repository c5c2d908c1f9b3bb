use animal_cards::utils::logger;
use animal_cards::{CliConfig, LocalStorage, WebsiteGenerator};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let outcome = config.resolve().and_then(|settings| {
        let generator =
            WebsiteGenerator::with_configured_template(LocalStorage::default(), settings)?;
        generator.run(&mut std::io::stdout().lock())
    });

    match outcome {
        Ok(report) => {
            tracing::info!(
                "Rendered {} animals ({} bytes)",
                report.entity_count,
                report.html_bytes
            );
            println!(
                "Website was successfully generated to the file {}.",
                report.output_path
            );
        }
        Err(e) => {
            tracing::error!("Generation failed: {} (Category: {:?})", e, e.category());
            tracing::error!("Suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
