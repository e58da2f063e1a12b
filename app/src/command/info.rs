use std::path::{Path, PathBuf};

use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Prints the configured paths, reference columns and output settings, and
/// checks that the input and reference files can be read.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(config_path.as_deref())?;

        println!("=== casetab Configuration ===\n");

        println!("Paths:");
        println!("  Input: {}", describe_file(&config.paths.input));
        println!("  Countries: {}", describe_file(&config.paths.countries));
        println!("  Hospitals: {}", describe_file(&config.paths.hospitals));
        println!("  Output: {}", config.output_path().display());
        println!();

        println!("Reference Columns:");
        println!("  Country: {}", config.reference.country_column);
        println!("  Demonym: {}", config.reference.demonym_column);
        println!("  Hospital: {}", config.reference.hospital_column);
        println!();

        info!("Loading reference lists");
        match casetab_io::load_lookups(
            &config.paths.countries,
            &config.paths.hospitals,
            &config.reference,
        ) {
            Ok(lookups) => {
                println!("Reference Lists:");
                println!("  Countries: {}", lookups.countries.len());
                println!("  Hospitals: {}", lookups.hospitals.len());
            }
            Err(e) => {
                println!("Reference Lists: failed to load");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Output:");
        println!("  Format: {}", config.output.format);
        println!("  Parallel: {}", config.output.parallel);

        Ok(())
    }
}

fn describe_file(path: &Path) -> String {
    let status = if path.is_file() { "found" } else { "missing" };
    format!("{} ({status})", path.display())
}
