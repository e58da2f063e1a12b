use std::path::PathBuf;

use anyhow::Context;
use casetab_config::{Config, OutputFormat};
use casetab_core::{Assembler, ResultTable};
use casetab_nlp::RuleLinguistics;
use tracing::info;

/// Input for the extract command. `None` fields keep the configured value.
#[derive(Debug, Clone, Default)]
pub struct ExtractInput {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub countries: Option<PathBuf>,
    pub hospitals: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub parallel: bool,
}

impl ExtractInput {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.paths.input = input;
        }
        if let Some(countries) = self.countries {
            config.paths.countries = countries;
        }
        if let Some(hospitals) = self.hospitals {
            config.paths.hospitals = hospitals;
        }
        if let Some(output_dir) = self.output_dir {
            config.paths.output_dir = output_dir;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.output.parallel |= self.parallel;
        config
    }
}

/// Reads the case file, extracts one record per case and writes the table.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl ExtractStrategy {
    fn run(config: &Config) -> anyhow::Result<ResultTable> {
        let lookups = casetab_io::load_lookups(
            &config.paths.countries,
            &config.paths.hospitals,
            &config.reference,
        )
        .context("Failed to load reference lists")?;

        let pairs = casetab_io::read_case_pairs(&config.paths.input)
            .context("Failed to read case descriptions")?;

        let service = RuleLinguistics::new();
        let assembler = Assembler::new(&service, &lookups);
        let table = if config.output.parallel {
            assembler.run_parallel(&pairs)
        } else {
            assembler.run(&pairs)
        }
        .context("Extraction failed")?;

        let output_path = config.output_path();
        casetab_io::write_table(&table, &output_path, config.output.format)
            .context("Failed to write result table")?;
        Ok(table)
    }
}

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = input.config.clone();
        let config = input.apply(super::load_config(config_path.as_deref())?);
        info!(
            "Extracting from {} (parallel: {})",
            config.paths.input.display(),
            config.output.parallel
        );

        let table = Self::run(&config)?;
        println!(
            "Extracted {} cases into {}",
            table.len(),
            config.output_path().display()
        );
        Ok(())
    }
}
