use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Case descriptions: `Case <n>` lines, each followed by a narrative line.
    #[serde(default = "PathsConfig::default_input")]
    pub input: PathBuf,
    #[serde(default = "PathsConfig::default_countries")]
    pub countries: PathBuf,
    #[serde(default = "PathsConfig::default_hospitals")]
    pub hospitals: PathBuf,
    #[serde(default = "PathsConfig::default_output_dir")]
    pub output_dir: PathBuf,
    /// File stem of the result table; the extension follows the format.
    #[serde(default = "PathsConfig::default_output_file")]
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            countries: Self::default_countries(),
            hospitals: Self::default_hospitals(),
            output_dir: Self::default_output_dir(),
            output_file: Self::default_output_file(),
        }
    }
}

impl PathsConfig {
    fn default_input() -> PathBuf {
        PathBuf::from("patients.txt")
    }

    fn default_countries() -> PathBuf {
        PathBuf::from("country_list.csv")
    }

    fn default_hospitals() -> PathBuf {
        PathBuf::from("hospital_list.csv")
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from("result")
    }

    fn default_output_file() -> String {
        "Patients_Table".to_string()
    }
}

/// Column headers of the reference CSV files.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    #[serde(default = "ReferenceConfig::default_country_column")]
    pub country_column: String,
    #[serde(default = "ReferenceConfig::default_hospital_column")]
    pub hospital_column: String,
    /// Optional column of `;`-separated adjectival forms in the country file.
    #[serde(default = "ReferenceConfig::default_demonym_column")]
    pub demonym_column: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            country_column: Self::default_country_column(),
            hospital_column: Self::default_hospital_column(),
            demonym_column: Self::default_demonym_column(),
        }
    }
}

impl ReferenceConfig {
    fn default_country_column() -> String {
        "Country".to_string()
    }

    fn default_hospital_column() -> String {
        "Hospital".to_string()
    }

    fn default_demonym_column() -> String {
        "Demonym".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("unknown output format: {s}")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Process narratives on the rayon pool instead of one by one.
    #[serde(default)]
    pub parallel: bool,
}

impl Config {
    /// `~/casetab/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("casetab"))
    }

    /// Loads the default config file, falling back to built-in defaults when
    /// it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads `path`, falling back to built-in defaults when it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            warn!(
                "Config file not found at {}, using defaults. Run 'casetab init' to create one.",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Full path of the result table.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.paths.output_dir.join(format!(
            "{}.{}",
            self.paths.output_file,
            self.output.format.extension()
        ))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Writes the default template to `~/casetab/config.json`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Writes the default template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point paths.input at the case description file");
        println!("   2. Point paths.countries / paths.hospitals at the reference CSV files");
        println!("   3. Run 'casetab extract' to build the result table");
        println!();
        println!("🔧 Configuration options:");
        println!("   - reference.*_column: header names in the reference CSV files");
        println!("   - output.format: csv or json");
        println!("   - output.parallel: process cases on all cores");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let config = Config::load_from(&dir.path().join("absent.json"));
        assert_eq!(config.ok(), Some(Config::default()));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "output": { "format": "json" } }"#).expect("write config");

        let config = Config::load_from(&path).expect("config should load");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.parallel);
        assert_eq!(config.paths.input, PathBuf::from("patients.txt"));
        assert_eq!(config.reference.country_column, "Country");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write config");

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_round_trips_and_is_not_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.json");

        Config::write_template(&path).expect("template should be written");
        let loaded = Config::load_from(&path).expect("template should load");
        assert_eq!(loaded, Config::default());

        assert!(Config::write_template(&path).is_err());
    }

    #[test]
    fn output_path_uses_format_extension() {
        let mut config = Config::default();
        assert_eq!(config.output_path(), PathBuf::from("result/Patients_Table.csv"));
        config.output.format = OutputFormat::Json;
        assert_eq!(config.output_path(), PathBuf::from("result/Patients_Table.json"));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
