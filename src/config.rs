//! Configuration management for foster-plea
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//!
//! Configuration only locates the pipeline's collaborators (the intake
//! workbook, the email template and the drafts directory). The plea
//! scenario itself is fixed, see [`crate::scenario`].

use crate::error::{FosterPleaError, Result};
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for foster-plea
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Intake workbook location
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Email template override
    #[serde(default)]
    pub template: TemplateConfig,
    /// Draft output settings
    #[serde(default)]
    pub drafts: DraftsConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Intake workbook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Path to the workbook (xlsx, xls or ods)
    #[serde(default = "default_sheet_path")]
    pub path: String,

    /// Worksheet to read; the first worksheet when unset
    #[serde(default)]
    pub name: Option<String>,
}

fn default_sheet_path() -> String {
    "plea.xlsx".to_string()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            path: default_sheet_path(),
            name: None,
        }
    }
}

/// Email template configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Handlebars file replacing the built-in email template
    #[serde(default)]
    pub path: Option<String>,
}

/// Draft output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftsConfig {
    /// Directory `.eml` drafts are written to
    #[serde(default = "default_drafts_dir")]
    pub dir: String,

    /// Sender recorded on drafts, e.g. `Foster Team <fosters@example.org>`
    #[serde(default)]
    pub from: Option<String>,
}

fn default_drafts_dir() -> String {
    "drafts".to_string()
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            dir: default_drafts_dir(),
            from: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error; defaults are used instead.
    /// Environment variables (`FOSTER_PLEA_*`) override the file, and CLI
    /// flags override both.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed command line, for `--sheet` and `--drafts-dir`
    ///
    /// # Returns
    ///
    /// Returns the merged configuration. It is not validated yet; call
    /// [`Config::validate`] before use.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FosterPleaError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| FosterPleaError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(path) = std::env::var("FOSTER_PLEA_SHEET") {
            self.sheet.path = path;
        }

        if let Ok(name) = std::env::var("FOSTER_PLEA_SHEET_NAME") {
            self.sheet.name = Some(name);
        }

        if let Ok(path) = std::env::var("FOSTER_PLEA_TEMPLATE") {
            self.template.path = Some(path);
        }

        if let Ok(dir) = std::env::var("FOSTER_PLEA_DRAFTS_DIR") {
            self.drafts.dir = dir;
        }

        if let Ok(from) = std::env::var("FOSTER_PLEA_FROM") {
            self.drafts.from = Some(from);
        }

        if let Ok(json) = std::env::var("FOSTER_PLEA_JSON_LOGS") {
            if let Ok(parsed) = json.parse::<bool>() {
                self.logging.json = parsed;
            } else {
                tracing::warn!("Ignoring invalid FOSTER_PLEA_JSON_LOGS value: {}", json);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(sheet) = cli.command.sheet() {
            tracing::debug!("Using sheet override from CLI: {}", sheet.display());
            self.sheet.path = sheet.to_string_lossy().to_string();
        }

        if let Some(dir) = cli.command.drafts_dir() {
            tracing::debug!("Using drafts directory override from CLI: {}", dir.display());
            self.drafts.dir = dir.to_string_lossy().to_string();
        }
    }

    /// Sender mailbox, when one is configured
    ///
    /// # Errors
    ///
    /// Returns error if `drafts.from` is not a valid mailbox
    pub fn from_mailbox(&self) -> Result<Option<Mailbox>> {
        match &self.drafts.from {
            Some(from) => from.parse::<Mailbox>().map(Some).map_err(|e| {
                FosterPleaError::Config(format!("drafts.from is not a valid mailbox: {}", e))
                    .into()
            }),
            None => Ok(None),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.sheet.path.trim().is_empty() {
            return Err(FosterPleaError::Config("sheet.path cannot be empty".to_string()).into());
        }

        if matches!(&self.sheet.name, Some(name) if name.is_empty()) {
            return Err(
                FosterPleaError::Config("sheet.name cannot be empty when set".to_string()).into(),
            );
        }

        if matches!(&self.template.path, Some(path) if path.trim().is_empty()) {
            return Err(FosterPleaError::Config(
                "template.path cannot be empty when set".to_string(),
            )
            .into());
        }

        if self.drafts.dir.trim().is_empty() {
            return Err(FosterPleaError::Config("drafts.dir cannot be empty".to_string()).into());
        }

        self.from_mailbox()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::test_utils::{create_test_file, temp_dir};
    use serial_test::serial;
    use std::path::PathBuf;

    fn clear_env() {
        for var in [
            "FOSTER_PLEA_SHEET",
            "FOSTER_PLEA_SHEET_NAME",
            "FOSTER_PLEA_TEMPLATE",
            "FOSTER_PLEA_DRAFTS_DIR",
            "FOSTER_PLEA_FROM",
            "FOSTER_PLEA_JSON_LOGS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sheet.path, "plea.xlsx");
        assert_eq!(config.sheet.name, None);
        assert_eq!(config.template.path, None);
        assert_eq!(config.drafts.dir, "drafts");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
sheet:
  path: intake/kittens.xlsx
  name: Kittens
template:
  path: templates/custom.hbs
drafts:
  dir: out/drafts
  from: "Foster Team <fosters@example.org>"
logging:
  json: true
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sheet.path, "intake/kittens.xlsx");
        assert_eq!(config.sheet.name.as_deref(), Some("Kittens"));
        assert_eq!(config.template.path.as_deref(), Some("templates/custom.hbs"));
        assert_eq!(config.drafts.dir, "out/drafts");
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.from_mailbox().unwrap().unwrap().email.to_string(),
            "fosters@example.org"
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("drafts:\n  dir: elsewhere\n").unwrap();
        assert_eq!(config.sheet.path, "plea.xlsx");
        assert_eq!(config.drafts.dir, "elsewhere");
        assert_eq!(config.drafts.from, None);
    }

    #[test]
    fn test_validation_empty_sheet_path() {
        let mut config = Config::default();
        config.sheet.path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_sheet_name() {
        let mut config = Config::default();
        config.sheet.name = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_template_path() {
        let mut config = Config::default();
        config.template.path = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_drafts_dir() {
        let mut config = Config::default();
        config.drafts.dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_from() {
        let mut config = Config::default();
        config.drafts.from = Some("not a mailbox".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drafts.from"));
    }

    #[test]
    #[serial]
    fn test_load_nonexistent_file_uses_defaults() {
        clear_env();
        let cli = Cli::default();
        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        assert_eq!(config.sheet.path, "plea.xlsx");
        assert_eq!(config.drafts.dir, "drafts");
    }

    #[test]
    #[serial]
    fn test_load_invalid_yaml_fails() {
        clear_env();
        let dir = temp_dir();
        let path = create_test_file(&dir, "config.yaml", "sheet: [unterminated");
        let err = Config::load(path.to_str().unwrap(), &Cli::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    #[serial]
    fn test_env_vars_override_file() {
        clear_env();
        let dir = temp_dir();
        let path = create_test_file(&dir, "config.yaml", "sheet:\n  path: from-file.xlsx\n");

        std::env::set_var("FOSTER_PLEA_SHEET", "from-env.xlsx");
        std::env::set_var("FOSTER_PLEA_SHEET_NAME", "Intake");
        std::env::set_var("FOSTER_PLEA_DRAFTS_DIR", "env-drafts");
        std::env::set_var("FOSTER_PLEA_FROM", "fosters@example.org");
        std::env::set_var("FOSTER_PLEA_JSON_LOGS", "true");

        let config = Config::load(path.to_str().unwrap(), &Cli::default()).unwrap();
        clear_env();

        assert_eq!(config.sheet.path, "from-env.xlsx");
        assert_eq!(config.sheet.name.as_deref(), Some("Intake"));
        assert_eq!(config.drafts.dir, "env-drafts");
        assert_eq!(config.drafts.from.as_deref(), Some("fosters@example.org"));
        assert!(config.logging.json);
    }

    #[test]
    #[serial]
    fn test_invalid_json_logs_env_is_ignored() {
        clear_env();
        std::env::set_var("FOSTER_PLEA_JSON_LOGS", "sometimes");
        let config = Config::load("/nonexistent/config.yaml", &Cli::default()).unwrap();
        clear_env();
        assert!(!config.logging.json);
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        std::env::set_var("FOSTER_PLEA_SHEET", "from-env.xlsx");

        let mut cli = Cli::default();
        cli.command = Commands::Draft {
            sheet: Some(PathBuf::from("from-cli.xlsx")),
            drafts_dir: Some(PathBuf::from("cli-drafts")),
        };

        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        clear_env();

        assert_eq!(config.sheet.path, "from-cli.xlsx");
        assert_eq!(config.drafts.dir, "cli-drafts");
    }
}
