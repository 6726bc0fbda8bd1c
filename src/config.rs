//! Run configuration: which file to back up and what the footer points at.
//!
//! Values are resolved in this order, first match wins:
//! 1. `--source` on the command line
//! 2. `TABPREP_SOURCE` in the environment
//! 3. a JSON config file (`--config` / `TABPREP_CONFIG`)
//! 4. the built-in defaults below
//!
//! Steps 1 and 2 are merged by clap before [`Config::resolve`] sees them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::backup::BackupMode;
use crate::error::TabprepError;

/// Invoice create page of the revenue management frontend.
pub const DEFAULT_SOURCE: &str = r"d:\personal\revenue-management-system\frontend\src\app\(private)\shopkeeper\invoices\create\page.tsx";

/// Document with the detailed code for each plan step.
pub const DEFAULT_IMPLEMENTATION_DOC: &str = "INVOICE_TAB_IMPLEMENTATION.md";

pub const SOURCE_ENV: &str = "TABPREP_SOURCE";
pub const CONFIG_ENV: &str = "TABPREP_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File to back up
    pub source: PathBuf,
    /// Named in the "next steps" footer
    pub implementation_doc: String,
    /// Set from `--dry-run`, never read from the file
    #[serde(skip)]
    pub mode: BackupMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            implementation_doc: DEFAULT_IMPLEMENTATION_DOC.to_string(),
            mode: BackupMode::Copy,
        }
    }
}

impl Config {
    /// Configuration backing up `source` with default everything else
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            anyhow::bail!("Source path must not be empty");
        }
        if self.source.file_name().is_none() {
            anyhow::bail!("Source path {:?} has no file name", self.source);
        }
        if self.implementation_doc.trim().is_empty() {
            anyhow::bail!("Implementation document name must not be empty");
        }
        Ok(())
    }

    /// Build the effective configuration from an optional file and an
    /// optional source override, then validate it.
    ///
    /// Any load or validation failure becomes [`TabprepError::Config`].
    pub fn resolve(
        source: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> crate::error::Result<Self> {
        Self::resolve_inner(source, config_file)
            .map_err(|e| TabprepError::config(format!("{e:#}")))
    }

    fn resolve_inner(source: Option<PathBuf>, config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(source) = source {
            debug!("Source overridden: {:?}", source);
            config.source = source;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(config.mode, BackupMode::Copy);
    }

    #[test]
    fn test_default_source_names_page() {
        assert!(DEFAULT_SOURCE.ends_with("page.tsx"));
    }

    #[test]
    fn test_empty_source_rejected() {
        let config = Config::with_source("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_doc_rejected() {
        let config = Config {
            implementation_doc: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tabprep.json");
        let config = Config {
            implementation_doc: "TABS.md".to_string(),
            ..Config::with_source("/srv/page.tsx")
        };

        config.save_to_file(&path).expect("save");
        let loaded = Config::load_from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tabprep.json");
        fs::write(&path, r#"{ "source": "/srv/page.tsx" }"#).expect("write");

        let loaded = Config::load_from_file(&path).expect("load");
        assert_eq!(loaded.source, PathBuf::from("/srv/page.tsx"));
        assert_eq!(loaded.implementation_doc, DEFAULT_IMPLEMENTATION_DOC);
    }

    #[test]
    fn test_resolve_override_beats_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tabprep.json");
        fs::write(&path, r#"{ "source": "/from/file.tsx" }"#).expect("write");

        let from_file = Config::resolve(None, Some(&path)).expect("resolve");
        assert_eq!(from_file.source, PathBuf::from("/from/file.tsx"));

        let overridden =
            Config::resolve(Some(PathBuf::from("/from/cli.tsx")), Some(&path)).expect("resolve");
        assert_eq!(overridden.source, PathBuf::from("/from/cli.tsx"));
    }

    #[test]
    fn test_resolve_without_inputs_is_default() {
        assert_eq!(Config::resolve(None, None).expect("resolve"), Config::default());
    }

    #[test]
    fn test_resolve_failures_are_config_errors() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tabprep.json");
        fs::write(&path, "{ broken").expect("write");

        let err = Config::resolve(None, Some(&path)).unwrap_err();
        assert!(matches!(err, TabprepError::Config(_)));
        assert!(err.to_string().contains("Failed to parse configuration JSON"));

        let err = Config::resolve(Some(PathBuf::new()), None).unwrap_err();
        assert!(matches!(err, TabprepError::Config(_)));

        let missing = dir.path().join("absent.json");
        let err = Config::resolve(None, Some(&missing)).unwrap_err();
        assert!(matches!(err, TabprepError::Config(_)));
    }

    #[test]
    fn test_invalid_json_fails() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tabprep.json");
        fs::write(&path, "not json").expect("write");
        assert!(Config::load_from_file(&path).is_err());
    }
}
