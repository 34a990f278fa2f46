//! Inkdown Config
//!
//! Loads and manages the TOML configuration for inkdown.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/inkdown/config.toml`
//! - macOS: `~/Library/Application Support/inkdown/config.toml`
//! - Windows: `%APPDATA%\inkdown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use inkdown_config::Config;
//!
//! let config = Config::load().unwrap();
//!
//! // Or with an override file or inline TOML
//! let config = Config::load_with_override(Some("[features]\nTables = false")).unwrap();
//! let options = config.options();
//! ```

mod features;
mod render;

pub use features::FeaturesConfig;
pub use render::RenderConfig;

use inkdown_core::{InkdownError, Options, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Tables       = true
IndentedCode = true

[render]
LanguageClass = true
MaxDepth      = 16
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Optional constructs
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output shaping
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// ```
    /// use inkdown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[render]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "inkdown")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| InkdownError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse a TOML string.
    ///
    /// ```
    /// use inkdown_config::Config;
    /// let config = Config::parse("[render]\nMaxDepth = 3").unwrap();
    /// assert_eq!(config.render.max_depth, 3);
    /// assert!(config.features.tables);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| InkdownError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// The base config comes from the default location. If
    /// `override_config` names an existing file it is read; otherwise it
    /// is parsed as TOML itself. The override is then merged on top.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.merge(&Self::load_override(override_str)?);
        }
        Ok(config)
    }

    /// Read an override given as a file path or inline TOML.
    pub fn load_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| InkdownError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Every field is copied from `other`. A key missing from an override
    /// file has already taken its default value while parsing, so it
    /// resets whatever `self` held: merging `[render]\nMaxDepth = 8` over
    /// a base with `Tables = false` turns tables back on.
    ///
    /// ```
    /// use inkdown_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [features]
    ///     Tables = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.tables);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.render.merge(&other.render);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| InkdownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Converter options described by this config.
    pub fn options(&self) -> Options {
        Options {
            tables: self.features.tables,
            indented_code: self.features.indented_code,
            language_class: self.render.language_class,
            max_depth: self.render.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.tables);
        assert!(config.features.indented_code);
        assert!(config.render.language_class);
        assert_eq!(config.render.max_depth, 16);
    }

    #[test]
    fn test_default_matches_options() {
        assert_eq!(Config::default().options(), Options::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_toml = r#"
            [features]
            IndentedCode = false
            [render]
            MaxDepth = 4
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.features.indented_code);
        assert!(base.features.tables);
        assert_eq!(base.render.max_depth, 4);
    }

    #[test]
    fn test_merge_resets_omitted_keys() {
        let mut base = Config::parse("[features]\nTables = false").unwrap();
        base.merge(&Config::parse("[render]\nMaxDepth = 8").unwrap());
        assert!(base.features.tables);
        assert_eq!(base.render.max_depth, 8);
    }

    #[test]
    fn test_options() {
        let config = Config::parse("[features]\nTables = false\n[render]\nLanguageClass = false").unwrap();
        let options = config.options();
        assert!(!options.tables);
        assert!(options.indented_code);
        assert!(!options.language_class);
        assert_eq!(options.max_depth, 16);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[features]\nTables = \"maybe\"").unwrap_err();
        assert!(matches!(err, InkdownError::Config(_)));
    }

    #[test]
    fn test_inline_override() {
        let config = Config::load_override("[render]\nMaxDepth = 2").unwrap();
        assert_eq!(config.render.max_depth, 2);
        assert!(Config::load_override("not = [valid").is_err());
    }

    #[test]
    fn test_file_override_and_save() {
        let path = std::env::temp_dir().join(format!("inkdown-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.features.tables = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let overridden = Config::load_override(&path.to_string_lossy()).unwrap();
        assert!(!overridden.features.tables);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("inkdown"));
        }
    }
}
