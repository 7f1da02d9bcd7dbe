//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/larder/larder.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `LARDER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for larder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Stock file used when a command is given none (default: ~/.larder/stock.toml)
    pub stock_file: PathBuf,
    /// Print retail minus wholesale alongside totals
    pub show_margin: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stock_file: default_stock_file(),
            show_margin: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub stock_file: Option<PathBuf>,
    pub show_margin: Option<bool>,
}

/// Get the default stock file (~/.larder/stock.toml).
fn default_stock_file() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".larder").join("stock.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.larder/stock.toml"))
}

/// Get the XDG config directory for larder.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "larder").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("larder.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
///
/// Returns the input unchanged if a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.stock_file.to_string_lossy().as_ref());
        self.stock_file = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            stock_file: overlay
                .stock_file
                .clone()
                .unwrap_or_else(|| self.stock_file.clone()),
            show_margin: overlay.show_margin.unwrap_or(self.show_margin),
        }
    }

    /// Load settings with layered precedence from the real environment.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(
            global_config_path().as_deref(),
            config_file,
            larder_env(),
        )
    }

    /// Load settings from explicit layers.
    ///
    /// `global` is skipped when absent on disk; `config_file` must exist.
    /// `env` supplies the `LARDER_*` overrides, which win over both files.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current, env)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply LARDER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("stock_file") {
            settings.stock_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("show_margin") {
            settings.show_margin = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# larder configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/larder/larder.toml
#   File:   larder --config <file>
#   Env:    LARDER_* environment variables

# Stock file used when a command is given none
# stock_file = "~/.larder/stock.toml"

# Print retail minus wholesale alongside totals
# show_margin = true
"#
        .to_string()
    }
}

/// `LARDER_STOCK_FILE` style variables; `__` separates nested keys.
fn larder_env() -> Environment {
    Environment::with_prefix("LARDER")
        .prefix_separator("_")
        .separator("__")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `LARDER_*` environment built from pairs, ignoring the real process env.
    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        larder_env().source(Some(map))
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, None, fake_env(&[])).expect("load defaults");
        assert_eq!(settings, {
            let mut defaults = Settings::default();
            defaults.expand_paths();
            defaults
        });
        assert!(settings.stock_file.ends_with(".larder/stock.toml"));
        assert!(settings.show_margin);
    }

    #[test]
    fn given_larder_env_vars_when_loading_then_override_defaults() {
        let env = fake_env(&[
            ("LARDER_STOCK_FILE", "/srv/env-stock.toml"),
            ("LARDER_SHOW_MARGIN", "false"),
        ]);

        let settings = Settings::load_layers(None, None, env).expect("load");

        assert_eq!(settings.stock_file, PathBuf::from("/srv/env-stock.toml"));
        assert!(!settings.show_margin);
    }

    #[test]
    fn given_absent_global_file_when_loading_then_skipped() {
        let settings = Settings::load_layers(
            Some(Path::new("/nonexistent/larder/larder.toml")),
            None,
            fake_env(&[]),
        )
        .expect("load");
        assert!(settings.show_margin);
    }

    #[test]
    fn given_tilde_in_stock_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            stock_file: PathBuf::from("~/cafe/stock.toml"),
            show_margin: false,
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.stock_file.to_string_lossy();
        assert!(path.starts_with(&home), "should start with home dir: {}", path);
        assert!(!path.contains('~'), "should not contain tilde: {}", path);
    }

    #[test]
    fn given_overlay_with_one_field_when_merging_then_keeps_other() {
        let base = Settings {
            stock_file: PathBuf::from("/base.toml"),
            show_margin: true,
        };
        let overlay = RawSettings {
            stock_file: None,
            show_margin: Some(false),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.stock_file, PathBuf::from("/base.toml"));
        assert!(!merged.show_margin);
    }

    #[test]
    fn given_settings_when_to_toml_then_round_trips_through_raw() {
        let settings = Settings {
            stock_file: PathBuf::from("/srv/stock.toml"),
            show_margin: false,
        };
        let raw: RawSettings = toml::from_str(&settings.to_toml().unwrap()).unwrap();
        assert_eq!(raw.stock_file, Some(PathBuf::from("/srv/stock.toml")));
        assert_eq!(raw.show_margin, Some(false));
    }

    #[test]
    fn given_template_when_parsed_then_all_commented_out() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.stock_file.is_none());
        assert!(raw.show_margin.is_none());
    }
}
