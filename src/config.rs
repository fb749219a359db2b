use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::case::Converter;
use crate::models::CaseStyle;
use crate::tokenizer::TokenizerOptions;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "recase.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub styles: StylesConfig,
}

/// What to convert to and how to read input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Target case style
    #[serde(default)]
    pub style: CaseStyle,
    /// How each input line is interpreted
    #[serde(default)]
    pub input: InputFormat,
}

/// Input line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Every line is text
    #[default]
    Text,
    /// Every line is a JSON value that must be a string
    Json,
}

/// Per-style tokenizer overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StylesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kebab: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camel: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot: Option<StyleOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snake: Option<StyleOverride>,
}

/// Fields left unset keep the style's built-in value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separators: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_case_transitions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_letter_digit: Option<bool>,
}

impl StyleOverride {
    /// Apply the override on top of `base`
    pub fn apply(&self, base: TokenizerOptions) -> TokenizerOptions {
        TokenizerOptions {
            separators: self.separators.clone().unwrap_or(base.separators),
            split_case_transitions: self
                .split_case_transitions
                .unwrap_or(base.split_case_transitions),
            split_letter_digit: self.split_letter_digit.unwrap_or(base.split_letter_digit),
        }
    }
}

impl StylesConfig {
    pub fn get(&self, style: CaseStyle) -> Option<&StyleOverride> {
        match style {
            CaseStyle::Kebab => self.kebab.as_ref(),
            CaseStyle::Camel => self.camel.as_ref(),
            CaseStyle::Dot => self.dot.as_ref(),
            CaseStyle::Snake => self.snake.as_ref(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` if given, otherwise `recase.toml` from the working directory
    /// when it exists, otherwise the defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        Self::resolve_in(Path::new("."), path)
    }

    /// Like [`Config::resolve`], looking for the fallback file in `base_dir`
    pub fn resolve_in(base_dir: &Path, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = base_dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    debug!("Using config file {}", fallback.display());
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line flags, which take precedence over the file
    pub fn apply_cli(&mut self, style: Option<CaseStyle>, json: bool) {
        if let Some(style) = style {
            self.convert.style = style;
        }
        if json {
            self.convert.input = InputFormat::Json;
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        for style in CaseStyle::ALL {
            let Some(separators) = self.styles.get(style).and_then(|o| o.separators.as_ref())
            else {
                continue;
            };

            if let Some(c) = separators.chars().find(|c| c.is_alphanumeric()) {
                anyhow::bail!(
                    "Separators for {} must not contain letters or digits, found '{}'",
                    style,
                    c
                );
            }
        }

        Ok(())
    }

    /// Build a converter with this configuration's overrides applied
    pub fn converter(&self) -> Converter {
        CaseStyle::ALL
            .into_iter()
            .fold(Converter::new(), |converter, style| match self.styles.get(style) {
                Some(overrides) => {
                    let options = overrides.apply(style.tokenizer_options());
                    converter.with_options(style, options)
                }
                None => converter,
            })
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            convert: ConvertConfig {
                style: CaseStyle::Kebab,
                input: InputFormat::Text,
            },
            styles: StylesConfig::default(),
        }
    }

    /// Write the default configuration to `path`, refusing to replace an
    /// existing file unless `force` is set
    pub fn init_file(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            anyhow::bail!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }

        let config = Self::default_config();
        config.save(path)?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
