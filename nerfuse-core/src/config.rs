//! Fusion configuration and the TOML settings file it can be loaded from

use crate::error::ConfigError;
use crate::parser::InputFormat;
use crate::splitters::HeuristicSplitters;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Label for monetary amounts, ignored by default
pub const MONEY_LABEL: &str = "MONEY";

/// Immutable configuration handed to the fusion engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionConfig {
    ignore_labels: BTreeSet<String>,
    splitters: HeuristicSplitters,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            ignore_labels: BTreeSet::from([MONEY_LABEL.to_string()]),
            splitters: HeuristicSplitters::default(),
        }
    }
}

impl FusionConfig {
    /// Create a builder seeded with the default ignore-set
    pub fn builder() -> FusionConfigBuilder {
        FusionConfigBuilder::default()
    }

    /// Whether runs with this label stay unfused
    pub fn is_ignored(&self, label: &str) -> bool {
        self.ignore_labels.contains(label)
    }

    /// Labels exempt from fusion
    pub fn ignore_labels(&self) -> impl Iterator<Item = &str> {
        self.ignore_labels.iter().map(String::as_str)
    }

    /// Heuristic splitter set
    pub fn splitters(&self) -> &HeuristicSplitters {
        &self.splitters
    }
}

/// Builder for [`FusionConfig`]
#[derive(Debug)]
pub struct FusionConfigBuilder {
    ignore_labels: Vec<String>,
    known_verbs: Vec<String>,
    known_verbs_file: Option<PathBuf>,
}

impl Default for FusionConfigBuilder {
    fn default() -> Self {
        Self {
            ignore_labels: vec![MONEY_LABEL.to_string()],
            known_verbs: Vec::new(),
            known_verbs_file: None,
        }
    }
}

impl FusionConfigBuilder {
    /// Add a label to the ignore-set
    pub fn ignore_label(mut self, label: impl Into<String>) -> Self {
        self.ignore_labels.push(label.into());
        self
    }

    /// Add several labels to the ignore-set
    pub fn ignore_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Drop every ignore label added so far, including the default
    pub fn clear_ignore_labels(mut self) -> Self {
        self.ignore_labels.clear();
        self
    }

    /// Add known verbs directly
    pub fn known_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_verbs.extend(verbs.into_iter().map(Into::into));
        self
    }

    /// Read additional known verbs from a file when building
    pub fn known_verbs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.known_verbs_file = Some(path.into());
        self
    }

    /// Build the configuration, reading the known-verbs file if one was given
    pub fn build(self) -> Result<FusionConfig, ConfigError> {
        let mut ignore_labels = BTreeSet::new();
        for label in self.ignore_labels {
            let trimmed = label.trim();
            if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidLabel(label));
            }
            ignore_labels.insert(trimmed.to_string());
        }

        let mut verbs = self.known_verbs;
        if let Some(path) = &self.known_verbs_file {
            let from_file = HeuristicSplitters::from_file(path)?;
            verbs.extend(from_file.known_verbs().map(str::to_string));
        }

        Ok(FusionConfig {
            ignore_labels,
            splitters: HeuristicSplitters::from_known_verbs(verbs),
        })
    }
}

/// Contents of a settings file
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Fusion behavior
    #[serde(default)]
    pub fusion: FusionSettings,

    /// Heuristic splitter inputs
    #[serde(default)]
    pub heuristics: HeuristicSettings,
}

/// `[fusion]` section
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FusionSettings {
    /// Labels exempt from fusion
    #[serde(default = "default_ignore_labels")]
    pub ignore_labels: Vec<String>,

    /// Annotation convention of the input
    #[serde(default)]
    pub input_format: InputFormat,
}

fn default_ignore_labels() -> Vec<String> {
    vec![MONEY_LABEL.to_string()]
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            ignore_labels: default_ignore_labels(),
            input_format: InputFormat::default(),
        }
    }
}

/// `[heuristics]` section
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeuristicSettings {
    /// Newline-separated known verbs file
    pub known_verbs: Option<PathBuf>,
}

impl Settings {
    /// Read and parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content, path)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings text; `origin` is only used in error messages
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::SettingsFormat {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Builder reflecting these settings; callers may layer overrides on top
    pub fn to_builder(&self) -> FusionConfigBuilder {
        let mut builder = FusionConfig::builder()
            .clear_ignore_labels()
            .ignore_labels(self.fusion.ignore_labels.iter().cloned());
        if let Some(path) = &self.heuristics.known_verbs {
            builder = builder.known_verbs_file(path);
        }
        builder
    }
}
