use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tonepotrc.json";

/// Gettext-style marker functions recognized by the extractor: plain
/// return, echoing, and the HTML/attribute-escaping variants of both.
pub const MARKER_FUNCTIONS: &[&str] = &[
    "__",
    "_e",
    "esc_html__",
    "esc_html_e",
    "esc_attr__",
    "esc_attr_e",
];

/// Only files with this suffix are scanned.
pub const SOURCE_EXTENSION: &str = ".php";

/// The built-in dictionary is English→French, so the produced catalog
/// is always this locale.
pub const TARGET_LOCALE: &str = "fr_FR";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_languages_dir")]
    pub languages_dir: String,
    #[serde(default = "default_text_domain")]
    pub text_domain: String,
    /// Directory names pruned from the walk by exact match at any depth.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Value of the POT header's Project-Id-Version field.
    #[serde(default = "default_project_id")]
    pub project_id: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_languages_dir() -> String {
    "languages".to_string()
}

fn default_text_domain() -> String {
    "tonepress-ai".to_string()
}

fn default_ignores() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

fn default_project_id() -> String {
    "TonePress AI 2.1.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            languages_dir: default_languages_dir(),
            text_domain: default_text_domain(),
            ignores: default_ignores(),
            project_id: default_project_id(),
        }
    }
}

impl Config {
    /// Path of the POT template the extractor writes.
    pub fn pot_path(&self) -> PathBuf {
        Path::new(&self.languages_dir).join(format!("{}.pot", self.text_domain))
    }

    /// Path of the locale-specific PO catalog the applier writes.
    pub fn po_path(&self) -> PathBuf {
        Path::new(&self.languages_dir).join(format!("{}-{}.po", self.text_domain, TARGET_LOCALE))
    }

    /// Path of the compiled binary catalog.
    pub fn mo_path(&self) -> PathBuf {
        Path::new(&self.languages_dir).join(format!("{}-{}.mo", self.text_domain, TARGET_LOCALE))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Load `.tonepotrc.json` from the working directory, falling back to the
/// built-in defaults when the file does not exist. A file that exists but
/// does not parse is an error.
pub fn load_config(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    Ok(config)
}
