use mailgrid_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mailgrid.config.json";

/// Mailgrid configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// HTML output options (`pretty`, `indent`, `title`)
    #[serde(flatten)]
    pub compile: CompileOptions,

    /// Optional output directory for compiled HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute output directory, if one is configured
    pub fn get_out_dir(&self, cwd: &str) -> Option<PathBuf> {
        self.out_dir.as_ref().map(|dir| PathBuf::from(cwd).join(dir))
    }
}
