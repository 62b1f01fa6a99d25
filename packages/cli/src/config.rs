use roadmap_dashboard::RenderConfig;
use roadmap_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "roadmap.config.json";

/// Roadmap configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// File extensions picked up when linting a directory
    pub extensions: Vec<String>,

    /// Width limits for render URLs (`minWidth`, `maxWidth`)
    #[serde(flatten)]
    pub render: RenderConfig,

    pub editor: EditorConfig,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = Self::config_path(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Whether a file should be linted when walking a directory
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }

    pub fn config_path(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "roadmap".to_string()],
            render: RenderConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}
