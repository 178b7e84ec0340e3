use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "renobook.config.json";

/// RenoBook configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted content snapshot
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Directory the built page is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_content_dir() -> String {
    ".renobook".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
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
            Ok(Config::default())
        }
    }

    /// Get absolute path to the content snapshot directory
    pub fn get_content_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.content_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            out_dir: default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "contentDir": "content",
            "outDir": "public"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.out_dir, "public");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.content_dir, ".renobook");
        assert_eq!(config.out_dir, "dist");
    }
}
