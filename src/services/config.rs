use crate::domain::constants::{API_KEY_ENV, LABEL_MODEL_FALLBACK};
use crate::services::scoring::ScoringTables;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub scoring: ScoringTables,
    #[serde(default)]
    pub label: LabelConfig,
}

#[derive(Debug, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: default_models(),
            timeout_ms: default_timeout_ms(),
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl LabelConfig {
    /// Config key wins over the environment. A missing credential selects
    /// the mock strategy; it is not an error.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(k) = &self.api_key {
            if !k.trim().is_empty() {
                return Some(k.clone());
            }
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

fn default_models() -> Vec<String> {
    LABEL_MODEL_FALLBACK.iter().map(|m| m.to_string()).collect()
}

fn default_timeout_ms() -> u64 {
    8000
}

fn default_mock_delay_ms() -> u64 {
    1500
}

fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/unstitched/config.toml"))
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(AppConfig::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("empty config parses");
        assert!(cfg.scoring.brand_adjustment);
        assert_eq!(cfg.label.models.len(), LABEL_MODEL_FALLBACK.len());
        assert_eq!(cfg.label.mock_delay_ms, 1500);
    }

    #[test]
    fn partial_sections_keep_unlisted_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
[scoring]
brand_adjustment = false
high_risk_origins = ["narnia"]

[label]
mock_delay_ms = 0
"#,
        )
        .expect("partial config parses");
        assert!(!cfg.scoring.brand_adjustment);
        assert_eq!(cfg.scoring.high_risk_origins, vec!["narnia"]);
        // untouched table keeps its default entries
        assert!(cfg
            .scoring
            .synthetic_materials
            .iter()
            .any(|m| m == "polyester"));
        assert_eq!(cfg.label.timeout_ms, 8000);
        assert_eq!(cfg.label.mock_delay_ms, 0);
    }
}
