//! Configuration management for mindweave
//!
//! Every pipeline threshold ships with the tuned default baked in; a TOML
//! file can override them without recompiling, and the validator rejects
//! values the algorithms were never tuned for.

use crate::error::{MindweaveError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod validator;

pub use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MindMapConfig {
    pub extraction: ExtractionConfig,
    pub clustering: ClusteringConfig,
    pub hierarchy: HierarchyConfig,
    pub layout: LayoutConfig,
}

/// Keyword and keyphrase extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of top TF-IDF terms kept
    pub max_keywords: usize,
    /// Number of top scored phrases kept
    pub max_keyphrases: usize,
}

/// Concept clustering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Sentence co-occurrence ratio above which two keywords fuse
    pub cooccurrence_threshold: f32,
    /// Jaccard similarity above which a small cluster is absorbed
    pub merge_threshold: f32,
}

/// Hierarchy shape settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Cap on level-1 concept nodes
    pub max_main_nodes: usize,
    /// Cap on level-2 concept nodes
    pub max_sub_nodes: usize,
}

/// Layout geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Circle radius for main nodes around the root
    pub main_radius: f32,
    /// Circle radius for sub-nodes around their parent
    pub sub_radius: f32,
    /// Seed for the fallback-position jitter
    pub seed: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_keywords: 30,
            max_keyphrases: 20,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            cooccurrence_threshold: 0.3,
            merge_threshold: 0.2,
        }
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_main_nodes: 8,
            max_sub_nodes: 7,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            main_radius: 200.0,
            sub_radius: 150.0,
            seed: 0,
        }
    }
}

impl Default for MindMapConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            clustering: ClusteringConfig::default(),
            hierarchy: HierarchyConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl MindMapConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MindweaveError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| MindweaveError::Io {
            source: e,
            context: format!("Failed to read config file: {:?}", path),
        })?;
        let config: MindMapConfig = toml::from_str(&content)?;

        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| MindweaveError::Io {
            source: e,
            context: format!("Failed to write config file: {:?}", path),
        })?;
        Ok(())
    }

    /// Default configuration file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MindweaveError::Config("Cannot determine config directory".to_string()))?;
        Ok(config_dir.join("mindweave").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_tuned_values() {
        let config = MindMapConfig::default();
        assert_eq!(config.extraction.max_keywords, 30);
        assert_eq!(config.extraction.max_keyphrases, 20);
        assert!((config.clustering.cooccurrence_threshold - 0.3).abs() < 1e-6);
        assert!((config.clustering.merge_threshold - 0.2).abs() < 1e-6);
        assert_eq!(config.hierarchy.max_main_nodes, 8);
        assert_eq!(config.hierarchy.max_sub_nodes, 7);
        assert_eq!(config.layout.main_radius, 200.0);
        assert_eq!(config.layout.sub_radius, 150.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let mut config = MindMapConfig::default();
        config.extraction.max_keywords = 12;
        config.layout.seed = 99;
        config.save(&path).unwrap();

        let loaded = MindMapConfig::load(&path).unwrap();
        assert_eq!(loaded.extraction.max_keywords, 12);
        assert_eq!(loaded.layout.seed, 99);
        assert_eq!(loaded.hierarchy.max_main_nodes, 8);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = MindMapConfig::load(&temp.path().join("absent.toml"));
        assert!(matches!(
            result,
            Err(MindweaveError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[extraction]\nmax_keywords = 10\n").unwrap();

        let config = MindMapConfig::load(&path).unwrap();
        assert_eq!(config.extraction.max_keywords, 10);
        assert_eq!(config.extraction.max_keyphrases, 20);
        assert_eq!(config.hierarchy.max_main_nodes, 8);
    }
}
