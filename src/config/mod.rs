mod file_config;

pub use file_config::{FileConfig, RecommenderConfig};

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Default number of most-recent likes fed to the taste aggregator.
pub const DEFAULT_LIKED_WINDOW: usize = 3;
/// Default number of neighbors requested from the similarity search.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub embeddings_path: Option<PathBuf>,
    pub db_dir: Option<PathBuf>,
    pub media_root: Option<PathBuf>,
    pub liked_window: usize,
    pub neighbor_count: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            embeddings_path: None,
            db_dir: None,
            media_root: None,
            liked_window: DEFAULT_LIKED_WINDOW,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
        }
    }
}

/// Tunables consumed by the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderSettings {
    pub liked_window: usize,
    pub neighbor_count: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            liked_window: DEFAULT_LIKED_WINDOW,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the offline-produced embeddings artifact.
    pub embeddings_path: PathBuf,
    /// Directory holding the interactions database; None disables the store.
    pub db_dir: Option<PathBuf>,
    /// Root directory of the audio files.
    pub media_root: PathBuf,
    pub recommender: RecommenderSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let embeddings_path = file
            .embeddings_path
            .map(PathBuf::from)
            .or_else(|| cli.embeddings_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("embeddings_path must be specified via CLI or in config file")
            })?;

        if !embeddings_path.is_file() {
            bail!("Embeddings artifact does not exist: {:?}", embeddings_path);
        }

        let db_dir = file.db_dir.map(PathBuf::from).or_else(|| cli.db_dir.clone());
        if let Some(dir) = &db_dir {
            if !dir.is_dir() {
                bail!("db_dir is not a directory: {:?}", dir);
            }
        }

        let media_root = file
            .media_root
            .map(PathBuf::from)
            .or_else(|| cli.media_root.clone())
            .unwrap_or_else(|| {
                embeddings_path
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."))
            });

        let rec = file.recommender.unwrap_or_default();
        let liked_window = rec.liked_window.unwrap_or(cli.liked_window);
        let neighbor_count = rec.neighbor_count.unwrap_or(cli.neighbor_count);
        if liked_window == 0 {
            bail!("liked_window must be at least 1");
        }
        if neighbor_count == 0 {
            bail!("neighbor_count must be at least 1");
        }

        Ok(Self {
            embeddings_path,
            db_dir,
            media_root,
            recommender: RecommenderSettings {
                liked_window,
                neighbor_count,
            },
        })
    }

    pub fn interactions_db_path(&self) -> Option<PathBuf> {
        self.db_dir.as_ref().map(|d| d.join("interactions.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_artifact_dir() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("embeddings.json");
        std::fs::write(&path, r#"{"tracks": []}"#).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_resolve_cli_only() {
        let (tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(artifact.clone()),
            db_dir: Some(tmp.path().to_path_buf()),
            media_root: Some(PathBuf::from("/media")),
            liked_window: 4,
            neighbor_count: 7,
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.embeddings_path, artifact);
        assert_eq!(config.db_dir, Some(tmp.path().to_path_buf()));
        assert_eq!(config.media_root, PathBuf::from("/media"));
        assert_eq!(config.recommender.liked_window, 4);
        assert_eq!(config.recommender.neighbor_count, 7);
    }

    #[test]
    fn test_resolve_defaults() {
        let (_tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(artifact.clone()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.recommender, RecommenderSettings::default());
        assert_eq!(config.recommender.liked_window, 3);
        assert_eq!(config.recommender.neighbor_count, 5);
        // media_root defaults to the artifact's directory
        assert_eq!(config.media_root, artifact.parent().unwrap());
        assert!(config.db_dir.is_none());
        assert!(config.interactions_db_path().is_none());
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let (tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(PathBuf::from("/should/be/overridden")),
            media_root: Some(PathBuf::from("/cli/media")),
            ..Default::default()
        };

        let file_config = FileConfig {
            embeddings_path: Some(artifact.to_string_lossy().to_string()),
            media_root: Some("/toml/media".to_string()),
            recommender: Some(RecommenderConfig {
                liked_window: Some(5),
                neighbor_count: None,
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(config.embeddings_path, artifact);
        assert_eq!(config.media_root, PathBuf::from("/toml/media"));
        assert_eq!(config.recommender.liked_window, 5);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.recommender.neighbor_count, 5);
        let _ = tmp;
    }

    #[test]
    fn test_resolve_missing_embeddings_path_error() {
        let cli = CliConfig::default();
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("embeddings_path must be specified"));
    }

    #[test]
    fn test_resolve_nonexistent_artifact_error() {
        let cli = CliConfig {
            embeddings_path: Some(PathBuf::from("/nonexistent/embeddings.json")),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_db_dir_not_directory_error() {
        let (_tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(artifact.clone()),
            // The artifact file itself is not a directory
            db_dir: Some(artifact),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_resolve_zero_window_rejected() {
        let (_tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(artifact),
            liked_window: 0,
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("liked_window must be at least 1"));
    }

    #[test]
    fn test_interactions_db_path() {
        let (tmp, artifact) = make_artifact_dir();
        let cli = CliConfig {
            embeddings_path: Some(artifact),
            db_dir: Some(tmp.path().to_path_buf()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();
        assert_eq!(
            config.interactions_db_path(),
            Some(tmp.path().join("interactions.db"))
        );
    }

    #[test]
    fn test_file_config_load_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
embeddings_path = "/data/embeddings.json"

[recommender]
liked_window = 4
"#,
        )
        .unwrap();

        let file = FileConfig::load(&path).unwrap();
        assert_eq!(
            file.embeddings_path,
            Some("/data/embeddings.json".to_string())
        );
        let rec = file.recommender.unwrap();
        assert_eq!(rec.liked_window, Some(4));
        assert_eq!(rec.neighbor_count, None);
    }
}
