use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recsys_core::catalog::{load_embeddings, TrackId};
use recsys_core::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_LIKED_WINDOW, DEFAULT_NEIGHBOR_COUNT,
};
use recsys_core::interaction_store::{InteractionStore, SqliteInteractionStore};
use recsys_core::playback::{AudioLocator, FmaLayout};
use recsys_core::recommender::RecommendationEngine;

fn parse_path(s: &str) -> Result<PathBuf> {
    let raw = PathBuf::from(s);
    let resolved = match raw.canonicalize() {
        Ok(path) => path,
        // Nonexistent paths are allowed here; existence is checked during
        // config resolution where a proper error message can be produced.
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => raw,
        Err(err) => return Err(err).with_context(|| format!("Error resolving path: {}", s)),
    };
    if resolved.is_absolute() {
        return Ok(resolved);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(resolved))
}

#[derive(Parser, Debug)]
#[command(about = "Recommendation engine CLI for the music bot")]
struct CliArgs {
    /// Path to the embeddings artifact (JSON).
    #[clap(long, value_parser = parse_path)]
    embeddings: Option<PathBuf>,

    /// Path to a TOML config file. TOML values override CLI values.
    #[clap(long, value_parser = parse_path)]
    config: Option<PathBuf>,

    /// Directory holding the interactions database.
    #[clap(long, value_parser = parse_path)]
    db_dir: Option<PathBuf>,

    /// Root directory of the audio files.
    #[clap(long, value_parser = parse_path)]
    media_root: Option<PathBuf>,

    /// Number of most recent likes used to build the taste vector.
    #[clap(long, default_value_t = DEFAULT_LIKED_WINDOW)]
    liked_window: usize,

    /// Number of neighbors requested from the similarity search.
    #[clap(long, default_value_t = DEFAULT_NEIGHBOR_COUNT)]
    neighbor_count: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the embeddings artifact and print catalog stats.
    Check,
    /// Recommend the next track.
    Pick {
        /// Explicit liked track ids, most recent last (comma separated).
        #[clap(long, value_delimiter = ',')]
        likes: Vec<TrackId>,

        /// Read the like history of this user from the interactions database.
        #[clap(long, conflicts_with = "likes")]
        user: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;

    let cli_config = CliConfig {
        embeddings_path: cli_args.embeddings.clone(),
        db_dir: cli_args.db_dir.clone(),
        media_root: cli_args.media_root.clone(),
        liked_window: cli_args.liked_window,
        neighbor_count: cli_args.neighbor_count,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let catalog = Arc::new(load_embeddings(&config.embeddings_path)?);

    match cli_args.command {
        Command::Check => {
            println!(
                "Embedding catalog is valid: {} tracks, dimension {}",
                catalog.len(),
                catalog.dimension()
            );
            Ok(())
        }
        Command::Pick { likes, user } => {
            let recent_likes = match user {
                Some(user_id) => {
                    let Some(db_path) = config.interactions_db_path() else {
                        bail!("--user requires --db-dir (or db_dir in the config file)");
                    };
                    let store = SqliteInteractionStore::new(&db_path)?;
                    let likes = store
                        .recent_liked_track_ids(user_id, config.recommender.liked_window)?;
                    info!(
                        "User {} has {} recent likes on record",
                        user_id,
                        likes.len()
                    );
                    likes
                }
                None => likes,
            };

            let engine = RecommendationEngine::new(catalog, config.recommender);
            let track_id = engine.pick_next_ids(&recent_likes)?;

            let locator = FmaLayout::new(&config.media_root);
            println!("{} {}", track_id, locator.audio_path(track_id).display());
            Ok(())
        }
    }
}
