/// Fireside Channel Sync
///
/// Pulls new videos from the YouTube channel into the episodes table.
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use fireside_shared::db;
use fireside_sync::{plan_new_episodes, ytdlp};

const DEFAULT_CHANNEL: &str = "https://www.youtube.com/@TheFiresideTribe/videos";

/// Command-line arguments for fireside-sync
#[derive(Parser, Debug)]
#[command(name = "fireside-sync")]
#[command(about = "Sync YouTube channel videos into the episodes table")]
#[command(version)]
struct Args {
    /// Channel videos URL handed to yt-dlp
    #[arg(long, env = "YOUTUBE_CHANNEL_URL", default_value = DEFAULT_CHANNEL)]
    channel: String,

    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "./fireside.db")]
    database: String,

    /// Read a saved `yt-dlp -J` dump instead of calling yt-dlp
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print what would be inserted without writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fireside_sync=info,fireside_shared=info".into()),
        )
        .init();

    let args = Args::parse();

    let videos = match &args.input {
        Some(path) => ytdlp::read_dump(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        None => ytdlp::fetch_channel(&args.channel).await?,
    };
    info!("Found {} videos on the channel", videos.len());

    let pool = db::create_pool(&db::sqlite_url(&args.database)).await?;
    db::run_migrations(&pool).await?;

    let existing = db::episode_slugs(&pool).await?;
    let planned = plan_new_episodes(&videos, &existing, chrono::Utc::now());

    if planned.is_empty() {
        info!("No new episodes to insert. Everything is up to date.");
        return Ok(());
    }

    if args.dry_run {
        for episode in &planned {
            println!("{}  {}  {}", episode.published_at, episode.slug, episode.title);
        }
        info!("Dry run: {} episode(s) would be inserted", planned.len());
        return Ok(());
    }

    let inserted = db::insert_synced_episodes(&pool, &planned).await?;
    info!("Inserted {} new episode(s)", inserted);

    Ok(())
}
