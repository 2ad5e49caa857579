mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use songkit::database::{
    ensure_keyspace, ensure_table, songs_table, KeyspaceSpec, ScyllaConnection, SongReader,
    SongWriter,
};
use songkit::types::Song;

// The fixed record the demo writes and reads back.
const DEMO_SONG_ID: &str = "2cc9ccb7-6221-4ccb-8387-f22b6a1b354d";
const DEMO_TITLE: &str = "Lost In Love Mashup | Incomplete love - Emotional Mashup";
const DEMO_ALBUM: &str = "AB Ambients Chillout";
const DEMO_ARTIST: &str = "Sunix Thakur";

#[derive(Parser, Debug)]
#[command(name = "song-demo")]
#[command(about = "One-shot ScyllaDB demo: bootstrap the songs table, insert a record, read it back")]
struct Args {
    #[arg(short, long, default_value = "config/song-demo.yaml")]
    config: String,

    /// Contact points overriding the config file, one per flag.
    #[arg(long)]
    host: Vec<String>,

    /// Keyspace overriding the config file.
    #[arg(long)]
    keyspace: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "song_demo=info,songkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut db = config::load_config(&args.config)?.database;
    if !args.host.is_empty() {
        db.hosts = args.host.clone();
    }
    if let Some(keyspace) = args.keyspace {
        db.keyspace = keyspace;
    }

    info!("starting song demo against {:?}", db.hosts);

    // Configure -> Connect -> EnsureKeyspace -> EnsureTable -> Write ->
    // Read. Each step is a precondition for the next; the first error
    // aborts the run.
    let conn = Arc::new(ScyllaConnection::connect(&db.cluster()).await?);
    conn.health_check().await?;

    ensure_keyspace(&conn, &KeyspaceSpec::simple(&db.keyspace, 1)).await?;
    let table = songs_table(&db.keyspace)?;
    ensure_table(&conn, &table).await?;

    let writer = SongWriter::new(conn.clone(), &table).await?;
    let song = Song::new(
        Uuid::parse_str(DEMO_SONG_ID)?,
        DEMO_TITLE,
        DEMO_ALBUM,
        DEMO_ARTIST,
    );
    writer.insert(&song).await?;
    info!("inserted song {}", song.id);

    let reader = SongReader::new(conn.clone(), &table).await?;
    let songs = reader.songs_by_id(song.id).await?;
    info!("read back {} song(s)", songs.len());
    for song in &songs {
        info!("{:?}", song);
    }

    Ok(())
}
