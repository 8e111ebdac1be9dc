//! Rolodex - browse a remote user directory with local edits overlaid.
//!
//! This binary is a thin consumer of the client runtime: it loads the
//! configuration, starts the directory, waits for the snapshot to settle,
//! and prints the (optionally filtered and sorted) listing.

use rolodex_client::{Config, Directory, DirectoryQuery, SnapshotState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rolodex_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Fetching user directory from {}", config.endpoint());

    let directory = Directory::start(&config);
    if directory.settled().await == SnapshotState::Failed {
        tracing::warn!("Remote fetch failed; showing an empty directory");
    }

    // Optional search term and --sort=<name|email|company> from argv
    let mut query = DirectoryQuery::new();
    for arg in std::env::args().skip(1) {
        if let Some(key) = arg.strip_prefix("--sort=") {
            query = query.sort_by(key.parse()?);
        } else {
            query = query.search(arg);
        }
    }

    let users = directory.search(&query).await;
    println!("{} user(s)", users.len());
    for user in users {
        println!(
            "#{:<4} {:<24} {:<32} {}",
            user.id, user.name, user.email, user.company.name
        );
    }

    Ok(())
}
