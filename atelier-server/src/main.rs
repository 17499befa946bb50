//! `atelier-server` binary: serves the storefront by default, with a few
//! operator subcommands for the database, the catalog and the user list.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_core::{
    crypto::PasswordCrypto,
    database::AppUnitOfWork,
    domain::{NewArtwork, Price},
    services::{CatalogService, IdentityService},
};
use atelier_server::infra::{
    config::{Config, ServeArgs},
    startup,
};

#[derive(Parser, Debug)]
#[command(name = "atelier-server")]
#[command(about = "Storefront for collecting digital artworks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (the default when no subcommand is given)
    Serve,
    #[command(subcommand)]
    Db(DbCommand),
    #[command(subcommand)]
    Artwork(ArtworkCommand),
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[derive(Debug, Subcommand)]
enum ArtworkCommand {
    /// Add an artwork to the catalog
    Add {
        #[arg(long)]
        title: String,
        /// Price in dollars, e.g. `12.50`
        #[arg(long)]
        price: Price,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Print the catalog
    List,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Print registered users
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; everything also comes from flags or the
    // process environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_args(&cli.serve).context("invalid configuration")?;

    match cli.command {
        None | Some(Command::Serve) => startup::serve(config).await,
        Some(Command::Db(DbCommand::Migrate)) => {
            startup::connect_database(&config).await?;
            info!("database migrations applied");
            Ok(())
        }
        Some(Command::Artwork(command)) => run_artwork_command(&config, command).await,
        Some(Command::User(UserCommand::List)) => run_user_list(&config).await,
    }
}

async fn run_user_list(config: &Config) -> anyhow::Result<()> {
    let db = startup::connect_database(config).await?;
    let crypto = PasswordCrypto::new(&config.auth.password_pepper)
        .context("failed to initialise password hashing")?;
    let identity = IdentityService::new(AppUnitOfWork::sqlite(&db).users, Arc::new(crypto));

    for user in identity.list_users().await? {
        let role = if config.auth.is_admin(&user.username) {
            "admin"
        } else {
            "-"
        };
        println!(
            "{}\t{}\t{}\t{}",
            user.id,
            user.username,
            role,
            user.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

async fn run_artwork_command(config: &Config, command: ArtworkCommand) -> anyhow::Result<()> {
    let db = startup::connect_database(config).await?;
    let catalog = CatalogService::new(AppUnitOfWork::sqlite(&db).artworks);

    match command {
        ArtworkCommand::Add {
            title,
            price,
            image_url,
        } => {
            let artwork = catalog
                .create_artwork(NewArtwork::new(title, image_url, price))
                .await
                .context("failed to add artwork")?;
            println!("{}\t{}\t${}", artwork.id, artwork.title, artwork.price);
        }
        ArtworkCommand::List => {
            for artwork in catalog.list_artworks().await? {
                println!(
                    "{}\t{}\t${}\t{}",
                    artwork.id,
                    artwork.title,
                    artwork.price,
                    artwork.image_url.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}
