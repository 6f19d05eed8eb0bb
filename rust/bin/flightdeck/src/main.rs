//! `flightdeck`: command-line client for the travel back office.
//!
//! Keeps its session in a local redb file so `login` survives between runs.

mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flightdeck_core::ClientConfig;

/// Flightdeck CLI.
#[derive(Parser, Debug)]
#[command(name = "flightdeck", about = "Travel back office client")]
struct Cli {
    /// Travel API base URL.
    #[arg(long, global = true)]
    api: Option<String>,

    /// Profile service base URL.
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Social service base URL.
    #[arg(long, global = true)]
    social: Option<String>,

    /// Session storage file (default: ./flightdeck.redb).
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Keep the session in memory only.
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Notice language (en, id).
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in to the profile service.
    Login {
        #[arg(long)]
        user: Option<String>,
        /// Password (falls back to FLIGHTDECK_PASSWORD, then a prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Drop the stored session.
    Logout,

    /// Show the signed-in identity.
    Whoami,

    /// List a resource (airlines, flights, bookings, posts...).
    List {
        resource: String,
    },

    /// Show one entity.
    Get {
        resource: String,
        id: String,
    },

    /// Delete, deactivate or cancel an entity.
    Delete {
        resource: String,
        id: String,
    },

    /// Loyalty program.
    Loyalty {
        #[command(subcommand)]
        action: LoyaltyAction,
    },
}

#[derive(Subcommand, Debug)]
enum LoyaltyAction {
    /// Show the dashboard of a customer (default: the selected one).
    Dashboard { customer: Option<String> },
    /// Select the customer used by later commands.
    Select { customer: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api) = cli.api {
        config.api_base_url = api;
    }
    if let Some(profile) = cli.profile {
        config.profile_url = profile;
    }
    if let Some(social) = cli.social {
        config.social_url = social;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if cli.ephemeral {
        config.storage_path = None;
    } else if let Some(storage) = cli.storage {
        config.storage_path = Some(storage);
    } else if config.storage_path.is_none() {
        config.storage_path = Some(PathBuf::from("flightdeck.redb"));
    }

    let app = app::App::open(&config)?;

    match cli.command {
        Commands::Login { user, password } => {
            let username = match user {
                Some(u) => u,
                None => commands::prompt("Username: ")?,
            };
            let password = match password.or_else(|| std::env::var("FLIGHTDECK_PASSWORD").ok()) {
                Some(p) => p,
                None => commands::prompt("Password: ")?,
            };
            commands::session::login(&app, &username, &password).await?;
        }
        Commands::Logout => commands::session::logout(&app),
        Commands::Whoami => commands::session::whoami(&app),
        Commands::List { resource } => commands::resource::list(&app, &resource).await?,
        Commands::Get { resource, id } => commands::resource::get(&app, &resource, &id).await?,
        Commands::Delete { resource, id } => {
            commands::resource::delete(&app, &resource, &id).await?
        }
        Commands::Loyalty { action } => match action {
            LoyaltyAction::Dashboard { customer } => {
                commands::loyalty::dashboard(&app, customer.as_deref()).await?
            }
            LoyaltyAction::Select { customer } => commands::loyalty::select(&app, &customer),
        },
    }

    Ok(())
}
