use clap::{Args, Parser, Subcommand};
use showfloor_app::{auth::AuthSettings, context::AppContext};

mod admin;
mod clear;
mod role;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "showfloor-app", about = "Showfloor CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Insert sample events, products and shops
    Seed(seed::SeedArgs),
    /// Remove all catalogue and activity data
    Clear(clear::ClearArgs),
    Role(role::RoleCommand),
    Admin(admin::AdminCommand),
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        AppContext::from_database_url(&self.database_url, AuthSettings::default())
            .await
            .map_err(|error| format!("failed to initialise app: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Seed(args) => seed::run(args).await,
            Commands::Clear(args) => clear::run(args).await,
            Commands::Role(command) => role::run(command).await,
            Commands::Admin(command) => admin::run(command).await,
        }
    }
}
