use clap::{Args, Subcommand};
use showfloor_app::auth::{AdminUserUuid, NewAdminUser};
use zeroize::Zeroizing;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    Create(CreateAdminArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    username: String,

    /// Name of an existing role
    #[arg(long)]
    role: String,

    /// Initial password
    #[arg(long, env = "ADMIN_PASSWORD_NEW", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(command: AdminCommand) -> Result<(), String> {
    match command.command {
        AdminSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateAdminArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let role = app
        .auth
        .get_role_by_name(&args.role)
        .await
        .map_err(|error| format!("failed to find role '{}': {error}", args.role))?;

    let user = app
        .auth
        .create_admin_user(NewAdminUser {
            uuid: AdminUserUuid::new(),
            username: args.username,
            password: Zeroizing::new(args.password),
            role: role.uuid,
        })
        .await
        .map_err(|error| format!("failed to create admin user: {error}"))?;

    println!("admin_uuid: {}", user.uuid);
    println!("username: {}", user.username);
    println!("role: {}", user.role_name);

    Ok(())
}
