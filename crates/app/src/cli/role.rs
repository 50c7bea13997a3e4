use clap::{Args, Subcommand};
use showfloor_app::auth::{AdminRoleUuid, NewAdminRole};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RoleCommand {
    #[command(subcommand)]
    command: RoleSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoleSubcommand {
    Create(CreateRoleArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateRoleArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Role name
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: Option<String>,

    /// Granted permission, e.g. `event:create`, `report:*` or `*`
    #[arg(long = "permission", required = true)]
    permissions: Vec<String>,
}

pub(crate) async fn run(command: RoleCommand) -> Result<(), String> {
    match command.command {
        RoleSubcommand::Create(args) => create(args).await,
    }
}

async fn create(args: CreateRoleArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let role = app
        .auth
        .create_role(NewAdminRole {
            uuid: AdminRoleUuid::new(),
            name: args.name,
            description: args.description,
            permissions: args.permissions,
        })
        .await
        .map_err(|error| format!("failed to create role: {error}"))?;

    println!("role_uuid: {}", role.uuid);
    println!("role_name: {}", role.name);
    println!("permissions: {}", role.permissions.join(", "));

    Ok(())
}
