use clap::Args;
use showfloor_app::{database, sample};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ClearArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Confirm that all data should be deleted
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(args: ClearArgs) -> Result<(), String> {
    if !args.yes {
        return Err("refusing to clear data without --yes".to_string());
    }

    let pool = database::connect(&args.database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    sample::clear(&pool).await.map_err(|error| error.to_string())?;

    println!("cleared events, products, customers, check-ins and orders");

    Ok(())
}
