use clap::Args;
use jiff::{Timestamp, tz::TimeZone};
use showfloor_app::sample;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Also record sample check-ins and orders for today
    #[arg(long)]
    with_activity: bool,

    /// IANA time zone that decides which day it is at the venue
    #[arg(long, env = "EVENT_TIME_ZONE", default_value = "UTC")]
    event_time_zone: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let time_zone = TimeZone::get(&args.event_time_zone)
        .map_err(|error| format!("invalid event time zone: {error}"))?;

    let today = Timestamp::now().to_zoned(time_zone).date();
    let app = args.database.context().await?;

    let summary = sample::seed(&app, today, args.with_activity)
        .await
        .map_err(|error| format!("failed to seed: {error}"))?;

    println!(
        "seeded event {} ({} products, {} shops, {} orders added)",
        summary.event, summary.products_created, summary.shops_created, summary.orders_created
    );

    Ok(())
}
