use clap::Args;
use shopcart_app::{
    database::{self, Db},
    domain::shopcarts::{PgShopcartsService, ShopcartsService, records::ShopcartRecord},
};

#[derive(Debug, Args)]
pub(crate) struct ListShopcartsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListShopcartsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let shopcarts = PgShopcartsService::new(Db::new(pool))
        .list_shopcarts()
        .await
        .map_err(|error| format!("failed to list shopcarts: {error}"))?;

    if shopcarts.is_empty() {
        println!("no shopcarts found");
        return Ok(());
    }

    for shopcart in shopcarts {
        let line = serde_json::to_string(&ShopcartRecord::from(shopcart))
            .map_err(|error| format!("failed to encode shopcart: {error}"))?;

        println!("{line}");
    }

    Ok(())
}
