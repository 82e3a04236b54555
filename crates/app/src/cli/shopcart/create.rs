use clap::Args;
use shopcart_app::{
    database::{self, Db},
    domain::shopcarts::{
        PgShopcartsService, ShopcartsService,
        models::{CustomerId, NewShopcart},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateShopcartArgs {
    /// Customer the shopcart belongs to
    #[arg(long)]
    customer_id: i64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateShopcartArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgShopcartsService::new(Db::new(pool));

    let shopcart = service
        .create_shopcart(NewShopcart::new(CustomerId::from_i64(args.customer_id)))
        .await
        .map_err(|error| format!("failed to create shopcart: {error}"))?;

    println!("id: {}", shopcart.id);
    println!("customer_id: {}", shopcart.customer_id);
    println!("created_at: {}", shopcart.created_at);

    Ok(())
}
