use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ShopcartCommand {
    #[command(subcommand)]
    command: ShopcartSubcommand,
}

#[derive(Debug, Subcommand)]
enum ShopcartSubcommand {
    /// Create an empty shopcart for a customer
    Create(create::CreateShopcartArgs),
    /// List every shopcart
    List(list::ListShopcartsArgs),
}

pub(crate) async fn run(command: ShopcartCommand) -> Result<(), String> {
    match command.command {
        ShopcartSubcommand::Create(args) => create::run(args).await,
        ShopcartSubcommand::List(args) => list::run(args).await,
    }
}
