use clap::{Parser, Subcommand};

mod db;
mod shopcart;

#[derive(Debug, Parser)]
#[command(name = "shopcart-app", about = "Shopcart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Shopcart(shopcart::ShopcartCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Shopcart(command) => shopcart::run(command).await,
        }
    }
}
