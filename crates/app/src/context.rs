//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::shopcarts::{PgShopcartsService, ShopcartsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub shopcarts: Arc<dyn ShopcartsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            shopcarts: Arc::new(PgShopcartsService::new(db)),
        }
    }

    /// Build application context from a database URL, bringing the schema up
    /// to date first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::new(Db::new(pool)))
    }
}
