//! Shopcarts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::shopcarts::{
    items::ItemList,
    models::{CustomerId, Shopcart, ShopcartId},
};

const LIST_SHOPCARTS_SQL: &str = include_str!("sql/list_shopcarts.sql");
const GET_SHOPCART_SQL: &str = include_str!("sql/get_shopcart.sql");
const LOCK_SHOPCART_SQL: &str = include_str!("sql/lock_shopcart.sql");
const CREATE_SHOPCART_SQL: &str = include_str!("sql/create_shopcart.sql");
const UPDATE_SHOPCART_SQL: &str = include_str!("sql/update_shopcart.sql");
const DELETE_SHOPCART_SQL: &str = include_str!("sql/delete_shopcart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShopcartsRepository;

impl PgShopcartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_shopcarts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(LIST_SHOPCARTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(GET_SHOPCART_SQL)
            .bind(customer.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Same as [`Self::get_shopcart`] but holds a row lock until the
    /// transaction ends.
    pub(crate) async fn lock_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, sqlx::Error> {
        query_as::<Postgres, Shopcart>(LOCK_SHOPCART_SQL)
            .bind(customer.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        items: &ItemList,
    ) -> Result<Shopcart, sqlx::Error> {
        query_as::<Postgres, Shopcart>(CREATE_SHOPCART_SQL)
            .bind(customer.into_i64())
            .bind(Json(items))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shopcart: ShopcartId,
        customer: CustomerId,
        items: &ItemList,
    ) -> Result<Shopcart, sqlx::Error> {
        query_as::<Postgres, Shopcart>(UPDATE_SHOPCART_SQL)
            .bind(shopcart.into_i64())
            .bind(customer.into_i64())
            .bind(Json(items))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_shopcart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SHOPCART_SQL)
            .bind(customer.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Shopcart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ShopcartId::from_i64(row.try_get("id")?),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            item_list: row.try_get::<Json<ItemList>, _>("item_list")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
