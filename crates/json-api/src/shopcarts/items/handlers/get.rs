//! Get Shopcart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use shopcart_app::domain::shopcarts::{
    items::{Item, ProductId},
    models::CustomerId,
};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The product this line is for
    pub product_id: i64,

    /// Product description
    pub description: String,

    /// Unit price
    pub price: i64,

    /// Number of units
    pub quantity: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            product_id: item.product_id.into_i64(),
            description: item.description,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Get Shopcart Item Handler
#[endpoint(
    tags("shopcarts"),
    summary = "Get Shopcart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    product_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .shopcarts
        .get_item(
            CustomerId::from_i64(customer_id.into_inner()),
            ProductId::from_i64(product_id.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
