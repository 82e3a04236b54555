//! Get Shopcart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use shopcart_app::domain::shopcarts::models::{CustomerId, Shopcart};

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, items::get::ItemResponse},
    state::State,
};

/// Shopcart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopcartResponse {
    /// The identifier the store assigned to the shopcart
    pub id: i64,

    /// The customer who owns the shopcart
    pub customer_id: i64,

    /// The items in the shopcart, in insertion order
    pub item_list: Vec<ItemResponse>,
}

impl From<Shopcart> for ShopcartResponse {
    fn from(shopcart: Shopcart) -> Self {
        ShopcartResponse {
            id: shopcart.id.into_i64(),
            customer_id: shopcart.customer_id.into_i64(),
            item_list: shopcart
                .item_list
                .into_iter()
                .map(ItemResponse::from)
                .collect(),
        }
    }
}

/// Get Shopcart Handler
///
/// Returns the customer's shopcart.
#[endpoint(
    tags("shopcarts"),
    summary = "Get Shopcart",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());

    let shopcart = state
        .app
        .shopcarts
        .get_shopcart(customer)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| {
            StatusError::not_found().brief(format!("Shopcart for customer {customer} not found"))
        })?;

    Ok(Json(shopcart.into()))
}
