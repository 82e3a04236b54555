//! List Shopcart Items Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::shopcarts::models::CustomerId;

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, items::get::ItemResponse},
    state::State,
};

const MAX_PRICE_PARAM: &str = "max-price";

/// List Shopcart Items Handler
///
/// Returns the items in a shopcart. `max-price` keeps only items priced at
/// or below it. Responds 404 when the shopcart is absent or nothing is left
/// to return.
#[endpoint(
    tags("shopcarts"),
    summary = "List Shopcart Items",
    responses(
        (status_code = StatusCode::OK, description = "Items found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found or no matching items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());
    let max_price = max_price(req.query::<String>(MAX_PRICE_PARAM))?;

    let items = state
        .app
        .shopcarts
        .list_items(customer, max_price)
        .await
        .map_err(into_status_error)?;

    if items.is_empty() {
        return Err(StatusError::not_found().brief("No items found"));
    }

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

fn max_price(raw: Option<String>) -> Result<Option<i64>, StatusError> {
    raw.map(|value| {
        value.trim().parse::<i64>().map_err(|error| {
            StatusError::bad_request().brief(format!("{MAX_PRICE_PARAM} must be an integer: {error}"))
        })
    })
    .transpose()
}
