//! Create Shopcart Item Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::shopcarts::{items::Item, models::CustomerId};

use crate::{
    extensions::*,
    shopcarts::{
        errors::{into_status_error, validation_error},
        get::ShopcartResponse,
    },
    state::State,
};

/// Create Shopcart Item Handler
///
/// Adds an item to the shopcart. When the product is already in the cart its
/// quantity is increased instead.
#[endpoint(
    tags("shopcarts"),
    summary = "Add Item to Shopcart",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "shopcarts.items.create",
    skip(customer_id, req, depot, res),
    fields(
        customer_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());

    let body = req.json_value_or_4xx().await?;
    let item = Item::from_value(&body).map_err(validation_error)?;
    let product = item.product_id;

    let span = tracing::Span::current();

    span.record("customer_id", tracing::field::display(customer));
    span.record("product_id", tracing::field::display(product));

    let shopcart = state
        .app
        .shopcarts
        .add_item(customer, item)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/shopcarts/{customer}/items/{product}"),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(shopcart.into()))
}
