//! Update Shopcart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::shopcarts::{
    items::{Item, ProductId},
    models::CustomerId,
};

use crate::{
    extensions::*,
    shopcarts::{
        errors::{into_status_error, validation_error},
        get::ShopcartResponse,
    },
    state::State,
};

/// Update Shopcart Item Handler
///
/// Replaces the item for the product in the path. The body's `product_id`
/// must match the path.
#[endpoint(
    tags("shopcarts"),
    summary = "Update Shopcart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "shopcarts.items.update",
    skip(customer_id, product_id, req, depot),
    fields(
        customer_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    product_id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());
    let product = ProductId::from_i64(product_id.into_inner());

    let span = tracing::Span::current();

    span.record("customer_id", tracing::field::display(customer));
    span.record("product_id", tracing::field::display(product));

    let body = req.json_value_or_4xx().await?;
    let item = Item::from_value(&body).map_err(validation_error)?;

    if item.product_id != product {
        return Err(StatusError::bad_request().brief(format!(
            "product_id {} in body does not match {product} in path",
            item.product_id
        )));
    }

    let shopcart = state
        .app
        .shopcarts
        .update_item(customer, item)
        .await
        .map_err(into_status_error)?;

    Ok(Json(shopcart.into()))
}
