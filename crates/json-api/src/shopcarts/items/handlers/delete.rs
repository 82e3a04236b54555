//! Delete Shopcart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::shopcarts::{
    ShopcartsServiceError,
    items::ProductId,
    models::CustomerId,
};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Delete Shopcart Item Handler
///
/// Succeeds whether or not the shopcart or item existed.
#[endpoint(
    tags("shopcarts"),
    summary = "Remove Item from Shopcart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    product_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());
    let product = ProductId::from_i64(product_id.into_inner());

    match state.app.shopcarts.remove_item(customer, product).await {
        Ok(_) | Err(ShopcartsServiceError::NotFound) => Ok(StatusCode::NO_CONTENT),
        Err(error) => Err(into_status_error(error)),
    }
}
