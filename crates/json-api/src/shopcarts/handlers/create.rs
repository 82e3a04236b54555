//! Create Shopcart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use shopcart_app::domain::shopcarts::records::ShopcartRecord;

use crate::{
    extensions::*,
    shopcarts::{
        errors::{validation_error, into_status_error},
        get::ShopcartResponse,
    },
    state::State,
};

/// Create Shopcart Handler
///
/// Creates an empty shopcart for the customer named in the body. Items in
/// the body are validated but not stored.
#[endpoint(
    tags("shopcarts"),
    summary = "Create Shopcart",
    responses(
        (status_code = StatusCode::CREATED, description = "Shopcart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Customer already has a shopcart"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "shopcarts.create",
    skip(req, depot, res),
    fields(customer_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_value_or_4xx().await?;
    let record = ShopcartRecord::from_value(&body).map_err(validation_error)?;

    tracing::Span::current().record(
        "customer_id",
        tracing::field::display(record.customer_id),
    );

    let shopcart = state
        .app
        .shopcarts
        .create_shopcart(record.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/shopcarts/{}", shopcart.customer_id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    tracing::info!(customer_id = %shopcart.customer_id, "created shopcart");

    Ok(Json(shopcart.into()))
}
