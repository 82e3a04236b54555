//! List Shopcarts Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, get::ShopcartResponse},
    state::State,
};

/// List Shopcarts Handler
///
/// Returns every shopcart. Responds 404 when there are none.
#[endpoint(
    tags("shopcarts"),
    summary = "List Shopcarts",
    responses(
        (status_code = StatusCode::OK, description = "Shopcarts found"),
        (status_code = StatusCode::NOT_FOUND, description = "No shopcarts exist"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ShopcartResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shopcarts = state
        .app
        .shopcarts
        .list_shopcarts()
        .await
        .map_err(into_status_error)?;

    if shopcarts.is_empty() {
        return Err(StatusError::not_found().brief("No shopcarts found"));
    }

    Ok(Json(
        shopcarts.into_iter().map(ShopcartResponse::from).collect(),
    ))
}
