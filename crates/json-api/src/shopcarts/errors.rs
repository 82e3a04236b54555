//! Errors

use salvo::http::StatusError;
use tracing::error;

use shopcart_app::domain::shopcarts::{ShopcartsServiceError, ValidationError};

pub(crate) fn into_status_error(error: ShopcartsServiceError) -> StatusError {
    match error {
        ShopcartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Shopcart for this customer already exists")
        }
        ShopcartsServiceError::NotFound => StatusError::not_found().brief("Shopcart not found"),
        ShopcartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found"),
        ShopcartsServiceError::Validation(source) => validation_error(source),
        ShopcartsServiceError::MissingRequiredData | ShopcartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid shopcart payload")
        }
        ShopcartsServiceError::Sql(source) => {
            error!("shopcart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn validation_error(error: ValidationError) -> StatusError {
    StatusError::bad_request().brief(error.to_string())
}
