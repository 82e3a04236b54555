//! Shopcarts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Shape or type failure in untrusted shopcart data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid shopcart: body of request contained bad or no data")]
    NoData,

    #[error("invalid shopcart: missing {0}")]
    MissingField(&'static str),

    #[error("invalid attribute: {field} must be {expected}")]
    InvalidAttribute {
        field: &'static str,
        expected: &'static str,
    },

    #[error("item_list must be a list")]
    NotAList,

    #[error("item must be an object")]
    ItemNotAnObject,

    #[error("item is missing {0}")]
    MissingItemField(&'static str),

    #[error("item {field} must be {expected}")]
    InvalidItemField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("item_list[{index}]: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

#[derive(Debug, Error)]
pub enum ShopcartsServiceError {
    #[error("shopcart already exists")]
    AlreadyExists,

    #[error("shopcart not found")]
    NotFound,

    #[error("item not found in shopcart")]
    ItemNotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ShopcartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
