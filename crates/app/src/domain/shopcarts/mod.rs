//! Shopcarts

pub mod errors;
pub mod items;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::{ShopcartsServiceError, ValidationError};
pub use service::*;
