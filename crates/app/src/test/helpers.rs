//! Test Helpers

use crate::domain::shopcarts::items::{Item, ProductId};

/// Build an item whose description is derived from its product id.
pub(crate) fn item(product_id: i64, price: i64, quantity: i64) -> Item {
    Item::new(
        ProductId::from_i64(product_id),
        format!("product {product_id}"),
        price,
        quantity,
    )
}
