//! Shopcart Models

use jiff::Timestamp;

use crate::{
    domain::shopcarts::items::{Item, ItemList, ProductId},
    ids::TypedId,
};

/// Customer marker
#[derive(Debug)]
pub struct Customer;

/// Customer Id
pub type CustomerId = TypedId<Customer>;

/// Shopcart Id
pub type ShopcartId = TypedId<Shopcart>;

/// Shopcart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Shopcart {
    pub id: ShopcartId,
    pub customer_id: CustomerId,
    pub item_list: ItemList,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Shopcart {
    /// Look up a single item in this cart.
    pub fn item(&self, product_id: ProductId) -> Option<&Item> {
        self.item_list.get(product_id)
    }
}

/// New Shopcart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewShopcart {
    pub customer_id: CustomerId,
    pub item_list: ItemList,
}

impl NewShopcart {
    #[must_use]
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            item_list: ItemList::new(),
        }
    }
}
