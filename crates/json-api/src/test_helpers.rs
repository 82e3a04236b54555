//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use shopcart_app::{
    context::AppContext,
    domain::shopcarts::{
        MockShopcartsService,
        items::{Item, ItemList, ProductId},
        models::{CustomerId, Shopcart, ShopcartId},
    },
};

use crate::state::State;

pub(crate) fn state_with_shopcarts(shopcarts: MockShopcartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        shopcarts: Arc::new(shopcarts),
    })
}

pub(crate) fn shopcarts_service(shopcarts: MockShopcartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_shopcarts(shopcarts)))
            .push(route),
    )
}

pub(crate) fn make_item(product_id: i64, price: i64, quantity: i64) -> Item {
    Item::new(
        ProductId::from_i64(product_id),
        format!("product {product_id}"),
        price,
        quantity,
    )
}

pub(crate) fn make_shopcart(customer_id: i64, items: Vec<Item>) -> Shopcart {
    Shopcart {
        id: ShopcartId::from_i64(customer_id + 1000),
        customer_id: CustomerId::from_i64(customer_id),
        item_list: ItemList::from(items),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
