//! App Router

use salvo::Router;

use crate::{root, shopcarts};

pub(crate) fn app_router() -> Router {
    Router::new().get(root::handler).push(
        Router::with_path("shopcarts")
            .get(shopcarts::index::handler)
            .post(shopcarts::create::handler)
            .push(
                Router::with_path("{customer_id}")
                    .get(shopcarts::get::handler)
                    .put(shopcarts::update::handler)
                    .delete(shopcarts::delete::handler)
                    .push(
                        Router::with_path("items")
                            .get(shopcarts::items::index::handler)
                            .post(shopcarts::items::create::handler)
                            .push(
                                Router::with_path("{product_id}")
                                    .get(shopcarts::items::get::handler)
                                    .put(shopcarts::items::update::handler)
                                    .delete(shopcarts::items::delete::handler),
                            ),
                    ),
            ),
    )
}
