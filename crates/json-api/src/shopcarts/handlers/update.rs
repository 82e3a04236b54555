//! Update Shopcart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde_json::Value;

use shopcart_app::domain::shopcarts::{ValidationError, items::ItemList, models::CustomerId};

use crate::{
    extensions::*,
    shopcarts::{
        errors::{into_status_error, validation_error},
        get::ShopcartResponse,
    },
    state::State,
};

/// Update Shopcart Handler
///
/// Replaces the whole item list. The body is either a bare array of items or
/// an object with an `item_list` array. Duplicate product ids are kept as
/// sent.
#[endpoint(
    tags("shopcarts"),
    summary = "Replace Shopcart Items",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "shopcarts.update",
    skip(customer_id, req, depot),
    fields(customer_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());

    tracing::Span::current().record("customer_id", tracing::field::display(customer));

    let body = req.json_value_or_4xx().await?;
    let items = requested_items(&body).map_err(validation_error)?;

    let shopcart = state
        .app
        .shopcarts
        .replace_items(customer, items)
        .await
        .map_err(into_status_error)?;

    Ok(Json(shopcart.into()))
}

fn requested_items(body: &Value) -> Result<ItemList, ValidationError> {
    match body.get("item_list") {
        Some(items) => ItemList::from_value(items),
        None if body.is_object() => Err(ValidationError::MissingField("item_list")),
        None => ItemList::from_value(body),
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use shopcart_app::domain::shopcarts::{MockShopcartsService, ShopcartsServiceError};

    use crate::test_helpers::{make_item, make_shopcart, shopcarts_service};

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(repo, Router::with_path("shopcarts/{customer_id}").put(handler))
    }

    fn item_json(product_id: i64, price: i64, quantity: i64) -> Value {
        json!({
            "product_id": product_id,
            "description": format!("product {product_id}"),
            "price": price,
            "quantity": quantity,
        })
    }

    #[test]
    fn bare_arrays_and_wrapped_lists_are_accepted() -> TestResult {
        let bare = requested_items(&json!([item_json(1, 10, 1)]))?;
        let wrapped = requested_items(&json!({ "item_list": [item_json(1, 10, 1)] }))?;

        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 1);

        Ok(())
    }

    #[test]
    fn objects_without_item_list_are_rejected() {
        assert_eq!(
            requested_items(&json!({ "items": [] })),
            Err(ValidationError::MissingField("item_list"))
        );
        assert_eq!(
            requested_items(&json!("nope")),
            Err(ValidationError::NotAList)
        );
    }

    #[tokio::test]
    async fn test_update_replaces_items_and_keeps_duplicates() -> TestResult {
        let mut repo = MockShopcartsService::new();

        let items = vec![make_item(1, 10, 1), make_item(1, 10, 2)];
        let expected = ItemList::from(items.clone());

        repo.expect_replace_items()
            .once()
            .withf(move |customer, list| *customer == CustomerId::from_i64(3) && *list == expected)
            .return_once(move |_, _| Ok(make_shopcart(3, items)));

        let mut res = TestClient::put("http://example.com/shopcarts/3")
            .json(&json!([item_json(1, 10, 1), item_json(1, 10, 2)]))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ShopcartResponse = res.take_json().await?;

        assert_eq!(body.item_list.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_shopcart_returns_404() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_replace_items()
            .once()
            .return_once(|_, _| Err(ShopcartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/shopcarts/3")
            .json(&json!({ "item_list": [] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_items_returns_400() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_replace_items().never();

        let res = TestClient::put("http://example.com/shopcarts/3")
            .json(&json!([{ "product_id": 1 }]))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_wrong_content_type_returns_415() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_replace_items().never();

        let res = TestClient::put("http://example.com/shopcarts/3")
            .add_header(CONTENT_TYPE, "text/plain", true)
            .body("[]".to_owned())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
