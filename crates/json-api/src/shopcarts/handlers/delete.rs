//! Delete Shopcart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::shopcarts::{ShopcartsServiceError, models::CustomerId};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Delete Shopcart Handler
///
/// Deleting a shopcart that does not exist still succeeds.
#[endpoint(
    tags("shopcarts"),
    summary = "Delete Shopcart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Shopcart deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "shopcarts.delete",
    skip(customer_id, depot),
    fields(customer_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = CustomerId::from_i64(customer_id.into_inner());

    tracing::Span::current().record("customer_id", tracing::field::display(customer));

    match state.app.shopcarts.delete_shopcart(customer).await {
        Ok(()) => tracing::info!(customer_id = %customer, "deleted shopcart"),
        Err(ShopcartsServiceError::NotFound) => {
            tracing::debug!(customer_id = %customer, "no shopcart to delete");
        }
        Err(error) => return Err(into_status_error(error)),
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use shopcart_app::domain::shopcarts::MockShopcartsService;

    use crate::test_helpers::shopcarts_service;

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(
            repo,
            Router::with_path("shopcarts/{customer_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_delete_shopcart()
            .once()
            .withf(|customer| *customer == CustomerId::from_i64(5))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/shopcarts/5")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_shopcart_returns_204() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_delete_shopcart()
            .once()
            .withf(|customer| *customer == CustomerId::from_i64(999))
            .return_once(|_| Err(ShopcartsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/shopcarts/999")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_store_failure_returns_500() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_delete_shopcart()
            .once()
            .return_once(|_| Err(ShopcartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::delete("http://example.com/shopcarts/1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
