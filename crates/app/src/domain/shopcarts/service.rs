//! Shopcarts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error, info};

use crate::{
    database::Db,
    domain::shopcarts::{
        errors::ShopcartsServiceError,
        items::{Item, ItemList, ProductId},
        models::{CustomerId, NewShopcart, Shopcart},
        repository::PgShopcartsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgShopcartsService {
    db: Db,
    repository: PgShopcartsRepository,
}

impl PgShopcartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShopcartsRepository::new(),
        }
    }

    /// Lock the customer's cart, apply `modify` to its items and write the
    /// result back, all in one transaction.
    async fn modify_items<F>(
        &self,
        customer: CustomerId,
        modify: F,
    ) -> Result<Shopcart, ShopcartsServiceError>
    where
        F: FnOnce(&mut ItemList) + Send,
    {
        let mut tx = self.db.begin_transaction().await?;

        let mut shopcart = self
            .repository
            .lock_shopcart(&mut tx, customer)
            .await?
            .ok_or(ShopcartsServiceError::NotFound)?;

        modify(&mut shopcart.item_list);

        let updated = self
            .repository
            .update_shopcart(&mut tx, shopcart.id, shopcart.customer_id, &shopcart.item_list)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn find(&self, customer: CustomerId) -> Result<Option<Shopcart>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let shopcart = self.repository.get_shopcart(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(shopcart)
    }
}

fn log_failure(operation: &'static str, customer: CustomerId, error: &ShopcartsServiceError) {
    match error {
        ShopcartsServiceError::Sql(source) => {
            error!(operation, customer_id = %customer, "shopcart storage error: {source}");
        }
        other => debug!(operation, customer_id = %customer, "shopcart operation rejected: {other}"),
    }
}

#[async_trait]
impl ShopcartsService for PgShopcartsService {
    async fn list_shopcarts(&self) -> Result<Vec<Shopcart>, ShopcartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let shopcarts = self.repository.list_shopcarts(&mut tx).await?;

        tx.commit().await?;

        Ok(shopcarts)
    }

    async fn get_shopcart(
        &self,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, ShopcartsServiceError> {
        self.find(customer).await
    }

    async fn create_shopcart(
        &self,
        shopcart: NewShopcart,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        let customer = shopcart.customer_id;

        info!(customer_id = %customer, "creating shopcart");

        let mut tx = self.db.begin_transaction().await?;

        // Carts always start out empty.
        let created = self
            .repository
            .create_shopcart(&mut tx, customer, &ItemList::new())
            .await
            .map_err(ShopcartsServiceError::from)
            .inspect_err(|error| log_failure("create_shopcart", customer, error))?;

        tx.commit().await?;

        Ok(created)
    }

    async fn save_shopcart(&self, shopcart: Shopcart) -> Result<Shopcart, ShopcartsServiceError> {
        let customer = shopcart.customer_id;

        info!(shopcart_id = %shopcart.id, customer_id = %customer, "saving shopcart");

        let mut tx = self.db.begin_transaction().await?;

        let saved = self
            .repository
            .update_shopcart(&mut tx, shopcart.id, customer, &shopcart.item_list)
            .await
            .map_err(ShopcartsServiceError::from)
            .inspect_err(|error| log_failure("save_shopcart", customer, error))?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn delete_shopcart(&self, customer: CustomerId) -> Result<(), ShopcartsServiceError> {
        info!(customer_id = %customer, "deleting shopcart");

        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_shopcart(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(ShopcartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn replace_items(
        &self,
        customer: CustomerId,
        items: ItemList,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        info!(customer_id = %customer, items = items.len(), "replacing shopcart items");

        self.modify_items(customer, move |list| *list = items)
            .await
            .inspect_err(|error| log_failure("replace_items", customer, error))
    }

    async fn add_item(
        &self,
        customer: CustomerId,
        item: Item,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        info!(customer_id = %customer, product_id = %item.product_id, "adding shopcart item");

        self.modify_items(customer, move |list| {
            list.add_or_merge(item);
        })
        .await
        .inspect_err(|error| log_failure("add_item", customer, error))
    }

    async fn get_item(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<Item, ShopcartsServiceError> {
        let shopcart = self
            .find(customer)
            .await?
            .ok_or(ShopcartsServiceError::NotFound)?;

        shopcart
            .item(product)
            .cloned()
            .ok_or(ShopcartsServiceError::ItemNotFound)
    }

    async fn update_item(
        &self,
        customer: CustomerId,
        item: Item,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        let product = item.product_id;

        info!(customer_id = %customer, product_id = %product, "updating shopcart item");

        self.modify_items(customer, move |list| {
            if !list.replace_item(item) {
                debug!(product_id = %product, "no matching item to replace");
            }
        })
        .await
        .inspect_err(|error| log_failure("update_item", customer, error))
    }

    async fn remove_item(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<Shopcart, ShopcartsServiceError> {
        info!(customer_id = %customer, product_id = %product, "removing shopcart item");

        self.modify_items(customer, move |list| {
            list.remove_item(product);
        })
        .await
        .inspect_err(|error| log_failure("remove_item", customer, error))
    }

    async fn list_items(
        &self,
        customer: CustomerId,
        max_price: Option<i64>,
    ) -> Result<Vec<Item>, ShopcartsServiceError> {
        let shopcart = self
            .find(customer)
            .await?
            .ok_or(ShopcartsServiceError::NotFound)?;

        Ok(match max_price {
            Some(max_price) => shopcart.item_list.filter_by_max_price(max_price),
            None => shopcart.item_list.into(),
        })
    }
}

#[automock]
#[async_trait]
pub trait ShopcartsService: Send + Sync {
    /// Retrieves every shopcart, oldest first.
    async fn list_shopcarts(&self) -> Result<Vec<Shopcart>, ShopcartsServiceError>;

    /// Retrieve the customer's shopcart, if they have one.
    async fn get_shopcart(
        &self,
        customer: CustomerId,
    ) -> Result<Option<Shopcart>, ShopcartsServiceError>;

    /// Creates an empty shopcart for the given customer.
    async fn create_shopcart(&self, shopcart: NewShopcart)
    -> Result<Shopcart, ShopcartsServiceError>;

    /// Persists a whole-cart change, keyed by the cart's id.
    async fn save_shopcart(&self, shopcart: Shopcart) -> Result<Shopcart, ShopcartsServiceError>;

    /// Deletes the customer's shopcart.
    async fn delete_shopcart(&self, customer: CustomerId) -> Result<(), ShopcartsServiceError>;

    /// Replace the whole item list. Product ids are not merged.
    async fn replace_items(
        &self,
        customer: CustomerId,
        items: ItemList,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// Add an item, merging quantities with an existing item for the same product.
    async fn add_item(
        &self,
        customer: CustomerId,
        item: Item,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// Retrieve a single item from the customer's shopcart.
    async fn get_item(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<Item, ShopcartsServiceError>;

    /// Replace the item with the same product id.
    async fn update_item(
        &self,
        customer: CustomerId,
        item: Item,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// Remove an item from the customer's shopcart.
    async fn remove_item(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<Shopcart, ShopcartsServiceError>;

    /// List items, optionally only those priced at or below `max_price`.
    async fn list_items(
        &self,
        customer: CustomerId,
        max_price: Option<i64>,
    ) -> Result<Vec<Item>, ShopcartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::shopcarts::items::ProductId,
        test::{TestContext, helpers::item},
    };

    use super::*;

    fn customer(id: i64) -> CustomerId {
        CustomerId::from_i64(id)
    }

    #[tokio::test]
    async fn create_shopcart_starts_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let shopcart = ctx
            .shopcarts
            .create_shopcart(NewShopcart::new(customer(42)))
            .await?;

        assert_eq!(shopcart.customer_id, customer(42));
        assert!(shopcart.item_list.is_empty());

        let found = ctx.shopcarts.get_shopcart(customer(42)).await?;

        assert_eq!(found.map(|s| s.id), Some(shopcart.id));

        Ok(())
    }

    #[tokio::test]
    async fn create_shopcart_ignores_supplied_items() -> TestResult {
        let ctx = TestContext::new().await;

        let shopcart = ctx
            .shopcarts
            .create_shopcart(NewShopcart {
                customer_id: customer(1),
                item_list: vec![item(1, 10, 1)].into(),
            })
            .await?;

        assert!(shopcart.item_list.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_shopcart_duplicate_customer_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(7)))
            .await?;

        let result = ctx
            .shopcarts
            .create_shopcart(NewShopcart::new(customer(7)))
            .await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_shopcart_unknown_customer_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.shopcarts.get_shopcart(customer(0)).await?;

        assert!(result.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn list_shopcarts_returns_all_in_creation_order() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.shopcarts.list_shopcarts().await?.is_empty());

        for id in [3, 1, 2] {
            ctx.shopcarts
                .create_shopcart(NewShopcart::new(customer(id)))
                .await?;
        }

        let customers: Vec<i64> = ctx
            .shopcarts
            .list_shopcarts()
            .await?
            .into_iter()
            .map(|s| s.customer_id.into_i64())
            .collect();

        assert_eq!(customers, vec![3, 1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_shopcart_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(5)))
            .await?;

        ctx.shopcarts.delete_shopcart(customer(5)).await?;

        assert!(ctx.shopcarts.get_shopcart(customer(5)).await?.is_none());
        assert!(ctx.shopcarts.list_shopcarts().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_shopcart_unknown_customer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.shopcarts.delete_shopcart(customer(999)).await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn save_shopcart_persists_customer_and_items() -> TestResult {
        let ctx = TestContext::new().await;

        let mut shopcart = ctx
            .shopcarts
            .create_shopcart(NewShopcart::new(customer(10)))
            .await?;

        shopcart.customer_id = customer(44);
        shopcart.item_list = vec![item(1, 10, 2)].into();

        ctx.shopcarts.save_shopcart(shopcart.clone()).await?;

        assert!(ctx.shopcarts.get_shopcart(customer(10)).await?.is_none());

        let found = ctx.shopcarts.get_shopcart(customer(44)).await?;

        assert_eq!(found.map(|s| s.item_list), Some(shopcart.item_list));

        Ok(())
    }

    #[tokio::test]
    async fn save_shopcart_deleted_cart_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let shopcart = ctx
            .shopcarts
            .create_shopcart(NewShopcart::new(customer(10)))
            .await?;

        ctx.shopcarts.delete_shopcart(customer(10)).await?;

        let result = ctx.shopcarts.save_shopcart(shopcart).await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_merges_quantities() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        ctx.shopcarts.add_item(customer(1), item(1, 10, 3)).await?;

        let shopcart = ctx.shopcarts.add_item(customer(1), item(1, 10, 2)).await?;

        assert_eq!(shopcart.item_list.as_slice(), &[item(1, 10, 5)]);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_customer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.shopcarts.add_item(customer(1), item(1, 10, 3)).await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn replace_then_update_item_preserves_order() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        let replaced = ctx
            .shopcarts
            .replace_items(customer(1), vec![item(1, 200, 2), item(2, 240, 5)].into())
            .await?;

        assert_eq!(replaced.item_list.len(), 2);

        let updated = ctx
            .shopcarts
            .update_item(
                customer(1),
                Item::new(ProductId::from_i64(1), "Bad item", 20, 5),
            )
            .await?;

        assert_eq!(
            updated.item_list.as_slice(),
            &[
                Item::new(ProductId::from_i64(1), "Bad item", 20, 5),
                item(2, 240, 5),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn replace_items_allows_duplicate_products() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        let shopcart = ctx
            .shopcarts
            .replace_items(customer(1), vec![item(1, 10, 1), item(1, 10, 2)].into())
            .await?;

        assert_eq!(shopcart.item_list.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn update_item_without_match_leaves_items_untouched() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        ctx.shopcarts.add_item(customer(1), item(1, 10, 1)).await?;

        let shopcart = ctx.shopcarts.update_item(customer(1), item(2, 20, 1)).await?;

        assert_eq!(shopcart.item_list.as_slice(), &[item(1, 10, 1)]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_drops_only_that_product() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        ctx.shopcarts
            .replace_items(customer(1), vec![item(1, 10, 2), item(2, 20, 1)].into())
            .await?;

        let shopcart = ctx
            .shopcarts
            .remove_item(customer(1), ProductId::from_i64(1))
            .await?;

        assert_eq!(shopcart.item_list.as_slice(), &[item(2, 20, 1)]);

        let unchanged = ctx
            .shopcarts
            .remove_item(customer(1), ProductId::from_i64(99))
            .await?;

        assert_eq!(unchanged.item_list.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_unknown_customer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .shopcarts
            .remove_item(customer(9999), ProductId::from_i64(123))
            .await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_item_distinguishes_missing_cart_and_item() -> TestResult {
        let ctx = TestContext::new().await;

        let missing_cart = ctx
            .shopcarts
            .get_item(customer(1), ProductId::from_i64(1))
            .await;

        assert!(
            matches!(missing_cart, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {missing_cart:?}"
        );

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        ctx.shopcarts.add_item(customer(1), item(1, 10, 1)).await?;

        let missing_item = ctx
            .shopcarts
            .get_item(customer(1), ProductId::from_i64(2))
            .await;

        assert!(
            matches!(missing_item, Err(ShopcartsServiceError::ItemNotFound)),
            "expected ItemNotFound, got {missing_item:?}"
        );

        let found = ctx
            .shopcarts
            .get_item(customer(1), ProductId::from_i64(1))
            .await?;

        assert_eq!(found, item(1, 10, 1));

        Ok(())
    }

    #[tokio::test]
    async fn list_items_filters_by_max_price() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.shopcarts
            .create_shopcart(NewShopcart::new(customer(1)))
            .await?;

        ctx.shopcarts
            .replace_items(
                customer(1),
                vec![
                    item(1, 200, 1),
                    item(2, 240, 1),
                    item(3, 320, 1),
                    item(4, 347, 1),
                ]
                .into(),
            )
            .await?;

        let all = ctx.shopcarts.list_items(customer(1), None).await?;
        let cheap = ctx.shopcarts.list_items(customer(1), Some(300)).await?;

        assert_eq!(all.len(), 4);
        assert_eq!(cheap, vec![item(1, 200, 1), item(2, 240, 1)]);

        Ok(())
    }

    #[tokio::test]
    async fn list_items_unknown_customer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.shopcarts.list_items(customer(1), Some(300)).await;

        assert!(
            matches!(result, Err(ShopcartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
