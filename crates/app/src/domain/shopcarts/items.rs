//! Shopcart Items
//!
//! Untrusted JSON only becomes an [`ItemList`] through
//! [`ItemList::from_value`], which is also what its `Deserialize` impl
//! delegates to.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

use crate::{domain::shopcarts::errors::ValidationError, ids::TypedId};

/// Product marker
#[derive(Debug)]
pub struct Product;

/// Product Id
pub type ProductId = TypedId<Product>;

/// A line entry in a shopcart, keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub product_id: ProductId,
    pub description: String,
    pub price: i64,
    pub quantity: i64,
}

impl Item {
    #[must_use]
    pub fn new(
        product_id: ProductId,
        description: impl Into<String>,
        price: i64,
        quantity: i64,
    ) -> Self {
        Self {
            product_id,
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Validate a single untrusted item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `value` is an object carrying an
    /// integer `product_id`, string `description`, integer `price` and integer
    /// `quantity`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = value.as_object().ok_or(ValidationError::ItemNotAnObject)?;

        Ok(Self {
            product_id: ProductId::from_i64(integer_field(fields, "product_id")?),
            description: string_field(fields, "description")?,
            price: integer_field(fields, "price")?,
            quantity: integer_field(fields, "quantity")?,
        })
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(&value).map_err(D::Error::custom)
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    fields
        .get(field)
        .ok_or(ValidationError::MissingItemField(field))
}

fn integer_field(fields: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    required(fields, field)?
        .as_i64()
        .ok_or(ValidationError::InvalidItemField {
            field,
            expected: "an integer",
        })
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    required(fields, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidItemField {
            field,
            expected: "a string",
        })
}

/// Ordered items of one shopcart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Item>);

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an untrusted item list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAList`] when `value` is not an array, or
    /// [`ValidationError::InvalidItem`] naming the first malformed element.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let elements = value.as_array().ok_or(ValidationError::NotAList)?;

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                Item::from_value(element).map_err(|source| ValidationError::InvalidItem {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.0
    }

    /// Find the item for `product_id`.
    pub fn get(&self, product_id: ProductId) -> Option<&Item> {
        self.0.iter().find(|item| item.product_id == product_id)
    }

    /// Add `item`, or merge its quantity into the existing item with the same
    /// product id. Returns the item as it now stands in the list.
    pub fn add_or_merge(&mut self, item: Item) -> Item {
        if let Some(existing) = self
            .0
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);

            return existing.clone();
        }

        self.0.push(item.clone());

        item
    }

    /// Substitute the item sharing `item`'s product id. Items that don't match
    /// are untouched and an unmatched `item` is discarded.
    ///
    /// Returns whether an item was replaced.
    pub fn replace_item(&mut self, item: Item) -> bool {
        match self
            .0
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    /// Drop every item for `product_id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.0.len();

        self.0.retain(|item| item.product_id != product_id);

        self.0.len() != before
    }

    /// Items priced at or below `max_price`, in list order.
    pub fn filter_by_max_price(&self, max_price: i64) -> Vec<Item> {
        self.0
            .iter()
            .filter(|item| item.price <= max_price)
            .cloned()
            .collect()
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl From<ItemList> for Vec<Item> {
    fn from(items: ItemList) -> Self {
        items.0
    }
}

impl IntoIterator for ItemList {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for ItemList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(&value).map_err(D::Error::custom)
    }
}
