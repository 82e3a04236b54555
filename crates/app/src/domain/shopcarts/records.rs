//! Shopcart Records
//!
//! The plain `{id, customer_id, item_list}` shape shopcarts travel in.

use serde::Serialize;
use serde_json::Value;

use crate::domain::shopcarts::{
    errors::ValidationError,
    items::ItemList,
    models::{CustomerId, NewShopcart, Shopcart, ShopcartId},
};

/// Shopcart Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopcartRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ShopcartId>,
    pub customer_id: CustomerId,
    pub item_list: ItemList,
}

impl ShopcartRecord {
    /// Read a record from untrusted JSON.
    ///
    /// `id` is optional and only checked for type; the store assigns it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoData`] when `value` is null or not an
    /// object, [`ValidationError::MissingField`] when `customer_id` or
    /// `item_list` is absent, [`ValidationError::InvalidAttribute`] for a
    /// non-integer `customer_id` or `id`, and the item validator's error for a
    /// malformed `item_list`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = value.as_object().ok_or(ValidationError::NoData)?;

        let id = match fields.get("id") {
            None | Some(Value::Null) => None,
            Some(id) => Some(ShopcartId::from_i64(id.as_i64().ok_or(
                ValidationError::InvalidAttribute {
                    field: "id",
                    expected: "an integer",
                },
            )?)),
        };

        let customer_id = fields
            .get("customer_id")
            .ok_or(ValidationError::MissingField("customer_id"))?
            .as_i64()
            .ok_or(ValidationError::InvalidAttribute {
                field: "customer_id",
                expected: "an integer",
            })?;

        let item_list = ItemList::from_value(
            fields
                .get("item_list")
                .ok_or(ValidationError::MissingField("item_list"))?,
        )?;

        Ok(Self {
            id,
            customer_id: CustomerId::from_i64(customer_id),
            item_list,
        })
    }
}

impl From<&Shopcart> for ShopcartRecord {
    fn from(shopcart: &Shopcart) -> Self {
        Self {
            id: Some(shopcart.id),
            customer_id: shopcart.customer_id,
            item_list: shopcart.item_list.clone(),
        }
    }
}

impl From<Shopcart> for ShopcartRecord {
    fn from(shopcart: Shopcart) -> Self {
        Self {
            id: Some(shopcart.id),
            customer_id: shopcart.customer_id,
            item_list: shopcart.item_list,
        }
    }
}

impl From<ShopcartRecord> for NewShopcart {
    fn from(record: ShopcartRecord) -> Self {
        Self {
            customer_id: record.customer_id,
            item_list: record.item_list,
        }
    }
}
