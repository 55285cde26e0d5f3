//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serde adapter keeping the price a JSON number (or null). Stands in for
/// `rust_decimal::serde::float_option`, which breaks once a dependency turns
/// on rust_decimal's `serde-str` feature (surrealdb does) — that feature makes
/// the delegated `Decimal` deserializer reject numbers.
mod price_float {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(price) => serializer.serialize_some(&price.to_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        raw.map(|v| {
            Decimal::from_f64(v)
                .ok_or_else(|| serde::de::Error::custom("price is not a valid number"))
        })
        .transpose()
    }
}

/// Catalog entry
///
/// A null price marks a display-only item (e.g. "market price" specials) —
/// such items never appear in the ordering flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-text group label, first ordering key of the catalog
    pub category: String,
    /// Price in SAR; `None` ⇒ not orderable
    #[serde(default, with = "price_float")]
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub icon_name: String,
    pub is_popular: bool,
    pub is_signature: bool,
    pub display_order: i32,
}

impl MenuItem {
    /// Non-null price is the orderable predicate
    pub fn is_orderable(&self) -> bool {
        self.price.is_some()
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, with = "price_float")]
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub icon_name: Option<String>,
    pub is_popular: Option<bool>,
    pub is_signature: Option<bool>,
    pub display_order: Option<i32>,
}

/// Serde adapter for the update payload's double-option price: the inner
/// value is a JSON number (or null to clear), like every other money field.
mod price_patch {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Option<Decimal>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(Some(price)) => serializer.serialize_some(&price.to_f64()),
            Some(None) => serializer.serialize_some(&Option::<f64>::None),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<Decimal>>, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(Some(match raw {
            Some(v) => Some(
                Decimal::from_f64(v)
                    .ok_or_else(|| serde::de::Error::custom("price is not a valid number"))?,
            ),
            None => None,
        }))
    }
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Double option: outer = "change this field", inner = the new price
    #[serde(default, with = "price_patch")]
    pub price: Option<Option<Decimal>>,
    pub image_url: Option<String>,
    pub icon_name: Option<String>,
    pub is_popular: Option<bool>,
    pub is_signature: Option<bool>,
    pub display_order: Option<i32>,
}
