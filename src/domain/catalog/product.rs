//! Product aggregate entity.
//!
//! Catalog products are the authoritative source of prices. Checkout
//! snapshots a product's title and price into order lines; the catalog
//! row itself stays freely editable by admins.

use crate::domain::foundation::{ProductId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Product aggregate - a purchasable catalog entry.
///
/// # Invariants
///
/// - `title` is non-empty
/// - `price_cents` and `stock` are never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product.
    pub id: ProductId,

    /// Display title, non-empty.
    pub title: String,

    /// Longer description, if any.
    pub description: Option<String>,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units available. Catalog data only; not decremented by payment.
    pub stock: i32,

    /// Opaque image reference (URL or storage key), if any.
    pub image: Option<String>,

    /// When the product was created.
    pub created_at: Timestamp,
}

impl Product {
    /// Creates a new product with validated fields.
    ///
    /// # Errors
    ///
    /// Returns error if the title is empty or price/stock are negative.
    pub fn create(
        id: ProductId,
        title: impl Into<String>,
        description: Option<String>,
        price_cents: i64,
        stock: i32,
        image: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if price_cents < 0 {
            return Err(ValidationError::invalid_format(
                "price_cents",
                "must not be negative",
            ));
        }
        if stock < 0 {
            return Err(ValidationError::invalid_format("stock", "must not be negative"));
        }
        Ok(Self {
            id,
            title,
            description,
            price_cents,
            stock,
            image,
            created_at: Timestamp::now(),
        })
    }

    /// Applies a patch, keeping stored values for absent fields.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

/// Partial update for a product.
///
/// `None` fields keep the stored value. Optional columns cannot be
/// cleared through a patch, only replaced; that matches the admin UI,
/// which always resubmits the full form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub image: Option<String>,
}

impl ProductPatch {
    /// Validates the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns error if a present title is empty or a present
    /// price/stock is negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
        }
        if let Some(price_cents) = self.price_cents {
            if price_cents < 0 {
                return Err(ValidationError::invalid_format(
                    "price_cents",
                    "must not be negative",
                ));
            }
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Err(ValidationError::invalid_format("stock", "must not be negative"));
            }
        }
        Ok(())
    }
}
