use serde::{Deserialize, Serialize};

use shopkeep_core::{ItemId, ValueObject};

use crate::item::Item;

/// An item plus the quantity of it currently held.
///
/// Treated as a value: changes produce a new `Stock` via [`Stock::with_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    item: Item,
    quantity: i64,
}

impl Stock {
    /// Negative quantities are clamped to zero.
    pub fn new(item: Item, quantity: i64) -> Self {
        Self {
            item,
            quantity: quantity.max(0),
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn item_id(&self) -> &ItemId {
        self.item.id()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_available(&self, requested: i64) -> bool {
        self.quantity >= requested
    }

    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self::new(self.item.clone(), quantity)
    }
}

impl ValueObject for Stock {}
