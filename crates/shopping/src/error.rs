use thiserror::Error;

use shopkeep_core::ItemId;
use shopkeep_inventory::InventoryError;

/// Why a cart or checkout operation was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShoppingError {
    #[error("cart is empty, nothing to check out")]
    EmptyCart,

    #[error("item not found in inventory: '{0}'")]
    ItemNotFound(ItemId),

    #[error("not enough '{item_id}' in stock: {available} available, {requested} requested")]
    QuantityInsufficient {
        item_id: ItemId,
        available: i64,
        requested: i64,
    },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
