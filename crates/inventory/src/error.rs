use thiserror::Error;

use shopkeep_core::ItemId;

/// Why an inventory operation was rejected.
///
/// A rejected operation never mutates the inventory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("invalid item name or id: both are empty")]
    InvalidItemNameOrId,

    #[error("duplicate item: '{name}' is already stocked under id '{item_id}'")]
    DuplicateItem { item_id: ItemId, name: String },

    #[error("item does not exist: '{0}'")]
    ItemDoesNotExist(ItemId),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("insufficient stock for '{item_id}': {available} available, {requested} requested")]
    InsufficientStock {
        item_id: ItemId,
        available: i64,
        requested: i64,
    },
}
