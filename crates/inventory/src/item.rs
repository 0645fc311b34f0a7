use serde::{Deserialize, Serialize};

use shopkeep_core::{ItemId, ValueObject};

/// Closed classification of catalog entries, used for filtered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HomeFurnishing,
    BeautyCosmetics,
    SchoolSupplies,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::HomeFurnishing,
        Category::BeautyCosmetics,
        Category::SchoolSupplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::HomeFurnishing => "Home Furnishing",
            Category::BeautyCosmetics => "Beauty & Cosmetics",
            Category::SchoolSupplies => "School Supplies",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    /// Price in smallest currency unit.
    price: u64,
    category: Category,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: u64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl ValueObject for Item {}
