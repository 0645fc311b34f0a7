//! Items the demo store carries.

use shopkeep_inventory::{Category, Item};

pub fn pencil() -> Item {
    Item::new("item1", "Pencil", 20_000, Category::SchoolSupplies)
}

pub fn sofa() -> Item {
    Item::new("item2", "Sofa", 1_500_000, Category::HomeFurnishing)
}

pub fn lipstick() -> Item {
    Item::new("item3", "Lipstick", 45_000, Category::BeautyCosmetics)
}

pub fn pen() -> Item {
    Item::new("item4", "Pen", 10_000, Category::SchoolSupplies)
}

pub fn mirror() -> Item {
    Item::new("item5", "Mirror", 75_000, Category::HomeFurnishing)
}

/// Catalog entry with neither id nor name; the inventory refuses it.
pub fn blank() -> Item {
    Item::new("", "", 0, Category::HomeFurnishing)
}
