use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use shopkeep_core::ItemId;
use shopkeep_inventory::Item;

/// Cart lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// One distinct item in the cart with the quantity requested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: i64,
}

impl CartLine {
    /// `price × quantity` in smallest currency unit.
    pub fn subtotal(&self) -> u64 {
        let quantity = u64::try_from(self.quantity).unwrap_or(0);
        self.item.price().saturating_mul(quantity)
    }
}

/// A shopper's pending selections.
///
/// `items` keeps every add in insertion order (re-adding an item lists it
/// twice). The requested quantity per item id is last-write-wins, and the
/// total is derived from it, so re-adding never double counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    items: Vec<Item>,
    quantities: HashMap<ItemId, i64>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection. Stock checks are the caller's job.
    pub fn add(&mut self, item: Item, quantity: i64) {
        self.quantities.insert(item.id().clone(), quantity);
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn quantity_of(&self, item_id: &ItemId) -> Option<i64> {
        self.quantities.get(item_id).copied()
    }

    /// Distinct items in first-added order, each with its latest requested quantity.
    pub fn lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = Vec::new();
        for item in &self.items {
            match lines.iter_mut().find(|line| line.item.id() == item.id()) {
                Some(line) => line.item = item.clone(),
                None => lines.push(CartLine {
                    item: item.clone(),
                    quantity: self.quantity_of(item.id()).unwrap_or(0),
                }),
            }
        }
        lines
    }

    pub fn total_price(&self) -> u64 {
        self.lines()
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.quantities.clear();
    }

    /// Write the cart's items (name, price) in insertion order, then the total.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Cart is empty");
        }
        writeln!(out, "{}", item_table(&self.items))?;
        writeln!(out, "Total: {}", self.total_price())
    }
}

fn item_table(items: &[Item]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Name", "Price"]);
    for item in items {
        builder.push_record([item.name().to_string(), item.price().to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.modify(Columns::new(1..2), Alignment::right());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_inventory::Category;

    fn pencil() -> Item {
        Item::new("item1", "Pencil", 20_000, Category::SchoolSupplies)
    }

    fn lipstick() -> Item {
        Item::new("item3", "Lipstick", 45_000, Category::BeautyCosmetics)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = ShoppingCart::new();
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.total_price(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn total_is_price_times_quantity_per_distinct_item() {
        let mut cart = ShoppingCart::new();
        cart.add(pencil(), 2);
        cart.add(lipstick(), 1);

        assert_eq!(cart.state(), CartState::NonEmpty);
        assert_eq!(cart.total_price(), 2 * 20_000 + 45_000);
    }

    #[test]
    fn re_adding_keeps_duplicate_entry_but_last_quantity_wins() {
        let mut cart = ShoppingCart::new();
        cart.add(pencil(), 3);
        cart.add(lipstick(), 1);
        cart.add(pencil(), 1);

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.quantity_of(pencil().id()), Some(1));

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item.id(), pencil().id());
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(cart.total_price(), 20_000 + 45_000);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let half = u64::MAX / 2 + 1;
        let mut cart = ShoppingCart::new();
        cart.add(Item::new("big1", "Chandelier", half, Category::HomeFurnishing), 1);
        cart.add(Item::new("big2", "Piano", half, Category::HomeFurnishing), 1);

        assert_eq!(cart.total_price(), u64::MAX);

        let mut out = Vec::new();
        cart.write_to(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(&format!("Total: {}", u64::MAX)));
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut cart = ShoppingCart::new();
        cart.add(pencil(), 1);
        cart.clear();

        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.quantity_of(pencil().id()), None);
    }

    #[test]
    fn write_to_lists_items_in_insertion_order() {
        let mut cart = ShoppingCart::new();
        cart.add(lipstick(), 1);
        cart.add(pencil(), 2);

        let mut out = Vec::new();
        cart.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lipstick_at = text.find("Lipstick").unwrap();
        let pencil_at = text.find("Pencil").unwrap();
        assert!(lipstick_at < pencil_at);
        assert!(text.contains("Total: 85000"));
    }

    #[test]
    fn write_to_reports_empty_cart() {
        let mut out = Vec::new();
        ShoppingCart::new().write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cart is empty\n");
    }
}
