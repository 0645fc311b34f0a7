use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use shopkeep_core::OrderId;
use shopkeep_inventory::Item;

use crate::cart::CartLine;

/// Checkout receipt. Printed once and then dropped; nothing keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    date_purchased: DateTime<Utc>,
    /// Cart items as they were added, duplicates included.
    items: Vec<Item>,
    lines: Vec<CartLine>,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        date_purchased: DateTime<Utc>,
        items: Vec<Item>,
        lines: Vec<CartLine>,
    ) -> Self {
        Self {
            order_id,
            date_purchased,
            items,
            lines,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn date_purchased(&self) -> DateTime<Utc> {
        self.date_purchased
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Print the receipt.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        writeln!(out, "Order #{}", self.order_id)?;
        writeln!(
            out,
            "Purchased: {}",
            self.date_purchased.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        let mut builder = Builder::default();
        builder.push_record(["Item", "Price", "Qty", "Subtotal"]);
        for line in &self.lines {
            builder.push_record([
                line.item.name().to_string(),
                line.item.price().to_string(),
                line.quantity.to_string(),
                line.subtotal().to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::psql());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Total: {}", self.total())
    }
}
