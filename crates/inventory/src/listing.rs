//! Console tables for stock listings.

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::stock::Stock;

/// Column-aligned table of id, name, price and quantity, one row per stock entry.
pub fn stock_table<'a>(stocks: impl IntoIterator<Item = &'a Stock>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Price", "Quantity"]);

    for stock in stocks {
        let item = stock.item();
        builder.push_record([
            item.id().to_string(),
            item.name().to_string(),
            item.price().to_string(),
            stock.quantity().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.modify(Columns::new(2..4), Alignment::right());
    table
}
