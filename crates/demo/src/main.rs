//! Runs a fixed shopping session against an in-memory store and prints the
//! results. Rejected operations are reported and the session carries on.

mod catalog;

use std::io::{self, Write};

use anyhow::Context;

use shopkeep_inventory::{Category, Inventory};
use shopkeep_shopping::Shopping;

fn report<T, E: std::fmt::Display>(
    out: &mut impl Write,
    action: &str,
    result: Result<T, E>,
) -> io::Result<Option<T>> {
    match result {
        Ok(value) => {
            writeln!(out, "{action}: ok")?;
            Ok(Some(value))
        }
        Err(err) => {
            tracing::warn!(action, error = %err, "operation rejected");
            writeln!(out, "{action}: {err}")?;
            Ok(None)
        }
    }
}

fn stock_store(out: &mut impl Write, inventory: &mut Inventory) -> io::Result<()> {
    report(out, "add Pencil x1", inventory.add_new(catalog::pencil(), 1))?;
    report(out, "add Sofa x2", inventory.add_new(catalog::sofa(), 2))?;
    report(out, "add Lipstick x10", inventory.add_new(catalog::lipstick(), 10))?;
    report(out, "add Pen x1", inventory.add_new(catalog::pen(), 1))?;
    report(out, "add Mirror x3", inventory.add_new(catalog::mirror(), 3))?;

    report(out, "add Pencil again", inventory.add_new(catalog::pencil(), 5))?;
    report(out, "add blank item", inventory.add_new(catalog::blank(), 1))?;

    let lipstick = catalog::lipstick();
    let sofa = catalog::sofa();
    report(out, "increase Lipstick by 5", inventory.increase(lipstick.id(), 5))?;
    report(out, "increase Lipstick by -2", inventory.increase(lipstick.id(), -2))?;
    report(out, "decrease Sofa by 1", inventory.decrease(sofa.id(), 1))?;
    report(out, "decrease Sofa by 4", inventory.decrease(sofa.id(), 4))?;
    report(out, "increase unknown item", inventory.increase(&"item9".into(), 1))?;
    Ok(())
}

fn list_all(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    for category in Category::ALL {
        writeln!(out)?;
        inventory.list_by_category(category, &mut *out)?;
    }
    Ok(())
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let mut inventory = Inventory::new();
    stock_store(out, &mut inventory)?;
    list_all(out, &inventory)?;

    let mut shopping = Shopping::new(inventory);
    writeln!(out)?;
    report(out, "checkout empty cart", shopping.checkout())?;
    report(out, "cart Pencil x2", shopping.add_to_cart(catalog::pencil().id(), 2))?;
    report(out, "cart Pen x1", shopping.add_to_cart(catalog::pen().id(), 1))?;
    report(out, "cart Mirror x2", shopping.add_to_cart(catalog::mirror().id(), 2))?;
    report(out, "cart unknown item", shopping.add_to_cart(&"item9".into(), 1))?;

    writeln!(out)?;
    shopping.print_cart(&mut *out)?;

    writeln!(out)?;
    if let Some(order) = report(out, "checkout", shopping.checkout())? {
        order.write_to(&mut *out)?;
    }

    writeln!(out)?;
    shopping.print_cart(&mut *out)?;
    list_all(out, shopping.inventory())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    shopkeep_observability::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out).context("failed to write demo output")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!("demo finished");
    Ok(())
}
