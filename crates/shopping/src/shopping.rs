use std::io;

use chrono::{DateTime, Utc};
use rand::Rng;

use shopkeep_core::{ItemId, OrderId};
use shopkeep_inventory::Inventory;

use crate::cart::ShoppingCart;
use crate::error::ShoppingError;
use crate::order::Order;

/// A shopping session: one cart bound to the store inventory.
///
/// Adding to the cart only checks stock; inventory is decremented at checkout.
#[derive(Debug, Clone, Default)]
pub struct Shopping {
    inventory: Inventory,
    cart: ShoppingCart,
}

impl Shopping {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            cart: ShoppingCart::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Put `quantity` of an item in the cart, replacing any earlier request for it.
    pub fn add_to_cart(&mut self, item_id: &ItemId, quantity: i64) -> Result<(), ShoppingError> {
        let stock = self
            .inventory
            .get(item_id)
            .ok_or_else(|| ShoppingError::ItemNotFound(item_id.clone()))?;

        if quantity <= 0 {
            return Err(ShoppingError::InvalidQuantity(quantity));
        }
        if !stock.is_available(quantity) {
            return Err(ShoppingError::QuantityInsufficient {
                item_id: item_id.clone(),
                available: stock.quantity(),
                requested: quantity,
            });
        }

        let item = stock.item().clone();
        self.cart.add(item, quantity);
        tracing::debug!(
            item_id = %item_id,
            quantity,
            total_price = self.cart.total_price(),
            "added to cart"
        );
        Ok(())
    }

    pub fn print_cart(&self, out: impl io::Write) -> io::Result<()> {
        self.cart.write_to(out)
    }

    /// Check out now with a random order id.
    pub fn checkout(&mut self) -> Result<Order, ShoppingError> {
        self.checkout_at(Utc::now())
    }

    pub fn checkout_at(&mut self, purchased_at: DateTime<Utc>) -> Result<Order, ShoppingError> {
        self.checkout_with(purchased_at, &mut rand::thread_rng())
    }

    /// Turn the cart into an order, decrement inventory, and empty the cart.
    ///
    /// Every line is checked against current stock first; if any line cannot be
    /// fulfilled nothing is decremented and the cart is left as is.
    pub fn checkout_with<R: Rng + ?Sized>(
        &mut self,
        purchased_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Order, ShoppingError> {
        if self.cart.is_empty() {
            return Err(ShoppingError::EmptyCart);
        }

        // Lines carry the item as currently stocked, which may have been
        // replaced under the same id since it was put in the cart.
        let mut lines = self.cart.lines();
        for line in &mut lines {
            let item_id = line.item.id();
            let stock = self
                .inventory
                .get(item_id)
                .ok_or_else(|| ShoppingError::ItemNotFound(item_id.clone()))?;
            if !stock.is_available(line.quantity) {
                return Err(ShoppingError::QuantityInsufficient {
                    item_id: item_id.clone(),
                    available: stock.quantity(),
                    requested: line.quantity,
                });
            }
            line.item = stock.item().clone();
        }

        for line in &lines {
            self.inventory.decrease(line.item.id(), line.quantity)?;
        }

        let order = Order::new(
            OrderId::generate_with(rng),
            purchased_at,
            self.cart.items().to_vec(),
            lines,
        );
        self.cart.clear();

        tracing::info!(
            order_id = %order.order_id(),
            lines = order.lines().len(),
            total = order.total(),
            "checkout completed"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};
    use shopkeep_inventory::{Category, Item};

    fn pencil() -> Item {
        Item::new("item1", "Pencil", 20_000, Category::SchoolSupplies)
    }

    fn pen() -> Item {
        Item::new("item4", "Pen", 10_000, Category::SchoolSupplies)
    }

    fn mirror() -> Item {
        Item::new("item5", "Mirror", 75_000, Category::HomeFurnishing)
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn session() -> Shopping {
        let mut inventory = Inventory::new();
        inventory.add_new(pencil(), 1).unwrap();
        inventory.add_new(pen(), 1).unwrap();
        inventory.add_new(mirror(), 4).unwrap();
        Shopping::new(inventory)
    }

    #[test]
    fn add_to_cart_unknown_item_is_rejected() {
        let mut shopping = session();
        let missing = ItemId::from("nope");
        assert_eq!(
            shopping.add_to_cart(&missing, 1).unwrap_err(),
            ShoppingError::ItemNotFound(missing)
        );
        assert!(shopping.cart().is_empty());
    }

    #[test]
    fn add_to_cart_more_than_stocked_is_rejected() {
        let mut shopping = session();
        assert_eq!(
            shopping.add_to_cart(pencil().id(), 2).unwrap_err(),
            ShoppingError::QuantityInsufficient {
                item_id: pencil().id().clone(),
                available: 1,
                requested: 2,
            }
        );
        assert!(shopping.cart().is_empty());
    }

    #[test]
    fn add_to_cart_non_positive_quantity_is_rejected() {
        let mut shopping = session();
        assert_eq!(
            shopping.add_to_cart(pen().id(), 0).unwrap_err(),
            ShoppingError::InvalidQuantity(0)
        );
    }

    #[test]
    fn add_to_cart_does_not_touch_inventory() {
        let mut shopping = session();
        shopping.add_to_cart(mirror().id(), 3).unwrap();

        assert_eq!(shopping.cart().total_price(), 3 * 75_000);
        assert_eq!(shopping.inventory().get(mirror().id()).unwrap().quantity(), 4);
    }

    #[test]
    fn checkout_empty_cart_is_rejected_and_inventory_unchanged() {
        let mut shopping = session();
        let before = shopping.inventory().clone();

        assert_eq!(shopping.checkout().unwrap_err(), ShoppingError::EmptyCart);
        assert_eq!(shopping.inventory(), &before);
    }

    #[test]
    fn checkout_decrements_inventory_and_resets_cart() {
        let mut shopping = session();
        shopping.add_to_cart(pen().id(), 1).unwrap();
        shopping.add_to_cart(mirror().id(), 2).unwrap();

        let order = shopping
            .checkout_with(test_time(), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(order.total(), 10_000 + 2 * 75_000);
        assert_eq!(order.date_purchased(), test_time());
        assert_eq!(shopping.inventory().get(pen().id()).unwrap().quantity(), 0);
        assert_eq!(shopping.inventory().get(mirror().id()).unwrap().quantity(), 2);
        assert!(shopping.cart().is_empty());
    }

    #[test]
    fn checkout_uses_last_requested_quantity_once_per_item() {
        let mut shopping = session();
        shopping.add_to_cart(mirror().id(), 4).unwrap();
        shopping.add_to_cart(mirror().id(), 1).unwrap();

        let order = shopping.checkout_at(test_time()).unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(shopping.inventory().get(mirror().id()).unwrap().quantity(), 3);
    }

    #[test]
    fn checkout_is_all_or_nothing_when_stock_changed() {
        let mut shopping = session();
        shopping.add_to_cart(mirror().id(), 2).unwrap();
        shopping.add_to_cart(pen().id(), 1).unwrap();
        shopping.inventory_mut().decrease(pen().id(), 1).unwrap();
        let before = shopping.inventory().clone();

        let err = shopping.checkout_at(test_time()).unwrap_err();

        assert_eq!(
            err,
            ShoppingError::QuantityInsufficient {
                item_id: pen().id().clone(),
                available: 0,
                requested: 1,
            }
        );
        assert_eq!(shopping.inventory(), &before);
        assert_eq!(shopping.cart().len(), 2);
    }

    #[test]
    fn checkout_prices_lines_from_the_item_currently_stocked() {
        let mut shopping = session();
        shopping.add_to_cart(pencil().id(), 1).unwrap();

        let marker = Item::new("item1", "Marker", 30_000, Category::SchoolSupplies);
        shopping.inventory_mut().add_new(marker.clone(), 2).unwrap();

        let order = shopping.checkout_at(test_time()).unwrap();

        assert_eq!(order.lines()[0].item, marker);
        assert_eq!(order.total(), 30_000);
        assert_eq!(shopping.inventory().get(marker.id()).unwrap().quantity(), 1);

        let mut receipt = Vec::new();
        order.write_to(&mut receipt).unwrap();
        let receipt = String::from_utf8(receipt).unwrap();
        assert!(receipt.contains("Marker"));
        assert!(!receipt.contains("Pencil"));
    }

    #[test]
    fn seeded_checkouts_get_the_same_order_id() {
        let mut a = session();
        let mut b = session();
        a.add_to_cart(pen().id(), 1).unwrap();
        b.add_to_cart(pen().id(), 1).unwrap();

        let order_a = a.checkout_with(test_time(), &mut StdRng::seed_from_u64(42)).unwrap();
        let order_b = b.checkout_with(test_time(), &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(order_a.order_id(), order_b.order_id());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: add_to_cart never accepts more than is in stock.
            #[test]
            fn add_to_cart_respects_stock(requested in 1i64..10) {
                let mut shopping = session();
                let result = shopping.add_to_cart(mirror().id(), requested);

                if requested > 4 {
                    prop_assert!(result.is_err());
                    prop_assert!(shopping.cart().is_empty());
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(shopping.cart().quantity_of(mirror().id()), Some(requested));
                }
            }
        }
    }
}
