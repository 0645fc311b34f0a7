use std::collections::BTreeMap;
use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopkeep_core::{Aggregate, ItemId};
use shopkeep_events::{Event, EventJournal};

use crate::error::InventoryError;
use crate::item::{Category, Item};
use crate::listing;
use crate::stock::Stock;

/// Command: AddNewItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddNewItem {
    pub item: Item,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: IncreaseStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreaseStock {
    pub item_id: ItemId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DecreaseStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreaseStock {
    pub item_id: ItemId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddNewItem(AddNewItem),
    IncreaseStock(IncreaseStock),
    DecreaseStock(DecreaseStock),
}

/// Event: ItemAdded. Replaces whatever stock was held under the item's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: Item,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockIncreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockIncreased {
    pub item_id: ItemId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockDecreased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDecreased {
    pub item_id: ItemId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    StockIncreased(StockIncreased),
    StockDecreased(StockDecreased),
}

impl InventoryEvent {
    pub fn item_id(&self) -> &ItemId {
        match self {
            InventoryEvent::ItemAdded(e) => e.item.id(),
            InventoryEvent::StockIncreased(e) => &e.item_id,
            InventoryEvent::StockDecreased(e) => &e.item_id,
        }
    }

    pub fn quantity(&self) -> i64 {
        match self {
            InventoryEvent::ItemAdded(e) => e.quantity,
            InventoryEvent::StockIncreased(e) => e.quantity,
            InventoryEvent::StockDecreased(e) => e.quantity,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::StockIncreased(_) => "inventory.stock.increased",
            InventoryEvent::StockDecreased(_) => "inventory.stock.decreased",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::StockIncreased(e) => e.occurred_at,
            InventoryEvent::StockDecreased(e) => e.occurred_at,
        }
    }
}

/// The store's stock: one [`Stock`] per item id.
///
/// Invariant: every key equals the id of the item stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stocks: BTreeMap<ItemId, Stock>,
    journal: EventJournal<InventoryEvent>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: &ItemId) -> Option<&Stock> {
        self.stocks.get(item_id)
    }

    /// All stock in item-id order.
    pub fn iter(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    pub fn stocks_in(&self, category: Category) -> impl Iterator<Item = &Stock> {
        self.iter()
            .filter(move |stock| stock.item().category() == category)
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Every event applied so far, oldest first.
    pub fn history(&self) -> &EventJournal<InventoryEvent> {
        &self.journal
    }

    /// Stock a new catalog entry, replacing any stock under the same id with a
    /// different name.
    pub fn add_new(&mut self, item: Item, quantity: i64) -> Result<Stock, InventoryError> {
        let item_id = item.id().clone();
        self.run(
            &InventoryCommand::AddNewItem(AddNewItem {
                item,
                quantity,
                occurred_at: Utc::now(),
            }),
            item_id,
        )
    }

    pub fn increase(&mut self, item_id: &ItemId, quantity: i64) -> Result<Stock, InventoryError> {
        self.run(
            &InventoryCommand::IncreaseStock(IncreaseStock {
                item_id: item_id.clone(),
                quantity,
                occurred_at: Utc::now(),
            }),
            item_id.clone(),
        )
    }

    pub fn decrease(&mut self, item_id: &ItemId, quantity: i64) -> Result<Stock, InventoryError> {
        self.run(
            &InventoryCommand::DecreaseStock(DecreaseStock {
                item_id: item_id.clone(),
                quantity,
                occurred_at: Utc::now(),
            }),
            item_id.clone(),
        )
    }

    /// Write a table of every stocked item in `category`.
    pub fn list_by_category(&self, category: Category, mut out: impl io::Write) -> io::Result<()> {
        writeln!(out, "{category}")?;
        writeln!(out, "{}", listing::stock_table(self.stocks_in(category)))
    }

    fn run(
        &mut self,
        command: &InventoryCommand,
        item_id: ItemId,
    ) -> Result<Stock, InventoryError> {
        match self.execute(command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        event_type = event.event_type(),
                        item_id = %event.item_id(),
                        quantity = event.quantity(),
                        "inventory event applied"
                    );
                }
                self.get(&item_id)
                    .cloned()
                    .ok_or(InventoryError::ItemDoesNotExist(item_id))
            }
            Err(err) => {
                tracing::debug!(item_id = %item_id, error = %err, "inventory command rejected");
                Err(err)
            }
        }
    }

    fn existing(&self, item_id: &ItemId) -> Result<&Stock, InventoryError> {
        self.get(item_id)
            .ok_or_else(|| InventoryError::ItemDoesNotExist(item_id.clone()))
    }

    fn ensure_positive(quantity: i64) -> Result<(), InventoryError> {
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddNewItem) -> Result<Vec<InventoryEvent>, InventoryError> {
        if cmd.item.id().is_empty() && cmd.item.name().is_empty() {
            return Err(InventoryError::InvalidItemNameOrId);
        }
        if cmd.quantity < 0 {
            return Err(InventoryError::InvalidQuantity(cmd.quantity));
        }
        if let Some(existing) = self.get(cmd.item.id()) {
            if existing.item().name() == cmd.item.name() {
                return Err(InventoryError::DuplicateItem {
                    item_id: cmd.item.id().clone(),
                    name: cmd.item.name().to_string(),
                });
            }
        }

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_increase(&self, cmd: &IncreaseStock) -> Result<Vec<InventoryEvent>, InventoryError> {
        let stock = self.existing(&cmd.item_id)?;
        Self::ensure_positive(cmd.quantity)?;

        if stock.quantity().checked_add(cmd.quantity).is_none() {
            return Err(InventoryError::InvalidQuantity(cmd.quantity));
        }

        Ok(vec![InventoryEvent::StockIncreased(StockIncreased {
            item_id: cmd.item_id.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_decrease(&self, cmd: &DecreaseStock) -> Result<Vec<InventoryEvent>, InventoryError> {
        let stock = self.existing(&cmd.item_id)?;
        Self::ensure_positive(cmd.quantity)?;

        if !stock.is_available(cmd.quantity) {
            return Err(InventoryError::InsufficientStock {
                item_id: cmd.item_id.clone(),
                available: stock.quantity(),
                requested: cmd.quantity,
            });
        }

        Ok(vec![InventoryEvent::StockDecreased(StockDecreased {
            item_id: cmd.item_id.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = InventoryError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.stocks
                    .insert(e.item.id().clone(), Stock::new(e.item.clone(), e.quantity));
            }
            InventoryEvent::StockIncreased(e) => {
                if let Some(stock) = self.stocks.get_mut(&e.item_id) {
                    *stock = stock.with_quantity(stock.quantity().saturating_add(e.quantity));
                }
            }
            InventoryEvent::StockDecreased(e) => {
                if let Some(stock) = self.stocks.get_mut(&e.item_id) {
                    *stock = stock.with_quantity(stock.quantity().saturating_sub(e.quantity));
                }
            }
        }

        self.journal.record(event.clone());
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddNewItem(cmd) => self.handle_add(cmd),
            InventoryCommand::IncreaseStock(cmd) => self.handle_increase(cmd),
            InventoryCommand::DecreaseStock(cmd) => self.handle_decrease(cmd),
        }
    }

    fn version(&self) -> u64 {
        self.journal.last_sequence()
    }
}
