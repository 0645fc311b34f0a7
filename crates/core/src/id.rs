//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use rand::{
    Rng,
    distributions::{Alphanumeric, Distribution},
};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Catalog key of an item.
///
/// Catalog keys are free-form strings chosen by whoever defines the catalog.
/// An empty key is representable; the inventory decides whether it accepts it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Receipt number printed on an order: five ASCII alphanumeric characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId([u8; OrderId::LEN]);

impl OrderId {
    pub const LEN: usize = 5;

    /// Generate a random order id from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate an order id from the given RNG (seed it in tests for determinism).
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; Self::LEN];
        for byte in &mut bytes {
            *byte = Alphanumeric.sample(rng);
        }
        Self(bytes)
    }

    pub fn as_str(&self) -> &str {
        // Constructors only admit ASCII alphanumerics.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; Self::LEN] = s.as_bytes().try_into().map_err(|_| {
            DomainError::invalid_id(format!("OrderId: expected {} characters, got {}", Self::LEN, s.len()))
        })?;
        if !bytes.iter().all(u8::is_ascii_alphanumeric) {
            return Err(DomainError::invalid_id(format!(
                "OrderId: {s:?} is not alphanumeric"
            )));
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for OrderId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.as_str().to_string()
    }
}
