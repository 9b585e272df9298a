//! The in-progress order a customer is filling in.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{ProductId, CATALOG};

/// Largest quantity of a single sauce one order may carry.
pub const MAX_QUANTITY: u32 = 100;

/// Per-product quantities.
///
/// Backed by a fixed array indexed by [`ProductId`], so there is always
/// exactly one entry per catalog product. Every entry stays within
/// `0..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantities([u32; ProductId::COUNT]);

impl Quantities {
    pub fn get(&self, id: ProductId) -> u32 {
        self.0[id.index()]
    }

    /// Store `quantity` for `id` if it is in range. Returns whether the
    /// value was accepted.
    pub fn set(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity > MAX_QUANTITY {
            return false;
        }
        self.0[id.index()] = quantity;
        true
    }

    /// Sum over all products.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(id, quantity)` pairs in catalog order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        ProductId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl Serialize for Quantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ProductId::COUNT))?;
        for (id, quantity) in self.iter() {
            map.serialize_entry(id.as_str(), &quantity)?;
        }
        map.end()
    }
}

/// Interpret quantity text the way a number field reports it.
///
/// Leading whitespace and an optional sign are skipped and the leading run
/// of digits is read, so `"12abc"` is 12 and `"3.9"` is 3. A cleared field
/// counts as 0. Returns `None` when the result would be outside
/// `0..=MAX_QUANTITY` or the text has no leading digits at all.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let text = raw.trim_start();
    if text.trim_end().is_empty() {
        return Some(0);
    }

    let (negative, rest) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Overflow is out of range too.
    let value: u64 = rest[..digits].parse().ok()?;
    if negative {
        return (value == 0).then_some(0);
    }
    (value <= u64::from(MAX_QUANTITY)).then_some(value as u32)
}

/// Customer identity fields plus quantities.
///
/// Text fields hold exactly what was typed; trimming only happens during
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct OrderDraft {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub quantities: Quantities,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply raw quantity text to one product.
    ///
    /// Unparsable or out-of-range input is dropped silently and the previous
    /// quantity kept. Returns whether the draft changed.
    pub fn update_quantity(&mut self, id: ProductId, raw: &str) -> bool {
        match parse_quantity(raw) {
            Some(quantity) => {
                let changed = self.quantities.get(id) != quantity;
                self.quantities.set(id, quantity);
                changed
            }
            None => {
                tracing::debug!(product = %id, input = raw, "Ignoring out-of-range quantity");
                false
            }
        }
    }

    /// Human-readable summary such as `"2 x Mr. Mild, 1 x Horny Habanero"`.
    ///
    /// Always walks the catalog so the order of items never depends on how
    /// quantities were entered.
    pub fn ordered_items(&self) -> String {
        CATALOG
            .iter()
            .filter_map(|product| {
                let quantity = self.quantities.get(product.id);
                (quantity > 0).then(|| format!("{} x {}", quantity, product.name))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Back to all-empty, all-zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
