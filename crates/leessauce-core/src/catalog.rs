//! The fixed sauce catalog.
//!
//! Three products exist for the lifetime of the process. Their order in
//! [`CATALOG`] is the canonical display order used everywhere a list of
//! products is rendered or summarised.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Identifier of one of the three catalog products.
///
/// A closed enum rather than a string key, so an order draft can never refer
/// to a product that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductId {
    MrMild,
    HolyJalapeno,
    HornyHabanero,
}

impl ProductId {
    /// Number of products in the catalog.
    pub const COUNT: usize = 3;

    /// All ids in canonical display order.
    pub const ALL: [ProductId; Self::COUNT] = [
        ProductId::MrMild,
        ProductId::HolyJalapeno,
        ProductId::HornyHabanero,
    ];

    /// Stable string key (`mr-mild`, `holy-jalapeno`, `horny-habanero`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::MrMild => "mr-mild",
            ProductId::HolyJalapeno => "holy-jalapeno",
            ProductId::HornyHabanero => "horny-habanero",
        }
    }

    /// Position of this product in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            ProductId::MrMild => 0,
            ProductId::HolyJalapeno => 1,
            ProductId::HornyHabanero => 2,
        }
    }

    /// The catalog record for this id.
    pub fn product(&self) -> &'static Product {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductId {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| OrderError::UnknownProduct(s.to_string()))
    }
}

/// How hot a sauce is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeatLevel {
    Mild = 1,
    Medium = 2,
    ExtraHot = 3,
}

impl HeatLevel {
    /// Pepper indicator shown next to the product name in the order form.
    pub fn peppers(&self) -> &'static str {
        match self {
            HeatLevel::Mild => "🌶️",
            HeatLevel::Medium => "🌶️🌶️",
            HeatLevel::ExtraHot => "🌶️🌶️🌶️",
        }
    }

    /// Badge text used by the showcase grid.
    pub fn label(&self) -> &'static str {
        match self {
            HeatLevel::Mild => "Mild",
            HeatLevel::Medium => "Medium",
            HeatLevel::ExtraHot => "Extra Hot",
        }
    }

    /// Ordinal value, 1 (mildest) to 3.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// A catalog record. Immutable and `'static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    /// One-line pitch for the showcase grid.
    pub tagline: &'static str,
    /// Long copy shown beside the quantity input.
    pub description: &'static str,
    pub heat: HeatLevel,
    /// Opaque asset path, resolved by the UI.
    pub image: &'static str,
}

/// The catalog, in canonical display order.
pub static CATALOG: [Product; ProductId::COUNT] = [
    Product {
        id: ProductId::MrMild,
        name: "Mr. Mild",
        tagline: "Cool, smooth, and flavourful",
        description: "A smooth and flavourful sauce with a gentle kick. Perfect for everyday \
            meals and those who appreciate flavour over fire. This versatile condiment enhances \
            your favourite dishes without overwhelming them. Crafted with carefully selected \
            mild peppers, garlic, and herbs, Mr. Mild delivers a subtle warmth that builds \
            gently on the palate. Ideal for those new to hot sauce or anyone seeking a \
            balanced, everyday heat.",
        heat: HeatLevel::Mild,
        image: "/assets/mr-mild.jpeg",
    },
    Product {
        id: ProductId::HolyJalapeno,
        name: "Holy Jalapeño",
        tagline: "Divine flavour with a heavenly kick",
        description: "A heavenly balance of heat and flavour from fresh jalapeños. Divine \
            taste meets blessed heat in every drop. This celestial creation features \
            hand-picked jalapeños combined with hints of lime and coriander, creating a \
            bright, zesty profile that's simply divine. The medium heat level provides a \
            satisfying kick that complements rather than dominates. Perfect for tacos, \
            nachos, sandwiches, and anywhere you need a blessed burst of flavour.",
        heat: HeatLevel::Medium,
        image: "/assets/holy-jalapeno.jpeg",
    },
    Product {
        id: ProductId::HornyHabanero,
        name: "Horny Habanero",
        tagline: "Sinfully spicy, wickedly delicious",
        description: "Hot and fiery with the bold flavour of habaneros. Not for the faint of \
            heart! This devil of a sauce brings serious heat. Featuring premium habanero \
            peppers known for their intense heat and fruity undertones, this sauce delivers \
            a passionate punch that'll make you sweat. The complex flavour profile balances \
            the searing heat with hints of tropical fruit and a touch of sweetness. For those \
            who crave extreme heat and aren't afraid to dance with the devil.",
        heat: HeatLevel::ExtraHot,
        image: "/assets/horny-habanero.jpeg",
    },
];

/// Iterate the catalog in display order.
pub fn products() -> impl Iterator<Item = &'static Product> {
    CATALOG.iter()
}
