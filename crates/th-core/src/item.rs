//! Equipment and treasure identity
//!
//! Both catalogs are closed enums: an unknown name fails to parse at the
//! input boundary instead of falling through trade logic as a string.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Equipment the shop trades and the hunter carries.
///
/// Declaration order is the shop's listing order. Names display in
/// lower case and parse case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Boots,
    Horse,
    Boat,
    Shovel,
    Sword,
}

impl Item {
    /// Catalog base cost in gold. The sword is free; it only ever
    /// appears in samurai games.
    pub const fn base_cost(self) -> u32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Boots => 8,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Shovel => 8,
            Item::Sword => 0,
        }
    }
}

/// What a town's treasure search can turn up.
///
/// Dust is the sentinel for "no collectible treasure here"; it never
/// enters the hunter's kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Treasure {
    Dust,
    Trophy,
    Crown,
    Gem,
}

impl Treasure {
    pub const fn is_dust(self) -> bool {
        matches!(self, Treasure::Dust)
    }

    /// Pick a treasure uniformly at random (dust included)
    pub fn random(rng: &mut crate::rng::GameRng) -> Self {
        match rng.rn2(4) {
            0 => Treasure::Dust,
            1 => Treasure::Trophy,
            2 => Treasure::Crown,
            _ => Treasure::Gem,
        }
    }
}
