//! Terrain surrounding a town and the equipment needed to cross it

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::hunter::Hunter;
use crate::item::Item;
use crate::rng::GameRng;

/// The obstacle between a town and the next one.
///
/// Each terrain requires exactly one item to cross; the mapping is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Marsh,
    Jungle,
}

impl Terrain {
    /// The item a hunter must carry to cross this terrain
    pub const fn required_item(self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Marsh => Item::Boots,
            Terrain::Jungle => Item::Machete,
        }
    }

    /// True iff the hunter currently carries the required item
    pub fn can_cross(self, hunter: &Hunter) -> bool {
        hunter.has_item(self.required_item())
    }

    /// Pick a terrain uniformly at random
    pub fn random(rng: &mut GameRng) -> Self {
        match rng.rn2(6) {
            0 => Terrain::Mountains,
            1 => Terrain::Ocean,
            2 => Terrain::Plains,
            3 => Terrain::Desert,
            4 => Terrain::Marsh,
            _ => Terrain::Jungle,
        }
    }
}
