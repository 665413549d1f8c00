//! The hunter: gold, equipment, and the treasure kit

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::consts::TREASURE_KIT_CAPACITY;
use crate::item::{Item, Treasure};

/// Result of adding a treasure to the kit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureGain {
    /// New to the kit
    Added,
    /// Duplicate; the kit is unchanged
    AlreadyHeld,
}

/// The player character.
///
/// Gold is signed and deliberately unclamped: a lost brawl can push it
/// below zero, and the controller treats that as the end of the game.
/// Equipment and the treasure kit hold each entry at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    equipment: Vec<Item>,
    treasure_kit: Vec<Treasure>,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i32) -> Self {
        Self {
            name: name.into(),
            gold: starting_gold,
            equipment: Vec::new(),
            treasure_kit: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Apply a gold delta. Never clamps; the caller checks for
    /// bankruptcy after any action that can lose gold.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold += delta;
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.equipment.contains(&item)
    }

    /// Pay for an item and add it to the equipment.
    ///
    /// Fails (and changes nothing) when the gold doesn't cover the cost
    /// or the item is already owned.
    pub fn buy_item(&mut self, item: Item, cost: u32) -> bool {
        if self.gold < cost as i32 || self.has_item(item) {
            return false;
        }
        self.gold -= cost as i32;
        self.equipment.push(item);
        true
    }

    /// Hand over an item for gold. Fails when the item isn't owned.
    pub fn sell_item(&mut self, item: Item, price: u32) -> bool {
        if !self.has_item(item) {
            return false;
        }
        self.equipment.retain(|&owned| owned != item);
        self.gold += price as i32;
        true
    }

    /// Drop an item without compensation (a crossing item broke).
    /// No-op if the item isn't carried.
    pub fn remove_item(&mut self, item: Item) {
        self.equipment.retain(|&owned| owned != item);
    }

    /// Add an item without payment (samurai gift, test-mode kit).
    /// Fails only when the item is already owned.
    pub fn grant_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.equipment.push(item);
        true
    }

    /// Put a treasure in the kit, reporting whether it was new.
    ///
    /// There are only three collectible treasures, so the kit can never
    /// exceed its capacity of three distinct entries.
    pub fn add_treasure(&mut self, treasure: Treasure) -> TreasureGain {
        if self.treasure_kit.contains(&treasure) {
            TreasureGain::AlreadyHeld
        } else {
            self.treasure_kit.push(treasure);
            TreasureGain::Added
        }
    }

    pub fn treasure_count(&self) -> usize {
        self.treasure_kit.len()
    }

    /// Full kit is the win condition
    pub fn kit_is_full(&self) -> bool {
        self.treasure_kit.len() >= TREASURE_KIT_CAPACITY
    }

    pub fn equipment(&self) -> &[Item] {
        &self.equipment
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasure_kit
    }

    /// Carried equipment as a display string, in acquisition order
    pub fn equipment_listing(&self) -> String {
        if self.equipment.is_empty() {
            "nothing".to_string()
        } else {
            self.equipment
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Treasures held as a display string
    pub fn treasure_listing(&self) -> String {
        if self.treasure_kit.is_empty() {
            "none yet".to_string()
        } else {
            self.treasure_kit
                .iter()
                .map(|treasure| treasure.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Stock the kit with every catalog item except the sword.
    /// Used by the hidden test difficulty.
    pub fn grant_full_kit(&mut self) {
        for item in Item::iter() {
            if item != Item::Sword {
                self.grant_item(item);
            }
        }
    }
}
