//! The shop: one price catalog shared by every town
//!
//! A single `Shop` value lives in the game state and is borrowed into
//! each trade. Items are infinite supply; only the markdown and the
//! samurai unlock vary per game, never per town.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::difficulty::DifficultyConfig;
use crate::hunter::Hunter;
use crate::item::Item;

/// Direction of a quoted price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeMode {
    /// The hunter buys from the shop at catalog cost
    Buying,
    /// The shop buys back at the marked-down price
    Selling,
}

/// Why the shop refused a trade. No state changes on any of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TradeError {
    #[error("you can't buy this!")]
    SwordNotForSale,
    #[error("you don't have enough gold")]
    NotEnoughGold,
    #[error("you've already got one of those")]
    AlreadyOwned,
    #[error("you don't have one of those to sell")]
    NotOwned,
}

/// How a successful purchase was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    /// Gold changed hands
    Paid(u32),
    /// Free grant to a sword-bearing hunter
    SamuraiGift,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
    samurai_unlocked: bool,
}

impl Shop {
    pub fn new(config: &DifficultyConfig) -> Self {
        Self {
            markdown: config.markdown,
            samurai_unlocked: config.samurai_mode,
        }
    }

    pub fn samurai_unlocked(&self) -> bool {
        self.samurai_unlocked
    }

    /// Quote a price. Buy-back prices floor the markdown, so cheap items
    /// can quote 0 under a harsh markdown; the shop won't pay for those.
    pub fn price_of(&self, item: Item, mode: TradeMode) -> u32 {
        let base = item.base_cost();
        match mode {
            TradeMode::Buying => base,
            TradeMode::Selling => (base as f64 * self.markdown) as u32,
        }
    }

    /// Sell an item to the hunter.
    ///
    /// A hunter already carrying the sword receives any item they lack as
    /// a gift, regardless of gold. Everyone else pays catalog cost. All
    /// guards run before any mutation.
    pub fn execute_buy(&self, hunter: &mut Hunter, item: Item) -> Result<Purchase, TradeError> {
        if item == Item::Sword && !self.samurai_unlocked {
            return Err(TradeError::SwordNotForSale);
        }
        if hunter.has_item(item) {
            return Err(TradeError::AlreadyOwned);
        }
        if hunter.has_item(Item::Sword) {
            hunter.grant_item(item);
            return Ok(Purchase::SamuraiGift);
        }
        let cost = self.price_of(item, TradeMode::Buying);
        if hunter.buy_item(item, cost) {
            Ok(Purchase::Paid(cost))
        } else {
            Err(TradeError::NotEnoughGold)
        }
    }

    /// Buy an item back from the hunter at the marked-down price.
    pub fn execute_sell(&self, hunter: &mut Hunter, item: Item) -> Result<u32, TradeError> {
        let price = self.price_of(item, TradeMode::Selling);
        if hunter.sell_item(item, price) {
            Ok(price)
        } else {
            Err(TradeError::NotOwned)
        }
    }

    /// Catalog items with current buy prices, in catalog order.
    /// The sword is listed only in samurai games.
    pub fn inventory_listing(&self) -> Vec<(Item, u32)> {
        Item::iter()
            .filter(|&item| item != Item::Sword || self.samurai_unlocked)
            .map(|item| (item, self.price_of(item, TradeMode::Buying)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn normal_shop() -> Shop {
        Shop::new(&Difficulty::Normal.config())
    }

    fn hard_shop() -> Shop {
        Shop::new(&Difficulty::Hard.config())
    }

    fn samurai_shop() -> Shop {
        Shop::new(&Difficulty::Samurai.config())
    }

    #[test]
    fn test_buy_price_is_catalog_cost() {
        let shop = normal_shop();
        assert_eq!(shop.price_of(Item::Rope, TradeMode::Buying), 4);
        assert_eq!(shop.price_of(Item::Boat, TradeMode::Buying), 20);
    }

    #[test]
    fn test_sell_price_floors_the_markdown() {
        let shop = hard_shop();
        // 2 * 0.25 rounds down to nothing
        assert_eq!(shop.price_of(Item::Water, TradeMode::Selling), 0);
        assert_eq!(shop.price_of(Item::Boat, TradeMode::Selling), 5);
        assert_eq!(shop.price_of(Item::Machete, TradeMode::Selling), 1);

        let easy = Shop::new(&Difficulty::Easy.config());
        assert_eq!(easy.price_of(Item::Boat, TradeMode::Selling), 20);
    }

    #[test]
    fn test_sell_back_never_beats_catalog_cost() {
        for shop in [normal_shop(), hard_shop(), samurai_shop()] {
            for (item, buy) in shop.inventory_listing() {
                assert!(shop.price_of(item, TradeMode::Selling) <= buy);
            }
        }
    }

    #[test]
    fn test_buy_deducts_exactly_the_cost() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 20);
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Rope),
            Ok(Purchase::Paid(4))
        );
        assert_eq!(hunter.gold(), 16);
        assert!(hunter.has_item(Item::Rope));
    }

    #[test]
    fn test_buy_rejects_duplicate_without_charge() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 20);
        shop.execute_buy(&mut hunter, Item::Rope).unwrap();
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Rope),
            Err(TradeError::AlreadyOwned)
        );
        assert_eq!(hunter.gold(), 16);
    }

    #[test]
    fn test_buy_rejects_when_broke() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 5);
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Boat),
            Err(TradeError::NotEnoughGold)
        );
        assert_eq!(hunter.gold(), 5);
        assert!(!hunter.has_item(Item::Boat));
    }

    #[test]
    fn test_sword_locked_outside_samurai_games() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 20);
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Sword),
            Err(TradeError::SwordNotForSale)
        );
        assert!(!hunter.has_item(Item::Sword));
    }

    #[test]
    fn test_sword_is_free_when_unlocked() {
        let shop = samurai_shop();
        let mut hunter = Hunter::new("ronin", 0);
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Sword),
            Ok(Purchase::Paid(0))
        );
        assert_eq!(hunter.gold(), 0);
        assert!(hunter.has_item(Item::Sword));
    }

    #[test]
    fn test_sword_bearer_gets_items_free() {
        let shop = samurai_shop();
        let mut hunter = Hunter::new("ronin", 0);
        shop.execute_buy(&mut hunter, Item::Sword).unwrap();

        // No gold at all, and the boat costs 20.
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Boat),
            Ok(Purchase::SamuraiGift)
        );
        assert_eq!(hunter.gold(), 0);
        assert!(hunter.has_item(Item::Boat));

        // The gift doesn't bypass the duplicate guard.
        assert_eq!(
            shop.execute_buy(&mut hunter, Item::Boat),
            Err(TradeError::AlreadyOwned)
        );
    }

    #[test]
    fn test_sell_pays_the_marked_down_price() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 20);
        shop.execute_buy(&mut hunter, Item::Boat).unwrap();
        assert_eq!(hunter.gold(), 0);

        assert_eq!(shop.execute_sell(&mut hunter, Item::Boat), Ok(10));
        assert_eq!(hunter.gold(), 10);
        assert!(!hunter.has_item(Item::Boat));
    }

    #[test]
    fn test_sell_rejects_items_not_carried() {
        let shop = normal_shop();
        let mut hunter = Hunter::new("jett", 20);
        assert_eq!(
            shop.execute_sell(&mut hunter, Item::Horse),
            Err(TradeError::NotOwned)
        );
        assert_eq!(hunter.gold(), 20);
    }

    #[test]
    fn test_worthless_sell_still_hands_over_the_item() {
        // Core guards ownership only; refusing a zero quote is the
        // shop-counter flow's job.
        let shop = hard_shop();
        let mut hunter = Hunter::new("jett", 20);
        shop.execute_buy(&mut hunter, Item::Water).unwrap();
        assert_eq!(shop.execute_sell(&mut hunter, Item::Water), Ok(0));
        assert_eq!(hunter.gold(), 18);
        assert!(!hunter.has_item(Item::Water));
    }

    #[test]
    fn test_listing_hides_the_sword_by_default() {
        let listing = normal_shop().inventory_listing();
        assert_eq!(listing.len(), 7);
        assert!(listing.iter().all(|&(item, _)| item != Item::Sword));
        assert_eq!(listing[0], (Item::Water, 2));
        assert_eq!(listing[6], (Item::Shovel, 8));
    }

    #[test]
    fn test_listing_offers_the_sword_to_samurai() {
        let listing = samurai_shop().inventory_listing();
        assert_eq!(listing.len(), 8);
        assert_eq!(listing[7], (Item::Sword, 0));
    }
}
