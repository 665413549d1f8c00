//! Towns and the randomized actions resolved in them
//!
//! A town is generated fresh every time the hunter moves on: new terrain,
//! a new toughness roll, and a newly assigned treasure. Digging and
//! treasure hunting are one-shot per town; the flags live here.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BRAWL_GOLD_MAX, DIG_GOLD_MAX, EASY_BRAWL_BONUS, ITEM_BREAK_CHANCE, MILD_BRAWL_THRESHOLD,
    TOUGH_BRAWL_THRESHOLD,
};
use crate::difficulty::DifficultyConfig;
use crate::hunter::{Hunter, TreasureGain};
use crate::item::{Item, Treasure};
use crate::rng::GameRng;
use crate::terrain::Terrain;

// ============================================================================
// Action outcomes
// ============================================================================

/// Result of trying to leave town across the surrounding terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingOutcome {
    /// Made it across; `broke` reports whether the item was lost on the way
    Crossed { used: Item, broke: bool },
    /// Missing the required item; nothing changed
    Blocked { missing: Item },
}

impl CrossingOutcome {
    /// True iff the hunter actually left town
    pub const fn succeeded(self) -> bool {
        matches!(self, CrossingOutcome::Crossed { .. })
    }
}

/// Result of looking for a brawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TroubleOutcome {
    /// No takers this time
    NoTrouble,
    /// Samurai tribute: the would-be brawler hands over gold instead
    SamuraiGift(u32),
    /// Won the brawl and the purse
    Won(u32),
    /// Lost the brawl and paid the purse; gold may now be negative
    Lost(u32),
}

/// Result of digging for gold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// No shovel; the dig is not consumed
    NoShovel,
    /// This town's dig was already used
    AlreadyDug,
    /// Struck gold
    Found(u32),
    /// Nothing but dirt
    Dirt,
}

/// Result of hunting for this town's treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// This town was already searched
    AlreadySearched,
    /// The town's "treasure" was dust; the search is spent anyway
    Dust,
    /// A treasure new to the kit
    FoundNew(Treasure),
    /// Found, but a duplicate; the kit is unchanged
    AlreadyHeld(Treasure),
}

// ============================================================================
// Town
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    terrain: Terrain,
    tough: bool,
    treasure: Treasure,
    dug: bool,
    treasure_searched: bool,
    difficulty: DifficultyConfig,
}

impl Town {
    /// Generate a town: uniform terrain, toughness per the difficulty's
    /// toughness parameter, uniform treasure (dust included).
    pub fn new(rng: &mut GameRng, difficulty: DifficultyConfig) -> Self {
        Self {
            terrain: Terrain::random(rng),
            tough: rng.chance(difficulty.toughness),
            treasure: Treasure::random(rng),
            dug: false,
            treasure_searched: false,
            difficulty,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn has_dug(&self) -> bool {
        self.dug
    }

    pub fn has_searched(&self) -> bool {
        self.treasure_searched
    }

    /// Greeting lines shown when the hunter first arrives
    pub fn hunter_arrives(&self, hunter: &Hunter) -> Vec<String> {
        vec![
            format!("Welcome to town, {}.", hunter.name()),
            self.mood().to_string(),
        ]
    }

    /// One-line read on the locals, depending on how tough the town is.
    pub fn mood(&self) -> &'static str {
        if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        }
    }

    pub fn description(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain
        )
    }

    // ------------------------------------------------------------------
    // Randomized actions
    // ------------------------------------------------------------------

    /// Try to cross the surrounding terrain.
    ///
    /// Needs the terrain's required item. On a successful crossing the
    /// item breaks half the time (never in easy mode); the crossing
    /// itself goes through either way.
    pub fn leave_town(&self, hunter: &mut Hunter, rng: &mut GameRng) -> CrossingOutcome {
        let required = self.terrain.required_item();
        if !self.terrain.can_cross(hunter) {
            return CrossingOutcome::Blocked { missing: required };
        }
        let broke = !self.difficulty.easy_mode && rng.chance(ITEM_BREAK_CHANCE);
        if broke {
            hunter.remove_item(required);
        }
        CrossingOutcome::Crossed {
            used: required,
            broke,
        }
    }

    /// Go looking for a brawl.
    ///
    /// Tough towns offer trouble more often and are harder to win in:
    /// the same threshold gates both the encounter roll and the win
    /// roll. A samurai carrying the sword never rolls; the purse is
    /// handed over as tribute.
    pub fn look_for_trouble(&self, hunter: &mut Hunter, rng: &mut GameRng) -> TroubleOutcome {
        let threshold = if self.tough {
            TOUGH_BRAWL_THRESHOLD
        } else {
            MILD_BRAWL_THRESHOLD
        };
        if rng.uniform() > threshold {
            return TroubleOutcome::NoTrouble;
        }

        let purse = rng.rnd(BRAWL_GOLD_MAX);
        if self.difficulty.samurai_mode && hunter.has_item(Item::Sword) {
            hunter.change_gold(purse as i32);
            return TroubleOutcome::SamuraiGift(purse);
        }

        let mut roll = rng.uniform();
        if self.difficulty.easy_mode {
            roll += EASY_BRAWL_BONUS;
        }
        if roll > threshold {
            hunter.change_gold(purse as i32);
            TroubleOutcome::Won(purse)
        } else {
            hunter.change_gold(-(purse as i32));
            TroubleOutcome::Lost(purse)
        }
    }

    /// Dig for gold. One shot per town, and only with a shovel in the kit.
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut GameRng) -> DigOutcome {
        if !hunter.has_item(Item::Shovel) {
            return DigOutcome::NoShovel;
        }
        if self.dug {
            return DigOutcome::AlreadyDug;
        }
        self.dug = true;
        if rng.one_in(2) {
            let found = rng.rnd(DIG_GOLD_MAX);
            hunter.change_gold(found as i32);
            DigOutcome::Found(found)
        } else {
            DigOutcome::Dirt
        }
    }

    /// Hunt for this town's treasure. One shot per town; finding dust
    /// spends the search all the same.
    pub fn search_treasure(&mut self, hunter: &mut Hunter) -> SearchOutcome {
        if self.treasure_searched {
            return SearchOutcome::AlreadySearched;
        }
        self.treasure_searched = true;
        if self.treasure.is_dust() {
            return SearchOutcome::Dust;
        }
        match hunter.add_treasure(self.treasure) {
            TreasureGain::Added => SearchOutcome::FoundNew(self.treasure),
            TreasureGain::AlreadyHeld => SearchOutcome::AlreadyHeld(self.treasure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn town(treasure: Treasure, tough: bool, difficulty: Difficulty) -> Town {
        Town {
            terrain: Terrain::Mountains,
            tough,
            treasure,
            dug: false,
            treasure_searched: false,
            difficulty: difficulty.config(),
        }
    }

    fn hunter_with(items: &[Item], gold: i32) -> Hunter {
        let mut hunter = Hunter::new("jett", gold);
        for &item in items {
            hunter.grant_item(item);
        }
        hunter
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    #[test]
    fn test_creation_covers_every_roll() {
        let mut terrains = std::collections::HashSet::new();
        let mut treasures = std::collections::HashSet::new();
        let mut tough_seen = [false, false];

        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let town = Town::new(&mut rng, Difficulty::Normal.config());
            terrains.insert(town.terrain());
            treasures.insert(town.treasure());
            tough_seen[town.is_tough() as usize] = true;
        }

        assert_eq!(terrains.len(), 6);
        assert_eq!(treasures.len(), 4);
        assert!(tough_seen[0] && tough_seen[1]);
    }

    #[test]
    fn test_toughness_tracks_the_difficulty() {
        let mut rng = GameRng::new(42);

        let hard_tough = (0..1000)
            .filter(|_| Town::new(&mut rng, Difficulty::Hard.config()).is_tough())
            .count();
        // 75% of 1000, generous bounds
        assert!(
            (690..=810).contains(&hard_tough),
            "hard toughness rate off: {hard_tough}"
        );

        let normal_tough = (0..1000)
            .filter(|_| Town::new(&mut rng, Difficulty::Normal.config()).is_tough())
            .count();
        // 40% of 1000
        assert!(
            (340..=460).contains(&normal_tough),
            "normal toughness rate off: {normal_tough}"
        );
    }

    // ------------------------------------------------------------------
    // Leaving town
    // ------------------------------------------------------------------

    #[test]
    fn test_leave_town_blocked_without_the_item() {
        let town = town(Treasure::Dust, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[Item::Boat], 20);
        let mut rng = GameRng::new(42);

        let outcome = town.leave_town(&mut hunter, &mut rng);
        assert_eq!(
            outcome,
            CrossingOutcome::Blocked {
                missing: Item::Rope
            }
        );
        assert!(!outcome.succeeded());
        assert!(hunter.has_item(Item::Boat));
        assert_eq!(hunter.gold(), 20);
    }

    #[test]
    fn test_leave_town_breaks_the_item_about_half_the_time() {
        let town = town(Treasure::Dust, false, Difficulty::Normal);
        let mut rng = GameRng::new(42);
        let mut breaks = 0;

        for _ in 0..1000 {
            let mut hunter = hunter_with(&[Item::Rope], 20);
            match town.leave_town(&mut hunter, &mut rng) {
                CrossingOutcome::Crossed { used, broke } => {
                    assert_eq!(used, Item::Rope);
                    assert_eq!(hunter.has_item(Item::Rope), !broke);
                    if broke {
                        breaks += 1;
                    }
                }
                CrossingOutcome::Blocked { .. } => panic!("hunter carried the rope"),
            }
        }

        assert!((430..=570).contains(&breaks), "break rate off: {breaks}");
    }

    #[test]
    fn test_easy_mode_never_breaks_the_item() {
        let town = town(Treasure::Dust, false, Difficulty::Easy);
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let mut hunter = hunter_with(&[Item::Rope], 20);
            assert_eq!(
                town.leave_town(&mut hunter, &mut rng),
                CrossingOutcome::Crossed {
                    used: Item::Rope,
                    broke: false
                }
            );
            assert!(hunter.has_item(Item::Rope));
        }
    }

    // ------------------------------------------------------------------
    // Looking for trouble
    // ------------------------------------------------------------------

    #[test]
    fn test_tough_towns_offer_more_trouble() {
        let mut rng = GameRng::new(42);

        let mild = town(Treasure::Dust, false, Difficulty::Normal);
        let mild_encounters = (0..1000)
            .filter(|_| {
                let mut hunter = hunter_with(&[], 100);
                mild.look_for_trouble(&mut hunter, &mut rng) != TroubleOutcome::NoTrouble
            })
            .count();
        // encounter chance 0.33
        assert!(
            (280..=380).contains(&mild_encounters),
            "mild encounter rate off: {mild_encounters}"
        );

        let tough = town(Treasure::Dust, true, Difficulty::Normal);
        let tough_encounters = (0..1000)
            .filter(|_| {
                let mut hunter = hunter_with(&[], 100);
                tough.look_for_trouble(&mut hunter, &mut rng) != TroubleOutcome::NoTrouble
            })
            .count();
        // encounter chance 0.66
        assert!(
            (610..=710).contains(&tough_encounters),
            "tough encounter rate off: {tough_encounters}"
        );
    }

    #[test]
    fn test_tough_brawls_are_harder_to_win() {
        let tough = town(Treasure::Dust, true, Difficulty::Normal);
        let mut rng = GameRng::new(7);
        let mut wins = 0;
        let mut losses = 0;

        for _ in 0..2000 {
            let mut hunter = hunter_with(&[], 1000);
            match tough.look_for_trouble(&mut hunter, &mut rng) {
                TroubleOutcome::Won(_) => wins += 1,
                TroubleOutcome::Lost(_) => losses += 1,
                TroubleOutcome::NoTrouble => {}
                TroubleOutcome::SamuraiGift(_) => panic!("not a samurai game"),
            }
        }

        // Win chance inside an encounter is 0.34 in a tough town.
        assert!(losses > wins, "wins {wins} vs losses {losses}");
    }

    #[test]
    fn test_brawl_purse_is_applied_and_bounded() {
        let town = town(Treasure::Dust, true, Difficulty::Normal);
        let mut rng = GameRng::new(3);
        let mut saw_win = false;
        let mut saw_loss = false;

        for _ in 0..500 {
            let mut hunter = hunter_with(&[], 50);
            match town.look_for_trouble(&mut hunter, &mut rng) {
                TroubleOutcome::Won(purse) => {
                    assert!((1..=10).contains(&purse));
                    assert_eq!(hunter.gold(), 50 + purse as i32);
                    saw_win = true;
                }
                TroubleOutcome::Lost(purse) => {
                    assert!((1..=10).contains(&purse));
                    assert_eq!(hunter.gold(), 50 - purse as i32);
                    saw_loss = true;
                }
                TroubleOutcome::NoTrouble => assert_eq!(hunter.gold(), 50),
                TroubleOutcome::SamuraiGift(_) => panic!("not a samurai game"),
            }
        }

        assert!(saw_win && saw_loss);
    }

    #[test]
    fn test_losing_a_brawl_can_bankrupt_the_hunter() {
        let town = town(Treasure::Dust, true, Difficulty::Normal);

        for seed in 0..500 {
            let mut rng = GameRng::new(seed);
            let mut hunter = hunter_with(&[], 3);
            if let TroubleOutcome::Lost(purse) = town.look_for_trouble(&mut hunter, &mut rng) {
                if purse > 3 {
                    assert!(hunter.gold() < 0);
                    return;
                }
            }
        }
        panic!("no bankrupting loss in 500 seeds");
    }

    #[test]
    fn test_sword_bearing_samurai_collects_tribute() {
        let town = town(Treasure::Dust, true, Difficulty::Samurai);
        let mut rng = GameRng::new(42);

        for _ in 0..500 {
            let mut hunter = hunter_with(&[Item::Sword], 10);
            match town.look_for_trouble(&mut hunter, &mut rng) {
                TroubleOutcome::SamuraiGift(purse) => {
                    assert!((1..=10).contains(&purse));
                    assert_eq!(hunter.gold(), 10 + purse as i32);
                }
                TroubleOutcome::NoTrouble => assert_eq!(hunter.gold(), 10),
                other => panic!("samurai with sword should never brawl: {other:?}"),
            }
        }
    }

    #[test]
    fn test_samurai_without_sword_still_brawls() {
        let town = town(Treasure::Dust, true, Difficulty::Samurai);
        let mut rng = GameRng::new(42);
        let mut brawled = false;

        for _ in 0..500 {
            let mut hunter = hunter_with(&[], 100);
            match town.look_for_trouble(&mut hunter, &mut rng) {
                TroubleOutcome::SamuraiGift(_) => panic!("tribute needs the sword in hand"),
                TroubleOutcome::Won(_) | TroubleOutcome::Lost(_) => brawled = true,
                TroubleOutcome::NoTrouble => {}
            }
        }

        assert!(brawled);
    }

    // ------------------------------------------------------------------
    // Digging
    // ------------------------------------------------------------------

    #[test]
    fn test_dig_needs_a_shovel_and_keeps_the_attempt() {
        let mut town = town(Treasure::Dust, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[], 20);
        let mut rng = GameRng::new(42);

        assert_eq!(town.dig_for_gold(&mut hunter, &mut rng), DigOutcome::NoShovel);
        assert!(!town.has_dug());
        assert_eq!(hunter.gold(), 20);

        // Once a shovel turns up, the dig is still available.
        hunter.grant_item(Item::Shovel);
        let outcome = town.dig_for_gold(&mut hunter, &mut rng);
        assert!(matches!(
            outcome,
            DigOutcome::Found(_) | DigOutcome::Dirt
        ));
        assert!(town.has_dug());
    }

    #[test]
    fn test_dig_is_one_shot_per_town() {
        let mut town = town(Treasure::Dust, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[Item::Shovel], 20);
        let mut rng = GameRng::new(42);

        town.dig_for_gold(&mut hunter, &mut rng);
        let gold_after_first = hunter.gold();

        assert_eq!(
            town.dig_for_gold(&mut hunter, &mut rng),
            DigOutcome::AlreadyDug
        );
        assert_eq!(hunter.gold(), gold_after_first);
    }

    #[test]
    fn test_dig_outcomes_and_amounts() {
        let mut saw_gold = false;
        let mut saw_dirt = false;

        for seed in 0..100 {
            let mut town = town(Treasure::Dust, false, Difficulty::Normal);
            let mut hunter = hunter_with(&[Item::Shovel], 0);
            let mut rng = GameRng::new(seed);

            match town.dig_for_gold(&mut hunter, &mut rng) {
                DigOutcome::Found(amount) => {
                    assert!((1..=20).contains(&amount));
                    assert_eq!(hunter.gold(), amount as i32);
                    saw_gold = true;
                }
                DigOutcome::Dirt => {
                    assert_eq!(hunter.gold(), 0);
                    saw_dirt = true;
                }
                other => panic!("unexpected dig outcome: {other:?}"),
            }
        }

        assert!(saw_gold && saw_dirt, "expected both dig outcomes over 100 seeds");
    }

    // ------------------------------------------------------------------
    // Treasure hunting
    // ------------------------------------------------------------------

    #[test]
    fn test_search_finds_the_towns_treasure() {
        let mut town = town(Treasure::Crown, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[], 20);

        assert_eq!(
            town.search_treasure(&mut hunter),
            SearchOutcome::FoundNew(Treasure::Crown)
        );
        assert!(town.has_searched());
        assert_eq!(hunter.treasure_count(), 1);
    }

    #[test]
    fn test_search_is_one_shot_per_town() {
        let mut town = town(Treasure::Crown, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[], 20);

        town.search_treasure(&mut hunter);
        assert_eq!(
            town.search_treasure(&mut hunter),
            SearchOutcome::AlreadySearched
        );
        assert_eq!(hunter.treasure_count(), 1);
    }

    #[test]
    fn test_dust_spends_the_search_and_grants_nothing() {
        let mut town = town(Treasure::Dust, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[], 20);

        assert_eq!(town.search_treasure(&mut hunter), SearchOutcome::Dust);
        assert!(town.has_searched());
        assert_eq!(hunter.treasure_count(), 0);

        assert_eq!(
            town.search_treasure(&mut hunter),
            SearchOutcome::AlreadySearched
        );
    }

    #[test]
    fn test_duplicate_treasure_is_reported_not_added() {
        let mut town = town(Treasure::Gem, false, Difficulty::Normal);
        let mut hunter = hunter_with(&[], 20);
        hunter.add_treasure(Treasure::Gem);

        assert_eq!(
            town.search_treasure(&mut hunter),
            SearchOutcome::AlreadyHeld(Treasure::Gem)
        );
        assert_eq!(hunter.treasure_count(), 1);
    }

    // ------------------------------------------------------------------
    // Flavor
    // ------------------------------------------------------------------

    #[test]
    fn test_greeting_reflects_toughness() {
        let hunter = hunter_with(&[], 20);

        let rough = town(Treasure::Dust, true, Difficulty::Normal).hunter_arrives(&hunter);
        assert_eq!(rough[0], "Welcome to town, jett.");
        assert!(rough[1].contains("watch yourself"));

        let sleepy = town(Treasure::Dust, false, Difficulty::Normal).hunter_arrives(&hunter);
        assert!(sleepy[1].contains("sleepy little town"));
    }

    #[test]
    fn test_description_names_the_terrain() {
        let town = town(Treasure::Dust, false, Difficulty::Normal);
        assert_eq!(
            town.description(),
            "This nice little town is surrounded by Mountains."
        );
    }
}
