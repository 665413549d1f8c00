//! Core game constants
//!
//! Gold amounts, capacities, and the fixed probabilities that drive
//! randomized action resolution.

/// Gold every hunter starts with
pub const STARTING_GOLD: i32 = 20;

/// Extra starting gold in easy mode
pub const EASY_GOLD_BONUS: i32 = 20;

/// Extra starting gold in the hidden test mode
pub const TEST_GOLD_BONUS: i32 = 80;

/// Distinct treasures needed to win
pub const TREASURE_KIT_CAPACITY: usize = 3;

/// Chance the crossing item breaks when leaving town (outside easy mode)
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

/// Brawl threshold in a tough town. The encounter roll must land at or
/// under it for trouble to turn up, and the win roll must clear it.
pub const TOUGH_BRAWL_THRESHOLD: f64 = 0.66;

/// Brawl threshold in a mild town
pub const MILD_BRAWL_THRESHOLD: f64 = 0.33;

/// Added to the brawl-win roll in easy mode
pub const EASY_BRAWL_BONUS: f64 = 0.10;

/// Largest purse won or lost in a brawl
pub const BRAWL_GOLD_MAX: u32 = 10;

/// Largest strike when digging for gold
pub const DIG_GOLD_MAX: u32 = 20;
