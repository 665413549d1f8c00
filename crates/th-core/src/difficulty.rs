//! Difficulty selection and the parameter block it expands into

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::{EASY_GOLD_BONUS, STARTING_GOLD, TEST_GOLD_BONUS};

/// Player-facing difficulty choice.
///
/// Accepts the long names and the original single-letter answers
/// (`e`/`n`/`h`/`s`). `test` is a hidden playtesting mode and is not
/// offered on the setup screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[strum(to_string = "easy", serialize = "e")]
    Easy,
    #[default]
    #[strum(to_string = "normal", serialize = "n")]
    Normal,
    #[strum(to_string = "hard", serialize = "h")]
    Hard,
    #[strum(to_string = "samurai", serialize = "s")]
    Samurai,
    #[strum(to_string = "test")]
    Test,
}

/// Immutable difficulty parameters, fixed at game start and threaded into
/// every constructor that needs them. Nothing mutates these mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Fraction of base cost the shop pays when buying back an item
    pub markdown: f64,
    /// Chance a newly generated town is tough
    pub toughness: f64,
    /// Suppresses item breakage and boosts the brawl-win roll
    pub easy_mode: bool,
    /// Unlocks the sword economy and tribute combat
    pub samurai_mode: bool,
}

impl Difficulty {
    /// Expand the choice into its parameter block
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                markdown: 1.0,
                toughness: 0.4,
                easy_mode: true,
                samurai_mode: false,
            },
            Difficulty::Normal | Difficulty::Test => DifficultyConfig {
                markdown: 0.5,
                toughness: 0.4,
                easy_mode: false,
                samurai_mode: false,
            },
            Difficulty::Hard => DifficultyConfig {
                markdown: 0.25,
                toughness: 0.75,
                easy_mode: false,
                samurai_mode: false,
            },
            Difficulty::Samurai => DifficultyConfig {
                markdown: 0.5,
                toughness: 0.4,
                easy_mode: false,
                samurai_mode: true,
            },
        }
    }

    /// Gold the hunter starts with under this difficulty
    pub fn starting_gold(self) -> i32 {
        match self {
            Difficulty::Easy => STARTING_GOLD + EASY_GOLD_BONUS,
            Difficulty::Test => STARTING_GOLD + TEST_GOLD_BONUS,
            _ => STARTING_GOLD,
        }
    }

    /// Test mode starts with the whole catalog already in the kit
    pub const fn grants_full_kit(self) -> bool {
        matches!(self, Difficulty::Test)
    }

    /// Hidden modes are reachable from the command line but not listed
    /// on the setup screen
    pub const fn is_hidden(self) -> bool {
        matches!(self, Difficulty::Test)
    }
}
