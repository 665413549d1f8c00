//! Game loop and session state
//!
//! [`GameState`] owns everything a running hunt needs: the hunter, the
//! current town, the shop, the RNG and the message buffers. [`GameLoop`]
//! wraps it and resolves one [`Command`] per tick, narrating outcomes
//! into the message buffer and reporting win/loss/quit to the caller.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::hunter::Hunter;
use crate::item::Item;
use crate::rng::GameRng;
use crate::shop::{Purchase, Shop, TradeError};
use crate::town::{CrossingOutcome, DigOutcome, SearchOutcome, Town, TroubleOutcome};

/// Player command for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Buy an item from the shop
    Buy(Item),
    /// Sell an item back to the shop
    Sell(Item),
    /// Look at the surrounding terrain
    Explore,
    /// Cross the terrain and move on to the next town
    MoveOn,
    /// Go looking for a brawl
    LookForTrouble,
    /// Dig for gold
    DigForGold,
    /// Hunt for this town's treasure
    HuntTreasure,
    /// Give up the hunt
    Quit,
}

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// All three treasures collected
    HunterWon,
    /// Game over, with the cause
    HunterLost(String),
    /// Hunter gave up the hunt
    HunterQuit,
}

/// Full state of one treasure hunt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The traveling hunter
    pub hunter: Hunter,

    /// Town the hunter is currently in
    pub town: Town,

    /// The shop; every town shares the one shopkeeper
    pub shop: Shop,

    /// Difficulty chosen at setup
    pub difficulty: Difficulty,

    /// Random number generator
    pub rng: GameRng,

    /// How many towns the hunter has seen, the starting town included
    pub towns_visited: u32,

    /// Messages for the current tick
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Permanent message history
    #[serde(skip)]
    pub message_history: Vec<String>,
}

impl GameState {
    /// Start a new hunt: outfit the hunter for the chosen difficulty,
    /// open the shop and generate the first town.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, mut rng: GameRng) -> Self {
        let config = difficulty.config();

        let mut hunter = Hunter::new(name, difficulty.starting_gold());
        if difficulty.grants_full_kit() {
            hunter.grant_full_kit();
        }

        let shop = Shop::new(&config);
        let town = Town::new(&mut rng, config);

        let mut state = Self {
            hunter,
            town,
            shop,
            difficulty,
            rng,
            towns_visited: 1,
            messages: Vec::new(),
            message_history: Vec::new(),
        };

        for line in state.town.hunter_arrives(&state.hunter) {
            state.message(line);
        }
        state
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        self.messages.push(msg_str.clone());
        self.message_history.push(msg_str);
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Resolve a single command.
    ///
    /// Win and loss are checked after every command, so a brawl that
    /// drives the gold negative ends the game on the same tick.
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        match command {
            Command::Buy(item) => self.do_buy(item),
            Command::Sell(item) => self.do_sell(item),
            Command::Explore => self.do_explore(),
            Command::MoveOn => self.do_move_on(),
            Command::LookForTrouble => self.do_look_for_trouble(),
            Command::DigForGold => self.do_dig_for_gold(),
            Command::HuntTreasure => self.do_hunt_treasure(),
            Command::Quit => {
                self.state
                    .message(format!("Fare thee well, {}!", self.state.hunter.name()));
                return GameLoopResult::HunterQuit;
            }
        }

        if self.state.hunter.gold() < 0 {
            self.state.message("You have lost! :(");
            return GameLoopResult::HunterLost("out of gold".to_string());
        }

        if self.state.hunter.kit_is_full() {
            self.state.message(
                "Congratulations, you have found the last of the three treasures, you win!",
            );
            return GameLoopResult::HunterWon;
        }

        GameLoopResult::Continue
    }

    fn do_buy(&mut self, item: Item) {
        match self.state.shop.execute_buy(&mut self.state.hunter, item) {
            Ok(Purchase::SamuraiGift) => {
                self.state.message(
                    "Oh Legendary Samurai, my store is yours, you can have this, free of cost!",
                );
                self.state
                    .message(format!("Ye' got yerself a {item}. Come again soon."));
            }
            Ok(Purchase::Paid(_)) => {
                self.state
                    .message(format!("Ye' got yerself a {item}. Come again soon."));
            }
            Err(TradeError::SwordNotForSale) => self.state.message("You can't buy this!"),
            Err(err) => self.state.message(format!("Hmm, {err}!")),
        }
    }

    fn do_sell(&mut self, item: Item) {
        match self.state.shop.execute_sell(&mut self.state.hunter, item) {
            Ok(_) => self.state.message("Pleasure doin' business with you."),
            Err(_) => self.state.message("Stop stringin' me along!"),
        }
    }

    fn do_explore(&mut self) {
        let terrain = self.state.town.terrain();
        self.state.message(format!(
            "The town is surrounded by {terrain}. You'll need a {} to cross it.",
            terrain.required_item()
        ));
    }

    fn do_move_on(&mut self) {
        match self
            .state
            .town
            .leave_town(&mut self.state.hunter, &mut self.state.rng)
        {
            CrossingOutcome::Blocked { missing } => {
                self.state.message(format!(
                    "You can't leave town, {}. You don't have a {missing}.",
                    self.state.hunter.name()
                ));
            }
            CrossingOutcome::Crossed { used, broke } => {
                self.state.message(format!(
                    "You used your {used} to cross the {}.",
                    self.state.town.terrain()
                ));
                if broke {
                    self.state
                        .message(format!("Unfortunately, your {used} broke."));
                }
                self.enter_next_town();
            }
        }
    }

    /// Discard the old town and generate the next one
    fn enter_next_town(&mut self) {
        let config = self.state.difficulty.config();
        self.state.town = Town::new(&mut self.state.rng, config);
        self.state.towns_visited += 1;
        for line in self.state.town.hunter_arrives(&self.state.hunter) {
            self.state.message(line);
        }
    }

    fn do_look_for_trouble(&mut self) {
        match self
            .state
            .town
            .look_for_trouble(&mut self.state.hunter, &mut self.state.rng)
        {
            TroubleOutcome::NoTrouble => self.state.message("You couldn't find any trouble"),
            TroubleOutcome::SamuraiGift(gold) => {
                self.state.message("I see you want trouble str....ir.");
                self.state
                    .message("Apologies for angering you so dear samurai, please take my gold.");
                self.state.message(format!("You have received {gold} gold."));
            }
            TroubleOutcome::Won(gold) => {
                self.state.message("You want trouble, stranger! You got it!");
                self.state.message("Oof! Umph! Ow!");
                self.state
                    .message("Okay, stranger! You proved yer mettle. Here, take my gold.");
                self.state
                    .message(format!("You won the brawl and receive {gold} gold."));
            }
            TroubleOutcome::Lost(gold) => {
                self.state.message("You want trouble, stranger! You got it!");
                self.state.message("Oof! Umph! Ow!");
                self.state
                    .message("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
                self.state
                    .message(format!("You lost the brawl and pay {gold} gold."));
            }
        }
    }

    fn do_dig_for_gold(&mut self) {
        match self
            .state
            .town
            .dig_for_gold(&mut self.state.hunter, &mut self.state.rng)
        {
            DigOutcome::NoShovel => {
                self.state.message("You can't dig for gold without a shovel")
            }
            DigOutcome::AlreadyDug => {
                self.state.message("You already dug for gold in this town.")
            }
            DigOutcome::Found(gold) => self.state.message(format!("You dug up {gold} gold!")),
            DigOutcome::Dirt => self.state.message("You dug but only found dirt"),
        }
    }

    fn do_hunt_treasure(&mut self) {
        match self.state.town.search_treasure(&mut self.state.hunter) {
            SearchOutcome::AlreadySearched => {
                self.state.message("You already searched this town.")
            }
            SearchOutcome::Dust => self.state.message("You searched but only found dust."),
            SearchOutcome::FoundNew(treasure) => {
                self.state.message(format!("You found a {treasure}!"))
            }
            SearchOutcome::AlreadyHeld(treasure) => {
                self.state.message(format!("You already have a {treasure}."))
            }
        }
    }
}
