//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use std::str::FromStr;
use strum::IntoEnumIterator;

use th_core::difficulty::Difficulty;
use th_core::item::Item;
use th_core::shop::TradeMode;
use th_core::{Command, GameLoop, GameLoopResult, GameState};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{NewsWidget, StatusWidget, TownWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone)]
pub enum UiMode {
    /// Normal gameplay
    Normal,
    /// New-game setup screens
    NewGame(NewGameState),
    /// Typing an item name at the shop counter
    ShopInput { mode: TradeMode, input: String },
    /// Waiting for y/n on a quoted price
    ConfirmTrade {
        mode: TradeMode,
        item: Item,
        price: u32,
    },
    /// Showing help
    Help,
    /// End-of-hunt screen showing final statistics
    GameOver { won: bool, cause: String },
}

/// New-game setup state machine
#[derive(Debug, Clone)]
pub enum NewGameState {
    /// Entering the hunter's name
    EnterName { name: String },
    /// Selecting a difficulty
    SelectDifficulty { name: String, cursor: usize },
    /// Done - ready to start the hunt
    Done { name: String, difficulty: Difficulty },
}

/// Choices gathered by the setup screens
#[derive(Debug, Clone)]
pub struct SetupChoices {
    pub name: String,
    pub difficulty: Difficulty,
}

/// Main application state
pub struct App {
    game_loop: GameLoop,
    should_quit: bool,
    mode: UiMode,
    theme: Theme,
}

impl App {
    /// Create a new app with the given game state
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode: UiMode::Normal,
            theme,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signal that the app should quit
    pub fn set_should_quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        if let Event::Key(key) = event {
            // Check for quit (always available)
            if key.code == KeyCode::Char('Q') && key.modifiers.contains(KeyModifiers::SHIFT) {
                self.should_quit = true;
                return None;
            }

            match &self.mode {
                UiMode::Normal => self.handle_normal_input(key),
                UiMode::NewGame(_) => {
                    self.handle_new_game_input(key);
                    None
                }
                UiMode::ShopInput { .. } => self.handle_shop_input(key),
                UiMode::ConfirmTrade { .. } => self.handle_confirm_trade_input(key),
                UiMode::Help => {
                    self.handle_help_input(key);
                    None
                }
                UiMode::GameOver { .. } => {
                    self.handle_game_over_input(key);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Handle input in normal gameplay mode
    ///
    /// Key bindings follow the original menu letters. The shop letters
    /// open a prompt instead of mapping straight to a command.
    fn handle_normal_input(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.mode = UiMode::ShopInput {
                    mode: TradeMode::Buying,
                    input: String::new(),
                };
                None
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.mode = UiMode::ShopInput {
                    mode: TradeMode::Selling,
                    input: String::new(),
                };
                None
            }
            KeyCode::Char('?') => {
                self.mode = UiMode::Help;
                None
            }
            _ => {
                let command = key_to_command(key);
                if command.is_none() {
                    let state = self.game_loop.state_mut();
                    state.clear_messages();
                    state.message("Yikes! That's an invalid option! Try again.");
                }
                command
            }
        }
    }

    /// Handle typed input at the shop counter
    fn handle_shop_input(&mut self, key: KeyEvent) -> Option<Command> {
        let (mode, mut input) = match &self.mode {
            UiMode::ShopInput { mode, input } => (*mode, input.clone()),
            _ => return None,
        };

        match key.code {
            KeyCode::Esc => {
                self.leave_shop();
                None
            }
            KeyCode::Enter => {
                let name = input.trim().to_string();
                self.lookup_item(mode, &name)
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = UiMode::ShopInput { mode, input };
                None
            }
            KeyCode::Char(c) if input.len() < 16 => {
                input.push(c);
                self.mode = UiMode::ShopInput { mode, input };
                None
            }
            _ => None,
        }
    }

    /// Resolve a typed item name into the next step of the trade.
    ///
    /// Known items move to a y/n price prompt. The free samurai grant and
    /// the sword refusal go straight to the core without a price prompt;
    /// the core narrates both. Items the shop won't pay for are refused
    /// here, before any prompt.
    fn lookup_item(&mut self, mode: TradeMode, name: &str) -> Option<Command> {
        let Ok(item) = Item::from_str(name) else {
            let rejection = match mode {
                TradeMode::Buying => "We ain't got none of those.",
                TradeMode::Selling => "We don't want none of those.",
            };
            self.reject_trade(rejection);
            return None;
        };

        match mode {
            TradeMode::Buying => {
                let state = self.game_loop.state();
                let free_grant =
                    state.hunter.has_item(Item::Sword) && !state.hunter.has_item(item);
                let sword_refused = item == Item::Sword && !state.shop.samurai_unlocked();
                let price = state.shop.price_of(item, TradeMode::Buying);
                if free_grant || sword_refused {
                    self.mode = UiMode::Normal;
                    return Some(Command::Buy(item));
                }
                self.mode = UiMode::ConfirmTrade { mode, item, price };
                None
            }
            TradeMode::Selling => {
                let price = self.game_loop.state().shop.price_of(item, TradeMode::Selling);
                if price == 0 {
                    self.reject_trade("We don't want none of those.");
                    return None;
                }
                self.mode = UiMode::ConfirmTrade { mode, item, price };
                None
            }
        }
    }

    /// Handle y/n input on a quoted price
    fn handle_confirm_trade_input(&mut self, key: KeyEvent) -> Option<Command> {
        let (mode, item) = match &self.mode {
            UiMode::ConfirmTrade { mode, item, .. } => (*mode, *item),
            _ => return None,
        };

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.mode = UiMode::Normal;
                Some(match mode {
                    TradeMode::Buying => Command::Buy(item),
                    TradeMode::Selling => Command::Sell(item),
                })
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.leave_shop();
                None
            }
            _ => None,
        }
    }

    fn leave_shop(&mut self) {
        let state = self.game_loop.state_mut();
        state.clear_messages();
        state.message("You left the shop");
        self.mode = UiMode::Normal;
    }

    fn reject_trade(&mut self, line: &str) {
        let state = self.game_loop.state_mut();
        state.clear_messages();
        state.message(line);
        self.mode = UiMode::Normal;
    }

    /// Handle input while help is shown
    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Handle input on the end-of-hunt screen
    fn handle_game_over_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle new-game setup input
    fn handle_new_game_input(&mut self, key: KeyEvent) {
        let setup = match &self.mode {
            UiMode::NewGame(setup) => setup.clone(),
            _ => return,
        };

        let new_state = match setup {
            NewGameState::EnterName { mut name } => match key.code {
                KeyCode::Enter => {
                    let name = if name.trim().is_empty() {
                        "Hunter".to_string()
                    } else {
                        name.trim().to_string()
                    };
                    NewGameState::SelectDifficulty { name, cursor: 1 }
                }
                KeyCode::Backspace => {
                    name.pop();
                    NewGameState::EnterName { name }
                }
                KeyCode::Char(c) if name.len() < 32 => {
                    name.push(c);
                    NewGameState::EnterName { name }
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                _ => NewGameState::EnterName { name },
            },
            NewGameState::SelectDifficulty { name, cursor } => {
                let choices = difficulty_choices();
                let len = choices.len();
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => NewGameState::SelectDifficulty {
                        name,
                        cursor: if cursor == 0 { len - 1 } else { cursor - 1 },
                    },
                    KeyCode::Down | KeyCode::Char('j') => NewGameState::SelectDifficulty {
                        name,
                        cursor: (cursor + 1) % len,
                    },
                    KeyCode::Enter | KeyCode::Char(' ') => NewGameState::Done {
                        name,
                        difficulty: choices[cursor.min(len - 1)],
                    },
                    KeyCode::Char('e') | KeyCode::Char('E') => NewGameState::Done {
                        name,
                        difficulty: Difficulty::Easy,
                    },
                    KeyCode::Char('n') | KeyCode::Char('N') => NewGameState::Done {
                        name,
                        difficulty: Difficulty::Normal,
                    },
                    KeyCode::Char('h') | KeyCode::Char('H') => NewGameState::Done {
                        name,
                        difficulty: Difficulty::Hard,
                    },
                    KeyCode::Char('s') | KeyCode::Char('S') => NewGameState::Done {
                        name,
                        difficulty: Difficulty::Samurai,
                    },
                    KeyCode::Esc => NewGameState::EnterName { name },
                    _ => NewGameState::SelectDifficulty { name, cursor },
                }
            }
            NewGameState::Done { .. } => {
                // Already done, transition to normal mode
                self.mode = UiMode::Normal;
                return;
            }
        };

        self.mode = UiMode::NewGame(new_state);
    }

    /// Start the setup screens from the name prompt
    pub fn start_new_game(&mut self) {
        self.mode = UiMode::NewGame(NewGameState::EnterName {
            name: String::new(),
        });
    }

    /// Start the setup screens with a pre-set name (from CLI)
    pub fn start_new_game_with_name(&mut self, name: String) {
        self.mode = UiMode::NewGame(NewGameState::SelectDifficulty { name, cursor: 1 });
    }

    /// Check if setup is complete and get the choices
    pub fn setup_choices(&self) -> Option<SetupChoices> {
        if let UiMode::NewGame(NewGameState::Done { name, difficulty }) = &self.mode {
            Some(SetupChoices {
                name: name.clone(),
                difficulty: *difficulty,
            })
        } else {
            None
        }
    }

    /// Check if in setup mode
    pub fn is_setting_up(&self) -> bool {
        matches!(self.mode, UiMode::NewGame(_))
    }

    /// Finish setup and switch to normal mode
    pub fn finish_setup(&mut self) {
        self.mode = UiMode::Normal;
    }

    /// Execute a command and update state
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        self.game_loop.state_mut().clear_messages();
        let result = self.game_loop.tick(command);

        match &result {
            GameLoopResult::HunterWon => {
                self.mode = UiMode::GameOver {
                    won: true,
                    cause: String::new(),
                };
            }
            GameLoopResult::HunterLost(cause) => {
                self.mode = UiMode::GameOver {
                    won: false,
                    cause: cause.clone(),
                };
            }
            GameLoopResult::HunterQuit => {
                self.should_quit = true;
            }
            GameLoopResult::Continue => {}
        }

        result
    }

    /// Render the current frame
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: town panel at top, status in middle, news at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(14),
                Constraint::Length(2),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let state = self.game_loop.state();
        frame.render_widget(TownWidget::new(&state.town, &self.theme), chunks[0]);
        frame.render_widget(
            StatusWidget::new(&state.hunter, &state.town, state.towns_visited, &self.theme),
            chunks[1],
        );
        frame.render_widget(NewsWidget::new(&state.messages, &self.theme), chunks[2]);

        // Render modal overlays based on mode (clone to avoid borrow conflicts)
        match self.mode.clone() {
            UiMode::Normal => {}
            UiMode::NewGame(setup) => self.render_new_game(frame, setup),
            UiMode::ShopInput { mode, input } => self.render_shop(frame, mode, &input),
            UiMode::ConfirmTrade { mode, item, price } => {
                self.render_confirm_trade(frame, mode, item, price)
            }
            UiMode::Help => self.render_help(frame),
            UiMode::GameOver { won, cause } => self.render_game_over(frame, won, &cause),
        }
    }

    /// Render the new-game setup modal
    fn render_new_game(&self, frame: &mut Frame, setup: NewGameState) {
        let area = centered_rect(50, 55, frame.area());
        frame.render_widget(Clear, area);

        // Build items as owned Strings to avoid lifetime issues
        let (title, items, cursor, footer): (&str, Vec<(String, String)>, usize, &str) =
            match &setup {
                NewGameState::EnterName { name } => {
                    let display = if name.is_empty() {
                        "_".to_string()
                    } else {
                        format!("{}_", name)
                    };
                    let items = vec![("".to_string(), display)];
                    (
                        "What's your name, Hunter?",
                        items,
                        0,
                        "Type your name, Enter to confirm, Esc to quit",
                    )
                }
                NewGameState::SelectDifficulty { cursor, .. } => {
                    let items: Vec<(String, String)> = difficulty_choices()
                        .iter()
                        .map(|d| {
                            let key = match d {
                                Difficulty::Easy => "e",
                                Difficulty::Normal => "n",
                                Difficulty::Hard => "h",
                                Difficulty::Samurai => "s",
                                Difficulty::Test => "t",
                            };
                            (key.to_string(), d.to_string())
                        })
                        .collect();
                    (
                        "Easy, Normal, or Hard mode?",
                        items,
                        *cursor,
                        "jk/arrows to move, Enter to select, Esc back",
                    )
                }
                NewGameState::Done { .. } => {
                    let items: Vec<(String, String)> =
                        vec![("".to_string(), "Press any key to start".to_string())];
                    (
                        "Welcome to TREASURE HUNTER!",
                        items,
                        0,
                        "Going hunting for the big treasure, eh?",
                    )
                }
            };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Render items as a list with cursor highlight
        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, (key, label))| {
                let style = if i == cursor {
                    Style::default()
                        .fg(self.theme.cursor_fg)
                        .bg(self.theme.cursor_bg)
                } else {
                    Style::default().fg(self.theme.text)
                };
                let prefix = if i == cursor { "> " } else { "  " };
                let text = if key.is_empty() {
                    format!("{}{}", prefix, label)
                } else {
                    format!("{}{} - {}", prefix, key, label)
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        let list = List::new(list_items);

        // Split inner area for list and footer
        let inner_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(list, inner_chunks[0]);

        let footer_para = Paragraph::new(footer)
            .style(Style::default().fg(self.theme.text_dim))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(footer_para, inner_chunks[1]);
    }

    /// Render the shop counter modal with the price listing
    fn render_shop(&self, frame: &mut Frame, mode: TradeMode, input: &str) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let state = self.game_loop.state();
        let mut lines: Vec<Line> = Vec::new();

        match mode {
            TradeMode::Buying => {
                lines.push(Line::from(Span::styled(
                    "Welcome to the shop! We have the finest wares in town.",
                    Style::default().fg(self.theme.text),
                )));
                lines.push(Line::from(Span::styled(
                    "Currently we have the following items:",
                    Style::default().fg(self.theme.text),
                )));
                lines.push(Line::from(""));
                for (item, price) in state.shop.inventory_listing() {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {item}"),
                            Style::default().fg(self.theme.accent),
                        ),
                        Span::styled(
                            format!(": {price} gold"),
                            Style::default().fg(self.theme.gold),
                        ),
                    ]));
                }
            }
            TradeMode::Selling => {
                lines.push(Line::from(Span::styled(
                    "You currently have the following items:",
                    Style::default().fg(self.theme.text),
                )));
                lines.push(Line::from(""));
                if state.hunter.equipment().is_empty() {
                    lines.push(Line::from(Span::styled(
                        "  nothing",
                        Style::default().fg(self.theme.text_muted),
                    )));
                } else {
                    for &item in state.hunter.equipment() {
                        let quote = state.shop.price_of(item, TradeMode::Selling);
                        lines.push(Line::from(vec![
                            Span::styled(
                                format!("  {item}"),
                                Style::default().fg(self.theme.accent),
                            ),
                            Span::styled(
                                format!(": {quote} gold"),
                                Style::default().fg(self.theme.gold),
                            ),
                        ]));
                    }
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.header)),
            Span::styled(
                format!("{input}_"),
                Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg),
            ),
        ]));

        let title = match mode {
            TradeMode::Buying => "What're you lookin' to buy?",
            TradeMode::Selling => "What're you lookin' to sell?",
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(lines), inner_chunks[0]);

        let footer = Paragraph::new("Type an item name, Enter to confirm, Esc to leave")
            .style(Style::default().fg(self.theme.text_dim))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(footer, inner_chunks[1]);
    }

    /// Render the y/n price prompt
    fn render_confirm_trade(&self, frame: &mut Frame, mode: TradeMode, item: Item, price: u32) {
        let area = centered_rect(44, 24, frame.area());
        frame.render_widget(Clear, area);

        let quote = match mode {
            TradeMode::Buying => format!("It'll cost you {price} gold."),
            TradeMode::Selling => format!("It'll get you {price} gold."),
        };
        let prompt = match mode {
            TradeMode::Buying => "Buy it (y/n)?",
            TradeMode::Selling => "Sell it (y/n)?",
        };

        let lines = vec![
            Line::from(Span::styled(quote, Style::default().fg(self.theme.gold))),
            Line::from(""),
            Line::from(Span::styled(prompt, Style::default().fg(self.theme.text))),
        ];

        let block = Block::default()
            .title(format!(" {item} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
            inner,
        );
    }

    /// Render the help modal
    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Town actions:
  b    Buy at the shop       s  Sell at the shop
  e    Explore terrain       m  Move on
  l    Look for trouble      d  Dig for gold
  h    Hunt for treasure     x  Give up and exit

Shop prompts:
  Type an item name, then Enter
  y/n  Answer a price quote  Esc  Leave the shop

Meta:
  ?    This help             Q  Quit immediately

Find all three treasures to win the hunt.
Run out of gold and the hunt is over.

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }

    /// Render the end-of-hunt screen with final statistics
    fn render_game_over(&self, frame: &mut Frame, won: bool, cause: &str) {
        use ratatui::style::Stylize;

        let area = centered_rect(70, 85, frame.area());
        frame.render_widget(Clear, area);

        let state = self.game_loop.state();
        let hunter = &state.hunter;

        let mut lines: Vec<Line> = Vec::new();

        // Title
        let (banner, banner_color) = if won {
            ("  THE HUNT IS WON  ", self.theme.good)
        } else {
            ("  THE HUNT IS OVER  ", self.theme.bad)
        };
        lines.push(Line::from(vec![Span::styled(
            banner,
            Style::default().fg(banner_color).bold(),
        )]));
        lines.push(Line::from(""));

        // Hunter identity
        lines.push(Line::from(vec![
            Span::styled(
                hunter.name().to_string(),
                Style::default().fg(self.theme.text).bold(),
            ),
            Span::raw(" the "),
            Span::styled("treasure hunter", Style::default().fg(self.theme.header)),
        ]));
        lines.push(Line::from(""));

        if won {
            lines.push(Line::from(Span::styled(
                "Found the last of the three treasures!",
                Style::default().fg(self.theme.good),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::raw("Undone by: "),
                Span::styled(cause.to_string(), Style::default().fg(self.theme.bad)),
            ]));
        }
        lines.push(Line::from(""));

        // Final numbers
        lines.push(Line::from(Span::styled(
            "── Final tally ──",
            Style::default().fg(self.theme.accent),
        )));
        lines.push(Line::from(format!("Gold: {}", hunter.gold())));
        lines.push(Line::from(format!(
            "Treasures: {}",
            hunter.treasure_listing()
        )));
        lines.push(Line::from(format!("Equipment: {}", hunter.equipment_listing())));
        lines.push(Line::from(format!("Towns visited: {}", state.towns_visited)));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press SPACE or ENTER to exit",
            Style::default().fg(self.theme.text_dim),
        )));

        let (title, border_color) = if won {
            (" You Win! ", self.theme.good)
        } else {
            (" Game Over ", self.theme.border_danger)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

/// Difficulties offered by the setup screen, hidden modes excluded
fn difficulty_choices() -> Vec<Difficulty> {
    Difficulty::iter().filter(|d| !d.is_hidden()).collect()
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
