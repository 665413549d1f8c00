//! Input handling - convert key events to commands
//!
//! Key bindings follow the original menu letters.

use crossterm::event::{KeyCode, KeyEvent};
use th_core::Command;

/// Convert a key event to a game command.
///
/// These are the "simple" bindings that map directly to a Command
/// without needing additional input. The shop flows (b/s) need an item
/// name and a confirmation, so they are handled in app.rs.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::Explore),        // e: explore surrounding terrain
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::MoveOn),         // m: move on to a different town
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::LookForTrouble), // l: look for trouble
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::DigForGold),     // d: dig for gold
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::HuntTreasure),   // h: hunt for treasure
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Quit),           // x: give up the hunt
        _ => None,
    }
}
