//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or TH_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Muted text (empty states, placeholder)
    pub text_muted: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help, game setup)
    pub border_accent: Color,
    /// Action border (shop prompt, trade confirmation)
    pub border_action: Color,
    /// Danger border (game over screen)
    pub border_danger: Color,

    // Interactive elements
    /// Selected/cursor item foreground
    pub cursor_fg: Color,
    /// Selected/cursor item background
    pub cursor_bg: Color,

    // Semantic colors
    /// Section headers, accent text
    pub accent: Color,
    /// Group headers (shop catalog, menu)
    pub header: Color,
    /// Positive/good (treasure found, brawl won)
    pub good: Color,
    /// Negative/bad (brawl lost, game over)
    pub bad: Color,
    /// Gold amounts
    pub gold: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Cyan,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
            gold: Color::Yellow,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Blue,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
            gold: Color::Yellow,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and TH_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("TH_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
            if let Some(bg_str) = colorfgbg.rsplit(';').next() {
                if let Ok(bg_idx) = bg_str.parse::<u8>() {
                    return matches!(bg_idx, 7 | 9..=15);
                }
            }
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
