use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid of the given dimension.
    #[must_use]
    pub fn square(dimension: u16) -> Self {
        Self {
            width: dimension,
            height: dimension,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid dimension (the board is square).
pub const DEFAULT_GRID_DIMENSION: u16 = 20;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds. The speed curve clamps here so a
/// long game never becomes a zero-duration tick.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Milliseconds shaved off the tick interval per food eaten.
pub const TICK_INTERVAL_STEP_MS: u64 = 5;

/// Points granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Food colors, drawn at random per spawn. Purely cosmetic.
pub const FOOD_PALETTE: &[Color] = &[
    Color::Rgb(0xFF, 0x52, 0x52), // red
    Color::Rgb(0xFF, 0x40, 0x81), // pink
    Color::Rgb(0xE0, 0x40, 0xFB), // purple
    Color::Rgb(0x7C, 0x4D, 0xFF), // deep purple
    Color::Rgb(0x53, 0x6D, 0xFE), // indigo
    Color::Rgb(0x44, 0x8A, 0xFF), // blue
    Color::Rgb(0x40, 0xC4, 0xFF), // light blue
    Color::Rgb(0x18, 0xFF, 0xFF), // cyan
    Color::Rgb(0x64, 0xFF, 0xDA), // teal
    Color::Rgb(0x69, 0xF0, 0xAE), // green
    Color::Rgb(0xB2, 0xFF, 0x59), // light green
    Color::Rgb(0xEE, 0xFF, 0x41), // lime
    Color::Rgb(0xFF, 0xFF, 0x00), // yellow
    Color::Rgb(0xFF, 0xD7, 0x40), // amber
    Color::Rgb(0xFF, 0xAB, 0x40), // orange
];

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Default green-on-dark theme, matching the classic look.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(0x4C, 0xAF, 0x50),
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Glyph drawn for food cells.
pub const GLYPH_FOOD: &str = "●";

/// Glyph drawn for snake segments.
pub const GLYPH_SNAKE: &str = "█";
