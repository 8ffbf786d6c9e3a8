/// Arena width in logical cells
pub const GRID_WIDTH: u16 = 30;

/// Arena height in logical cells
pub const GRID_HEIGHT: u16 = 30;

/// Default tick interval in milliseconds for the game loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Number of cells the snake starts with
pub const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Points awarded per piece of food eaten
pub const SCORE_PER_FOOD: u32 = 10;
