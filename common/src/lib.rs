mod arena;
mod constants;
mod game_state;
mod snake;

pub mod util;

pub use arena::*;
pub use constants::*;
pub use game_state::*;
pub use snake::*;
pub use util::PseudoRandom;
