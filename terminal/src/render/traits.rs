use super::types::{CharDimensions, CharPattern};

pub trait GameObjectRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_snake_segment(&self, is_head: bool) -> CharPattern;

    fn render_food(&self) -> CharPattern;

    /// Background pattern for an unoccupied cell; forms the reference
    /// lattice of the board.
    fn render_empty(&self) -> CharPattern;
}
