use common::Arena;

use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};

pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, arena: &Arena, config: &RenderConfig) -> CharGrid {
        let mut grid = CharGrid::new(
            arena.width as usize,
            arena.height as usize,
            config.chars_per_cell,
        );

        // Reference lattice under everything
        let empty = self.renderer.render_empty();
        for y in 0..arena.height as usize {
            for x in 0..arena.width as usize {
                grid.set_logical_cell(x, y, &empty);
            }
        }

        // Food, then the snake on top; all coordinates are in range by
        // construction (toroidal arithmetic)
        let food = self.renderer.render_food();
        grid.set_logical_cell(arena.food.x as usize, arena.food.y as usize, &food);

        for (i, cell) in arena.snake.body.iter().enumerate() {
            let pattern = self.renderer.render_snake_segment(i == 0);
            grid.set_logical_cell(cell.x as usize, cell.y as usize, &pattern);
        }

        grid
    }
}
