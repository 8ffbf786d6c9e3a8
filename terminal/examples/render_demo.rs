use std::collections::VecDeque;

use common::{Arena, Direction, Position, Snake};
use terminal::render::{
    arena::ArenaRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    // A mid-game board snapshot
    let arena = Arena {
        width: 20,
        height: 10,
        snake: Snake {
            body: VecDeque::from(vec![
                Position { x: 8, y: 4 }, // head
                Position { x: 7, y: 4 },
                Position { x: 6, y: 4 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 6 },
            ]),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            growth_pending: 0,
            score: 20,
        },
        food: Position { x: 14, y: 7 },
    };

    let char_dims = CharDimensions::new(2, 1);
    let renderer = StandardRenderer::new(char_dims);
    let arena_renderer = ArenaRenderer::new(renderer);
    let config = RenderConfig {
        chars_per_cell: char_dims,
    };

    let char_grid = arena_renderer.render(&arena, &config);
    println!(
        "{}x{} board, {} characters per row\n",
        arena.width,
        arena.height,
        char_grid.physical_width()
    );

    for line in char_grid.into_lines() {
        println!("{}", line.into_iter().collect::<String>());
    }
}
