use std::collections::VecDeque;

use common::{Arena, Direction, Position, Snake};
use ratatui::style::{Color, Style};
use terminal::render::{
    arena::ArenaRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn test_arena() -> Arena {
    Arena {
        width: 10,
        height: 10,
        snake: Snake {
            body: VecDeque::from(vec![
                Position { x: 5, y: 5 }, // head
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 }, // tail
            ]),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            growth_pending: 0,
            score: 0,
        },
        food: Position { x: 7, y: 7 },
    }
}

#[test]
fn test_2x1_rendering() {
    let arena = test_arena();

    let char_dims = CharDimensions::new(2, 1);
    let renderer = StandardRenderer::new(char_dims);
    let arena_renderer = ArenaRenderer::new(renderer);
    let config = RenderConfig {
        chars_per_cell: char_dims,
    };

    let char_grid = arena_renderer.render(&arena, &config);
    let lines = char_grid.into_lines();

    // Verify dimensions
    assert_eq!(lines.len(), 10); // height unchanged
    assert_eq!(lines[0].len(), 20); // width doubled (10 * 2)

    // Head at (5,5) -> chars 10,11 at row 5, brighter glyph than the body
    assert_eq!(lines[5][10], '█');
    assert_eq!(lines[5][11], '█');

    // Body at (4,5) and (3,5)
    assert_eq!(lines[5][8], '▓');
    assert_eq!(lines[5][9], '▓');
    assert_eq!(lines[5][6], '▓');

    // Food at (7,7) -> chars 14,15 at row 7
    assert_eq!(lines[7][14], '●');
    assert_eq!(lines[7][15], '●');

    // Unoccupied cells carry the reference lattice dot
    assert_eq!(lines[0][0], '·');
    assert_eq!(lines[0][1], ' ');
}

#[test]
fn test_1x1_rendering() {
    let mut arena = test_arena();
    arena.width = 5;
    arena.height = 5;
    arena.snake.body = VecDeque::from(vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }]);
    arena.food = Position { x: 3, y: 3 };

    let char_dims = CharDimensions::new(1, 1);
    let renderer = StandardRenderer::new(char_dims);
    let arena_renderer = ArenaRenderer::new(renderer);
    let config = RenderConfig {
        chars_per_cell: char_dims,
    };

    let char_grid = arena_renderer.render(&arena, &config);
    let lines = char_grid.into_lines();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].len(), 5);

    assert_eq!(lines[2][2], '█'); // head
    assert_eq!(lines[2][1], '▓'); // body
    assert_eq!(lines[3][3], '●'); // food
    assert_eq!(lines[0][0], '·'); // lattice
}

#[test]
fn test_object_styles() {
    let arena = test_arena();

    let char_dims = CharDimensions::new(2, 1);
    let renderer = StandardRenderer::new(char_dims);
    let arena_renderer = ArenaRenderer::new(renderer);
    let config = RenderConfig {
        chars_per_cell: char_dims,
    };

    let char_grid = arena_renderer.render(&arena, &config);
    let styled = char_grid.into_styled_lines();

    let (_, row5) = &styled[5];
    assert_eq!(row5[10], Style::default().fg(Color::LightGreen)); // head
    assert_eq!(row5[8], Style::default().fg(Color::Green)); // body

    let (_, row7) = &styled[7];
    assert_eq!(row7[14], Style::default().fg(Color::Red)); // food

    let (_, row0) = &styled[0];
    assert_eq!(row0[0], Style::default().fg(Color::DarkGray)); // lattice
}
