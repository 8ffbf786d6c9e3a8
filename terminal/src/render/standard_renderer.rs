use ratatui::style::{Color, Style};

use super::traits::GameObjectRenderer;
use super::types::{CharDimensions, CharPattern};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, is_head: bool) -> CharPattern {
        // Head is a brighter shade of the same color as the body
        let (ch, style) = if is_head {
            ('█', Style::default().fg(Color::LightGreen))
        } else {
            ('▓', Style::default().fg(Color::Green))
        };
        CharPattern::single(ch, style, self.char_dims)
    }

    fn render_food(&self) -> CharPattern {
        let style = Style::default().fg(Color::Red);
        let chars = if self.char_dims.horizontal == 2 && self.char_dims.vertical == 1 {
            vec![vec!['●', '●']]
        } else if self.char_dims.horizontal == 1 && self.char_dims.vertical == 1 {
            vec![vec!['●']]
        } else {
            // Checkerboard fill for larger cell sizes
            let mut pattern = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
            for (y, row) in pattern.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + y) % 2 == 0 {
                        *cell = '●';
                    }
                }
            }
            pattern
        };
        CharPattern::new(chars, style)
    }

    fn render_empty(&self) -> CharPattern {
        // One faint dot per cell stands in for grid lines
        let style = Style::default().fg(Color::DarkGray);
        let mut chars = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
        chars[0][0] = '·';
        CharPattern::new(chars, style)
    }
}
