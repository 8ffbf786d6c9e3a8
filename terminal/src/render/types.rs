use ratatui::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_cell: CharDimensions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Character buffer covering the whole arena, one styled glyph per
/// physical terminal cell.
pub struct CharGrid {
    chars: Vec<Vec<char>>,
    styles: Vec<Vec<Style>>,
    logical_width: usize,
    logical_height: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(logical_width: usize, logical_height: usize, char_dims: CharDimensions) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        Self {
            chars: vec![vec![' '; physical_width]; physical_height],
            styles: vec![vec![Style::default(); physical_width]; physical_height],
            logical_width,
            logical_height,
            char_dims,
        }
    }

    /// Stamp a pattern over the block of physical cells backing one
    /// logical cell.
    pub fn set_logical_cell(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(cell) = self
                    .chars
                    .get_mut(start_y + dy)
                    .and_then(|r| r.get_mut(start_x + dx))
                {
                    *cell = ch;
                }
                if let Some(style) = self
                    .styles
                    .get_mut(start_y + dy)
                    .and_then(|r| r.get_mut(start_x + dx))
                {
                    *style = pattern.style;
                }
            }
        }
    }

    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.chars
    }

    pub fn into_styled_lines(self) -> Vec<(Vec<char>, Vec<Style>)> {
        self.chars.into_iter().zip(self.styles).collect()
    }

    pub fn physical_width(&self) -> usize {
        self.logical_width * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.logical_height * self.char_dims.vertical
    }
}

/// Glyph block for one logical cell, with the style it is drawn in.
#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
    pub style: Style,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>, style: Style) -> Self {
        Self { chars, style }
    }

    pub fn single(ch: char, style: Style, dims: CharDimensions) -> Self {
        let chars = vec![vec![ch; dims.horizontal]; dims.vertical];
        Self { chars, style }
    }
}
