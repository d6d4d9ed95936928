//! A character buffer for plotting sampled points to the terminal.
use glam::Vec2;

/// One character cell per unit of the sampling region.
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Marks the cell containing `point`. Points outside the canvas are ignored.
    pub fn plot(&mut self, point: Vec2, mark: char) {
        let x = point.x as usize;
        let y = point.y as usize;
        if point.x >= 0.0 && point.y >= 0.0 && x < self.width && y < self.height {
            self.cells[y * self.width + x] = mark;
        }
    }

    /// Renders the canvas row by row, top row first.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}
