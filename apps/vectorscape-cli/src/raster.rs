//! Terminal rasterizer for recorded line commands.
//!
//! Debug output only: scales surface coordinates down to a character grid
//! and plots each command with Bresenham. Brighter glyphs for more opaque
//! strokes, so depth fading is visible even in a terminal.

use vectorscape_render::LineCommand;

pub struct AsciiRaster {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl AsciiRaster {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    /// Plot every command, mapping a `screen_w`×`screen_h` surface onto the
    /// character grid.
    pub fn plot_commands(&mut self, commands: &[LineCommand], screen_w: f64, screen_h: f64) {
        let sx = self.cols as f64 / screen_w;
        let sy = self.rows as f64 / screen_h;
        for cmd in commands {
            let glyph = if cmd.style.alpha > 0.7 {
                '#'
            } else if cmd.style.alpha > 0.45 {
                '+'
            } else {
                '.'
            };
            self.line(
                (cmd.x1 * sx).round() as i64,
                (cmd.y1 * sy).round() as i64,
                (cmd.x2 * sx).round() as i64,
                (cmd.y2 * sy).round() as i64,
                glyph,
            );
        }
    }

    pub fn to_string_frame(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, glyph: char) {
        // Bresenham; endpoints may be far off-grid, plot() bounds-checks.
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let step_x = if x1 < x2 { 1 } else { -1 };
        let step_y = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.plot(x, y, glyph);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 || x >= self.cols as i64 || y >= self.rows as i64 {
            return;
        }
        let index = y as usize * self.cols + x as usize;
        // Never let a faint stroke overwrite a bright one.
        let current = self.cells[index];
        let rank = |c: char| match c {
            '#' => 3,
            '+' => 2,
            '.' => 1,
            _ => 0,
        };
        if rank(glyph) > rank(current) {
            self.cells[index] = glyph;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectorscape_common::{Color, LineStyle};

    fn cmd(x1: f64, y1: f64, x2: f64, y2: f64, alpha: f64) -> LineCommand {
        LineCommand {
            x1,
            y1,
            x2,
            y2,
            style: LineStyle {
                width: 1.0,
                color: Color(0x00ff00),
                alpha,
            },
        }
    }

    #[test]
    fn horizontal_line_fills_a_row() {
        let mut raster = AsciiRaster::new(10, 4);
        raster.plot_commands(&[cmd(0.0, 50.0, 99.0, 50.0, 1.0)], 100.0, 100.0);
        let frame = raster.to_string_frame();
        let row = frame.lines().nth(2).unwrap();
        assert!(row.chars().filter(|&c| c == '#').count() >= 9);
    }

    #[test]
    fn off_grid_endpoints_are_safe() {
        let mut raster = AsciiRaster::new(10, 10);
        raster.plot_commands(&[cmd(-500.0, -500.0, 500.0, 500.0, 1.0)], 100.0, 100.0);
        // Diagonal passes through the grid without panicking.
        assert!(raster.to_string_frame().contains('#'));
    }

    #[test]
    fn bright_strokes_win_over_faint_ones() {
        let mut raster = AsciiRaster::new(5, 5);
        raster.plot_commands(
            &[cmd(0.0, 0.0, 100.0, 100.0, 1.0), cmd(0.0, 0.0, 100.0, 100.0, 0.3)],
            100.0,
            100.0,
        );
        assert!(!raster.to_string_frame().contains('.'));
    }
}
