use macroquad::prelude::*;

/// Staff geometry. Positions are in screen pixels; the staff has five lines
/// spaced `line_spacing` apart.
#[derive(Debug, Clone, Copy)]
pub struct StaffConfig {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub line_spacing: f32,
    pub note_x: f32,
    pub line_thickness: f32,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            left: 100.0,
            right: 700.0,
            top: 200.0,
            line_spacing: 20.0,
            note_x: 400.0,
            line_thickness: 2.0,
        }
    }
}

/// Ledger lines needed to reach a staff position: none inside the staff,
/// then one per two half-steps beyond the outer line.
pub fn ledger_line_count(position: i32) -> u32 {
    let distance = position.unsigned_abs();
    if distance <= 4 {
        0
    } else {
        (distance - 4).div_ceil(2)
    }
}

/// Draws the staff and note glyphs. Pure rendering; holds only geometry.
pub struct StaffRenderer {
    config: StaffConfig,
}

impl StaffRenderer {
    pub fn new() -> Self {
        Self::with_config(StaffConfig::default())
    }

    pub fn with_config(config: StaffConfig) -> Self {
        Self { config }
    }

    /// Five equally spaced horizontal lines.
    pub fn draw_staff(&self) {
        for i in 0..5 {
            let y = self.config.top + i as f32 * self.config.line_spacing;
            draw_line(
                self.config.left,
                y,
                self.config.right,
                y,
                self.config.line_thickness,
                BLACK,
            );
        }
    }

    /// Note glyph at the given staff position, with ledger lines when the
    /// position sits beyond the staff.
    pub fn draw_note(&self, position: i32) {
        let x = self.config.note_x;
        let y = self.note_y(position);

        draw_ellipse_lines(x, y, 10.0, 5.0, 0.0, self.config.line_thickness, BLACK);

        for i in 0..ledger_line_count(position) {
            let ledger_y = if position > 0 {
                self.config.top - (i + 1) as f32 * self.config.line_spacing
            } else {
                self.bottom_y() + (i + 1) as f32 * self.config.line_spacing
            };
            draw_line(
                x - 20.0,
                ledger_y,
                x + 20.0,
                ledger_y,
                self.config.line_thickness,
                BLACK,
            );
        }
    }

    /// Vertical center of the glyph for a staff position.
    pub fn note_y(&self, position: i32) -> f32 {
        self.middle_y() - position as f32 * (self.config.line_spacing / 2.0)
    }

    fn middle_y(&self) -> f32 {
        self.config.top + 2.0 * self.config.line_spacing
    }

    fn bottom_y(&self) -> f32 {
        self.config.top + 4.0 * self.config.line_spacing
    }
}

impl Default for StaffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ledger_lines_inside_the_staff() {
        for p in -4..=4 {
            assert_eq!(ledger_line_count(p), 0, "position {p}");
        }
    }

    #[test]
    fn ledger_lines_grow_one_per_two_steps() {
        assert_eq!(ledger_line_count(5), 1);
        assert_eq!(ledger_line_count(6), 1);
        assert_eq!(ledger_line_count(7), 2);
        assert_eq!(ledger_line_count(8), 2);
        assert_eq!(ledger_line_count(9), 3);
    }

    #[test]
    fn ledger_lines_are_symmetric() {
        for p in 1..12 {
            assert_eq!(ledger_line_count(p), ledger_line_count(-p));
        }
    }

    #[test]
    fn note_y_steps_half_a_line_per_position() {
        let staff = StaffRenderer::new();
        // Middle line at top + 2 spacings.
        assert_eq!(staff.note_y(0), 240.0);
        // One position up is half a line spacing higher on screen.
        assert_eq!(staff.note_y(1), 230.0);
        assert_eq!(staff.note_y(-2), 260.0);
        // Top and bottom staff lines.
        assert_eq!(staff.note_y(4), 200.0);
        assert_eq!(staff.note_y(-4), 280.0);
    }
}
