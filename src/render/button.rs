use macroquad::prelude::*;

/// A fixed clickable rectangle with a label.
pub struct Button {
    rect: Rect,
    label: &'static str,
}

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            label,
        }
    }

    pub fn draw(&self) {
        draw_rectangle(
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.rect.h,
            BLACK,
        );
        draw_text(
            self.label,
            self.rect.x + 10.0,
            self.rect.y + self.rect.h / 2.0 + 8.0,
            24.0,
            WHITE,
        );
    }

    /// True when the left mouse button went down over the rectangle this
    /// frame.
    pub fn is_clicked(&self) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let (mx, my) = mouse_position();
        self.rect.contains(vec2(mx, my))
    }
}
