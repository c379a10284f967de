//! SceneView: maps actors into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid is drawn inside a one-cell border, centered horizontally in the
//! viewport. Actor positions are in grid units; one grid unit of `cell_size`
//! maps to one terminal cell.

use crate::core::Actor;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corner of the play area (inside the border) in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone)]
pub struct SceneView {
    columns: u16,
    rows: u16,
    cell_size: i32,
    anchor_y: AnchorY,
    caption: String,
    origin: Origin,
}

const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(120, 120, 140),
    bg: Rgb::BLACK,
    bold: false,
    dim: false,
};

const CAPTION: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::BLACK,
    bold: true,
    dim: false,
};

const HINT: &str = " arrows/hjkl/wasd move, q quits ";

impl SceneView {
    pub fn new(columns: u16, rows: u16, cell_size: i32) -> Self {
        Self {
            columns,
            rows,
            cell_size: cell_size.max(1),
            anchor_y: AnchorY::Top,
            caption: String::new(),
            origin: Origin { x: 1, y: 1 },
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Where the play area starts after the last [`SceneView::clear_into`].
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Size the framebuffer to the viewport, blank it, and draw the frame.
    pub fn clear_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = self.columns.saturating_add(2);
        let frame_h = self.rows.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        self.origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_label(fb, start_x, start_y, frame_w, &format!(" {} ", self.caption));
        self.draw_label(fb, start_x, start_y + frame_h - 1, frame_w, HINT);
    }

    /// Paint one actor. Text running past the right edge of the grid is clipped,
    /// as are actors outside the grid.
    pub fn draw_actor(&self, fb: &mut FrameBuffer, actor: &Actor) {
        if actor.text().is_empty() {
            return;
        }
        let p = actor.position();
        let col = p.x.div_euclid(self.cell_size);
        let row = p.y.div_euclid(self.cell_size);
        if col < 0 || row < 0 || col >= self.columns as i32 || row >= self.rows as i32 {
            return;
        }

        let style = CellStyle::fg(actor.color());
        let x = self.origin.x + col as u16;
        let y = self.origin.y + row as u16;
        fb.put_str_clipped(x, y, actor.text(), self.origin.x + self.columns, style);
    }

    pub fn draw_actors<'a>(&self, fb: &mut FrameBuffer, actors: impl IntoIterator<Item = &'a Actor>) {
        for actor in actors {
            self.draw_actor(fb, actor);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_label(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, frame_w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        if text.trim().is_empty() || text_w + 2 > frame_w {
            return;
        }
        let x = start_x + (frame_w - text_w) / 2;
        fb.put_str(x, y, text, CAPTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn actor(text: &str, x: i32, y: i32) -> Actor {
        Actor::new(text, Point::new(x, y), Rgb::new(10, 200, 30))
    }

    fn view() -> (SceneView, FrameBuffer) {
        let mut view = SceneView::new(10, 5, 1);
        let mut fb = FrameBuffer::new(0, 0);
        view.clear_into(Viewport::new(12, 7), &mut fb);
        (view, fb)
    }

    #[test]
    fn border_wraps_the_grid() {
        let (_, fb) = view();
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 6).unwrap().ch, '└');
        assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
    }

    #[test]
    fn actor_lands_inside_the_border() {
        let (view, mut fb) = view();
        view.draw_actor(&mut fb, &actor("#", 0, 0));
        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, '#');
        assert_eq!(cell.style.fg, Rgb::new(10, 200, 30));
    }

    #[test]
    fn later_actors_cover_earlier_ones() {
        let (view, mut fb) = view();
        view.draw_actors(&mut fb, [&actor("#", 3, 2), &actor("*", 3, 2)]);
        assert_eq!(fb.get(4, 3).unwrap().ch, '*');
    }

    #[test]
    fn long_text_is_clipped_at_the_grid_edge() {
        let (view, mut fb) = view();
        view.draw_actor(&mut fb, &actor("Found key!", 5, 0));
        assert_eq!(fb.row_text(1), "│     Found│");
    }

    #[test]
    fn off_grid_actors_are_skipped() {
        let (view, mut fb) = view();
        let before = fb.clone();
        view.draw_actor(&mut fb, &actor("#", 10, 0));
        view.draw_actor(&mut fb, &actor("#", -1, 0));
        assert_eq!(fb, before);
    }

    #[test]
    fn cell_size_scales_positions() {
        let mut view = SceneView::new(10, 5, 15);
        let mut fb = FrameBuffer::new(0, 0);
        view.clear_into(Viewport::new(12, 7), &mut fb);
        view.draw_actor(&mut fb, &actor("#", 30, 15));
        assert_eq!(fb.get(3, 2).unwrap().ch, '#');
    }

    #[test]
    fn grid_is_centered_in_wide_viewports() {
        let mut view = SceneView::new(10, 5, 1).with_anchor_y(AnchorY::Center);
        let mut fb = FrameBuffer::new(0, 0);
        view.clear_into(Viewport::new(22, 17), &mut fb);
        assert_eq!(view.origin(), Origin { x: 6, y: 6 });
        assert_eq!(fb.get(5, 5).unwrap().ch, '┌');
    }

    #[test]
    fn caption_sits_on_the_top_border() {
        let mut view = SceneView::new(20, 3, 1).with_caption("RFK");
        let mut fb = FrameBuffer::new(0, 0);
        view.clear_into(Viewport::new(22, 5), &mut fb);
        assert!(fb.row_text(0).contains(" RFK "));
        assert!(fb.row_text(0).starts_with('┌'));
    }
}
