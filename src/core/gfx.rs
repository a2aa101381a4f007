use crate::Result;

// --- Public Data Contract ---

/// Screen rectangle in logical 320x200 pixels. `bottom`/`right` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Rect {
    #[inline(always)]
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Grows (positive) or shrinks (negative) every edge by `by`.
    #[inline(always)]
    pub const fn inflate(self, by: i32) -> Self {
        Self {
            top: self.top - by,
            left: self.left - by,
            bottom: self.bottom + by,
            right: self.right + by,
        }
    }

    #[inline(always)]
    pub const fn offset(self, dy: i32, dx: i32) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            bottom: self.bottom + dy,
            right: self.right + dx,
        }
    }

    #[inline(always)]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline(always)]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline(always)]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkGray,
    LightGray,
    BrightWhite,
    Rgb(u8, u8, u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// Drawing surface of the menu. Any error is fatal to the menu.
pub trait Renderer {
    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, color: Color) -> Result<()>;

    /// Width in pixels of `text` in the menu font.
    fn text_width(&self, text: &str) -> i32;

    /// `alpha` 255 is opaque.
    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: u8) -> Result<()>;

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Arrow glyph with its top-left corner at `x`, `y`. Color-keyed.
    fn blit_arrow(&mut self, arrow: Arrow, x: i32, y: i32, color: Color) -> Result<()>;

    fn present(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rect_geometry() {
        let outer = Rect::new(0, 110, 192, 210);
        let inner = outer.inflate(-5);
        assert_eq!(inner, Rect::new(5, 115, 187, 205));
        assert_eq!(inner.width(), 90);
        assert!(inner.contains(115, 5));
        assert!(!inner.contains(205, 5), "right edge is exclusive");
        assert_eq!(inner.offset(13, 0).top, 18);
    }
}
