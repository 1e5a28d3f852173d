//! Render window: how many rows the display layer receives.

/// Grows the number of rendered rows in fixed slices as the list scrolls.
///
/// One slice is `page_size` rows. A slice is considered consumed after
/// scrolling `page_size / 1.25` rows, so the next slice is already rendered
/// before the user reaches the end of the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderWindow {
    page_size: usize,
    row_height: f64,
    scroll_top: f64,
}

impl RenderWindow {
    /// Create a window of `page_size` rows of `row_height` pixels.
    pub fn new(page_size: usize, row_height: f64) -> Self {
        Self {
            page_size: page_size.max(1),
            row_height: row_height.max(1.0),
            scroll_top: 0.0,
        }
    }

    /// Record a new scroll offset and return the rows to render.
    pub fn scroll_to(&mut self, scroll_top: f64) -> usize {
        self.scroll_top = scroll_top;
        self.rendered_rows()
    }

    /// Scroll back to the top.
    pub fn reset(&mut self) {
        self.scroll_top = 0.0;
    }

    /// Current scroll offset in pixels.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Number of rows to render at the current offset. Never less than one
    /// slice.
    pub fn rendered_rows(&self) -> usize {
        let increment = self.page_size as f64 / 1.25 * self.row_height;
        let slices = (self.scroll_top / increment).ceil();
        let slices = if slices.is_finite() && slices >= 1.0 {
            slices as usize
        } else {
            1
        };
        slices.saturating_mul(self.page_size)
    }
}
