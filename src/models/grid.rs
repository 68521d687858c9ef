//! Pad grid geometry.
//!
//! The number pad is a fixed 5x5 grid. Terminal cells are roughly twice as
//! tall as they are wide, so a "square" key is rendered two characters wide
//! per line of height. The grid is centered inside whatever area the host
//! application hands the widget.

use ratatui::layout::Rect;

/// Minimum key cell size in terminal cells.
const MIN_CELL_WIDTH: u16 = 3;
/// Minimum key cell height in terminal lines.
const MIN_CELL_HEIGHT: u16 = 3;

/// A key's cell assignment within the pad grid.
///
/// Spans default to 1; wide keys ("0", "CANCEL") span columns and the
/// enter key spans rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    /// Leftmost grid column occupied by the key (0-based)
    pub column: u16,
    /// Topmost grid row occupied by the key (0-based)
    pub row: u16,
    /// Number of columns covered
    pub column_span: u16,
    /// Number of rows covered
    pub row_span: u16,
}

impl GridSlot {
    /// Creates a 1x1 slot at the given grid position.
    #[must_use]
    pub const fn new(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            column_span: 1,
            row_span: 1,
        }
    }

    /// Sets the column span.
    #[must_use]
    pub const fn with_column_span(mut self, span: u16) -> Self {
        self.column_span = span;
        self
    }

    /// Sets the row span.
    #[must_use]
    pub const fn with_row_span(mut self, span: u16) -> Self {
        self.row_span = span;
        self
    }
}

/// Resolved cell metrics for one layout pass.
#[derive(Debug, Clone, Copy)]
struct CellMetrics {
    cell_width: u16,
    cell_height: u16,
    origin_x: u16,
    origin_y: u16,
}

/// Computes terminal rectangles for pad grid slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadGrid {
    columns: u16,
    rows: u16,
    horizontal_gap: u16,
    vertical_gap: u16,
}

impl PadGrid {
    /// Creates a 5x5 pad grid with the given gaps between cells.
    #[must_use]
    pub const fn new(horizontal_gap: u16, vertical_gap: u16) -> Self {
        Self {
            columns: 5,
            rows: 5,
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Grid column count.
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Grid row count.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Horizontal gap between cells.
    #[must_use]
    pub const fn horizontal_gap(&self) -> u16 {
        self.horizontal_gap
    }

    /// Vertical gap between cells.
    #[must_use]
    pub const fn vertical_gap(&self) -> u16 {
        self.vertical_gap
    }

    /// Updates the horizontal gap.
    pub fn set_horizontal_gap(&mut self, gap: u16) {
        self.horizontal_gap = gap;
    }

    /// Updates the vertical gap.
    pub fn set_vertical_gap(&mut self, gap: u16) {
        self.vertical_gap = gap;
    }

    /// Resolves cell size and grid origin for the given outer area.
    ///
    /// Cells keep a 2:1 width-to-height ratio so keys read as square, and
    /// the grid as a whole is centered inside `area`. Areas too small for
    /// the minimum cell size still produce metrics; the resulting rects
    /// are clipped by `slot_rect`.
    fn metrics(&self, area: Rect) -> CellMetrics {
        // Saturating arithmetic throughout: gaps are unbounded u16 input,
        // and oversized values must degrade to clipped rects, not panic.
        let gap_width = self.horizontal_gap.saturating_mul(self.columns - 1);
        let gap_height = self.vertical_gap.saturating_mul(self.rows - 1);

        let max_cell_width = area.width.saturating_sub(gap_width) / self.columns;
        let max_cell_height = area.height.saturating_sub(gap_height) / self.rows;

        // Square keys: two characters of width per line of height.
        let cell_height = max_cell_height.min(max_cell_width / 2).max(MIN_CELL_HEIGHT);
        let cell_width = (cell_height * 2).min(max_cell_width).max(MIN_CELL_WIDTH);

        let total_width = (cell_width * self.columns).saturating_add(gap_width);
        let total_height = (cell_height * self.rows).saturating_add(gap_height);

        CellMetrics {
            cell_width,
            cell_height,
            origin_x: area.x + area.width.saturating_sub(total_width) / 2,
            origin_y: area.y + area.height.saturating_sub(total_height) / 2,
        }
    }

    /// Computes the terminal rectangle of a slot within `area`.
    ///
    /// Spanned slots cover the spanned cells plus the gaps between them.
    /// The result is clipped to `area`; slots that fall entirely outside
    /// yield an empty rectangle.
    #[must_use]
    pub fn slot_rect(&self, area: Rect, slot: GridSlot) -> Rect {
        let m = self.metrics(area);

        let column_span = slot.column_span.max(1);
        let row_span = slot.row_span.max(1);

        let step_x = m.cell_width.saturating_add(self.horizontal_gap);
        let step_y = m.cell_height.saturating_add(self.vertical_gap);

        let rect = Rect {
            x: m.origin_x.saturating_add(slot.column.saturating_mul(step_x)),
            y: m.origin_y.saturating_add(slot.row.saturating_mul(step_y)),
            width: m
                .cell_width
                .saturating_mul(column_span)
                .saturating_add(self.horizontal_gap.saturating_mul(column_span - 1)),
            height: m
                .cell_height
                .saturating_mul(row_span)
                .saturating_add(self.vertical_gap.saturating_mul(row_span - 1)),
        };

        rect.intersection(area)
    }

    /// Computes the bounding rectangle of the whole centered grid.
    #[must_use]
    pub fn grid_rect(&self, area: Rect) -> Rect {
        let m = self.metrics(area);
        let rect = Rect {
            x: m.origin_x,
            y: m.origin_y,
            width: (m.cell_width * self.columns)
                .saturating_add(self.horizontal_gap.saturating_mul(self.columns - 1)),
            height: (m.cell_height * self.rows)
                .saturating_add(self.vertical_gap.saturating_mul(self.rows - 1)),
        };
        rect.intersection(area)
    }
}

impl Default for PadGrid {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_slot_rect_basic() {
        let grid = PadGrid::new(1, 1);
        // 80 wide: (80 - 4) / 5 = 15 max cell width
        // 24 high: (24 - 4) / 5 = 4 max cell height -> cell 8x4
        let rect = grid.slot_rect(AREA, GridSlot::new(0, 0));
        assert_eq!(rect, Rect::new(18, 0, 8, 4));

        let rect = grid.slot_rect(AREA, GridSlot::new(1, 2));
        assert_eq!(rect, Rect::new(27, 10, 8, 4));
    }

    #[test]
    fn test_grid_is_centered() {
        let grid = PadGrid::new(1, 1);
        let bounds = grid.grid_rect(AREA);
        // Total grid: 5*8 + 4 = 44 wide, 5*4 + 4 = 24 high
        assert_eq!(bounds, Rect::new(18, 0, 44, 24));
        // Centered horizontally: equal margins left and right
        assert_eq!(bounds.x - AREA.x, AREA.right() - bounds.right());
    }

    #[test]
    fn test_column_span_covers_gap() {
        let grid = PadGrid::new(1, 1);
        let single_a = grid.slot_rect(AREA, GridSlot::new(3, 0));
        let single_b = grid.slot_rect(AREA, GridSlot::new(4, 0));
        let spanned = grid.slot_rect(AREA, GridSlot::new(3, 0).with_column_span(2));

        assert_eq!(spanned.x, single_a.x);
        assert_eq!(spanned.right(), single_b.right());
        assert_eq!(spanned.width, single_a.width + single_b.width + 1);
    }

    #[test]
    fn test_row_span_covers_gap() {
        let grid = PadGrid::new(1, 1);
        let top = grid.slot_rect(AREA, GridSlot::new(4, 3));
        let bottom = grid.slot_rect(AREA, GridSlot::new(4, 4));
        let spanned = grid.slot_rect(AREA, GridSlot::new(4, 3).with_row_span(2));

        assert_eq!(spanned.y, top.y);
        assert_eq!(spanned.bottom(), bottom.bottom());
        assert_eq!(spanned.height, top.height + bottom.height + 1);
    }

    #[test]
    fn test_adjacent_slots_do_not_overlap() {
        let grid = PadGrid::new(1, 1);
        let a = grid.slot_rect(AREA, GridSlot::new(0, 0));
        let b = grid.slot_rect(AREA, GridSlot::new(1, 0));
        assert!(a.right() < b.x, "gap expected between columns");

        let c = grid.slot_rect(AREA, GridSlot::new(0, 1));
        assert!(a.bottom() < c.y, "gap expected between rows");
    }

    #[test]
    fn test_zero_gap() {
        let grid = PadGrid::new(0, 0);
        let a = grid.slot_rect(AREA, GridSlot::new(0, 0));
        let b = grid.slot_rect(AREA, GridSlot::new(1, 0));
        assert_eq!(a.right(), b.x);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let grid = PadGrid::new(1, 1);
        let tiny = Rect::new(0, 0, 4, 4);
        let rect = grid.slot_rect(tiny, GridSlot::new(0, 0));
        // Clipped to the area, never larger than it
        assert!(rect.width <= tiny.width);
        assert!(rect.height <= tiny.height);

        let empty = Rect::new(0, 0, 0, 0);
        let rect = grid.slot_rect(empty, GridSlot::new(4, 4).with_row_span(2));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }

    #[test]
    fn test_oversized_gap_clips_instead_of_overflowing() {
        let grid = PadGrid::new(20_000, 20_000);
        let rect = grid.slot_rect(AREA, GridSlot::new(0, 0));
        assert!(rect.width <= AREA.width);
        assert!(rect.height <= AREA.height);

        // Slots past the first step land outside the area entirely
        let far = grid.slot_rect(AREA, GridSlot::new(4, 4).with_column_span(2));
        assert_eq!(far.width, 0);
        assert_eq!(far.height, 0);

        let bounds = grid.grid_rect(AREA);
        assert!(bounds.width <= AREA.width);
        assert!(bounds.height <= AREA.height);
    }

    #[test]
    fn test_hit_containment() {
        let grid = PadGrid::new(1, 1);
        let rect = grid.slot_rect(AREA, GridSlot::new(2, 2));
        assert!(rect.contains(Position::new(rect.x, rect.y)));
        assert!(rect.contains(Position::new(
            rect.x + rect.width - 1,
            rect.y + rect.height - 1
        )));
        assert!(!rect.contains(Position::new(rect.x + rect.width, rect.y)));
    }
}
