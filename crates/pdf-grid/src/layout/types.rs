//! Layout data types
//!
//! These types carry the results of the layout calculation between the
//! configuration and the renderers (PDF export and on-screen preview).

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in millimeters, origin at the page's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Size of the image as drawn in every cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSize {
    pub width: f32,
    pub height: f32,
}

/// Final placement of one copy of the image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub position: GridPosition,
    /// The full grid cell
    pub cell: Rect,
    /// The scaled, aspect-preserved image rectangle centered in `cell`
    pub draw: Rect,
}

/// Direction of a separator line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAxis {
    /// Runs top to bottom between two columns
    Vertical,
    /// Runs left to right between two rows
    Horizontal,
}

/// A dashed cut line between two neighbouring rows or columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorLine {
    pub axis: LineAxis,
    /// Internal boundary index (1..columns for vertical, 1..rows for horizontal)
    pub index: usize,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Grid geometry derived from a validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// Page width minus both side margins
    pub usable_width_mm: f32,
    /// Page height minus top and bottom margins
    pub usable_height_mm: f32,
    pub cell_width_mm: f32,
    pub cell_height_mm: f32,
    /// Fraction (0.1..=1.0) of the limiting cell dimension the image may fill
    pub scale_factor: f32,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// The area inside the margins
    pub fn usable_rect(&self) -> Rect {
        Rect::new(
            self.margin_mm,
            self.margin_mm,
            self.usable_width_mm,
            self.usable_height_mm,
        )
    }

    /// Bounds of the cell at `pos`
    pub fn cell_rect(&self, pos: GridPosition) -> Rect {
        Rect::new(
            self.margin_mm + pos.col as f32 * self.cell_width_mm,
            self.margin_mm + pos.row as f32 * self.cell_height_mm,
            self.cell_width_mm,
            self.cell_height_mm,
        )
    }

    /// All grid positions in row-major order (rows outer, columns inner)
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |col| GridPosition::new(row, col)))
    }
}
