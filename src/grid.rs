//! Fixed-size pixel grid and the drawing primitives used to build avatars.
//!
//! A grid is a square matrix of cells that are either transparent (`None`)
//! or an opaque color. Every primitive clamps to the grid: writes outside
//! `[0, size)` are silently dropped, never wrapped and never an error.
//!
//! Circle and ellipse fills test every cell of the grid against the real-valued
//! shape equation, so results depend only on the inputs and the grid size.

use image::{Rgba, RgbaImage};

/// Canonical avatar grid side length.
pub const GRID_SIZE: usize = 32;

/// A single grid cell: `None` is transparent.
pub type Cell = Option<Rgba<u8>>;

/// Transparent color used when converting to an image
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 4-connected neighbor offsets (W, E, N, S)
const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square canvas of transparent-or-colored cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl PixelGrid {
    /// Create a `size x size` grid with every cell transparent.
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some((y * size + x) as usize)
    }

    /// Cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Whether the cell at `(x, y)` holds a color.
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Overwrite one cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        self.put(x, y, Some(color));
    }

    fn put(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Recolor a cell only if it is already opaque.
    ///
    /// Returns true when the cell was recolored.
    pub fn tint(&mut self, x: i32, y: i32, color: Rgba<u8>) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i].is_some() => {
                self.cells[i] = Some(color);
                true
            }
            _ => false,
        }
    }

    /// Fill every cell within `radius` (Euclidean, inclusive) of `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: f64, color: Rgba<u8>) {
        self.fill_where(|x, y| circle_contains(cx, cy, radius, x, y), Some(color));
    }

    /// Make every cell within `radius` of `(cx, cy)` transparent.
    pub fn clear_circle(&mut self, cx: i32, cy: i32, radius: f64) {
        self.fill_where(|x, y| circle_contains(cx, cy, radius, x, y), None);
    }

    /// Fill every cell where `((x-cx)/rx)^2 + ((y-cy)/ry)^2 <= 1`.
    ///
    /// Non-positive radii draw nothing.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: f64, ry: f64, color: Rgba<u8>) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        self.fill_where(
            |x, y| {
                let dx = f64::from(x) - f64::from(cx);
                let dy = f64::from(y) - f64::from(cy);
                (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
            },
            Some(color),
        );
    }

    /// Fill a `w x h` rectangle with its top-left at `(x, y)`, clamped to the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
        let size = self.size as i32;
        for py in y.max(0)..y.saturating_add(h).min(size) {
            for px in x.max(0)..x.saturating_add(w).min(size) {
                self.set(px, py, color);
            }
        }
    }

    fn fill_where(&mut self, contains: impl Fn(i32, i32) -> bool, cell: Cell) {
        let size = self.size as i32;
        for y in 0..size {
            for x in 0..size {
                if contains(x, y) {
                    self.put(x, y, cell);
                }
            }
        }
    }

    /// Color every transparent cell that touches an opaque cell (N/E/S/W).
    ///
    /// Neighbors are read from a snapshot taken before the pass, so the
    /// outline is exactly one cell thick.
    pub fn add_outline(&mut self, color: Rgba<u8>) {
        let snapshot = self.clone();
        let size = self.size as i32;
        for y in 0..size {
            for x in 0..size {
                if snapshot.is_opaque(x, y) {
                    continue;
                }
                let touches = NEIGHBORS
                    .iter()
                    .any(|&(dx, dy)| snapshot.is_opaque(x + dx, y + dy));
                if touches {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Blit a row-major template with its top-left at `(offset_x, offset_y)`.
    ///
    /// Transparent template cells leave the destination untouched.
    pub fn draw_template<R: AsRef<[Cell]>>(&mut self, template: &[R], offset_x: i32, offset_y: i32) {
        for (row, cells) in template.iter().enumerate() {
            for (col, cell) in cells.as_ref().iter().enumerate() {
                if let Some(color) = cell {
                    let x = offset_x.saturating_add(col as i32);
                    let y = offset_y.saturating_add(row as i32);
                    self.set(x, y, *color);
                }
            }
        }
    }

    /// Blit another grid onto this one, preserving transparency.
    pub fn draw_grid(&mut self, other: &PixelGrid, offset_x: i32, offset_y: i32) {
        let rows: Vec<&[Cell]> = other.rows().collect();
        self.draw_template(&rows, offset_x, offset_y);
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of opaque cells.
    pub fn opaque_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate `(x, y, color)` for every opaque cell.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (i32, i32, Rgba<u8>)> + '_ {
        let size = self.size.max(1);
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|color| ((i % size) as i32, (i / size) as i32, color))
        })
    }

    /// Convert to an unscaled RGBA image, one pixel per cell.
    pub fn to_image(&self) -> RgbaImage {
        let size = self.size as u32;
        RgbaImage::from_fn(size, size, |x, y| {
            self.get(x as i32, y as i32).unwrap_or(TRANSPARENT)
        })
    }
}

fn circle_contains(cx: i32, cy: i32, radius: f64, x: i32, y: i32) -> bool {
    let dx = f64::from(x) - f64::from(cx);
    let dy = f64::from(y) - f64::from(cy);
    (dx * dx + dy * dy).sqrt() <= radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_new_grid_is_transparent() {
        let grid = PixelGrid::new(32);
        assert_eq!(grid.size(), 32);
        assert_eq!(grid.opaque_count(), 0);
        assert_eq!(grid.rows().count(), 32);
    }

    #[test]
    fn test_set_out_of_range_is_noop() {
        let mut grid = PixelGrid::new(4);
        grid.set(-1, 0, RED);
        grid.set(0, -1, RED);
        grid.set(4, 0, RED);
        grid.set(0, 4, RED);
        grid.set(i32::MAX, i32::MIN, RED);
        assert_eq!(grid.opaque_count(), 0);
        assert_eq!(grid.get(-1, 0), None);
    }

    #[test]
    fn test_set_later_write_wins() {
        let mut grid = PixelGrid::new(4);
        grid.set(1, 1, RED);
        grid.set(1, 1, BLUE);
        assert_eq!(grid.get(1, 1), Some(BLUE));
    }

    #[test]
    fn test_fill_circle_radius_zero_is_single_cell() {
        let mut grid = PixelGrid::new(32);
        grid.fill_circle(15, 15, 0.0, RED);
        assert_eq!(grid.opaque_count(), 1);
        assert_eq!(grid.get(15, 15), Some(RED));
    }

    #[test]
    fn test_fill_circle_radius_one_is_plus_shape() {
        let mut grid = PixelGrid::new(8);
        grid.fill_circle(3, 3, 1.0, RED);
        assert_eq!(grid.opaque_count(), 5);
        assert!(grid.is_opaque(3, 2));
        assert!(grid.is_opaque(2, 3));
        assert!(!grid.is_opaque(2, 2));
    }

    #[test]
    fn test_fill_circle_clamps_at_edges() {
        let mut grid = PixelGrid::new(8);
        grid.fill_circle(0, 0, 2.0, RED);
        // Quarter disk of radius 2: (0,0),(1,0),(2,0),(0,1),(1,1),(0,2)
        assert_eq!(grid.opaque_count(), 6);
    }

    #[test]
    fn test_fill_circle_center_outside_grid() {
        let mut grid = PixelGrid::new(8);
        grid.fill_circle(-3, -3, 5.0, RED);
        assert!(grid.is_opaque(0, 0));
        assert!(!grid.is_opaque(2, 2));
    }

    #[test]
    fn test_clear_circle() {
        let mut grid = PixelGrid::new(8);
        grid.fill_rect(0, 0, 8, 8, RED);
        grid.clear_circle(4, 4, 0.0);
        assert_eq!(grid.opaque_count(), 63);
        assert!(!grid.is_opaque(4, 4));
    }

    #[test]
    fn test_fill_ellipse() {
        let mut grid = PixelGrid::new(16);
        grid.fill_ellipse(8, 8, 3.0, 1.0, RED);
        // Row 8 spans x 5..=11, rows 7 and 9 only the center column
        assert_eq!(grid.opaque_count(), 9);
        assert!(grid.is_opaque(5, 8));
        assert!(grid.is_opaque(11, 8));
        assert!(grid.is_opaque(8, 7));
        assert!(!grid.is_opaque(7, 7));
    }

    #[test]
    fn test_fill_ellipse_zero_radius_draws_nothing() {
        let mut grid = PixelGrid::new(8);
        grid.fill_ellipse(4, 4, 0.0, 2.0, RED);
        assert_eq!(grid.opaque_count(), 0);
    }

    #[test]
    fn test_fill_rect_clamps_negative_origin() {
        let mut grid = PixelGrid::new(4);
        grid.fill_rect(-2, -2, 3, 3, RED);
        assert_eq!(grid.opaque_count(), 1);
        assert!(grid.is_opaque(0, 0));
        // No wrap-around to the far edge
        assert!(!grid.is_opaque(3, 3));
    }

    #[test]
    fn test_fill_rect_clamps_far_edge() {
        let mut grid = PixelGrid::new(4);
        grid.fill_rect(2, 2, 10, 10, RED);
        assert_eq!(grid.opaque_count(), 4);
    }

    #[test]
    fn test_tint_only_recolors_opaque() {
        let mut grid = PixelGrid::new(4);
        grid.set(1, 1, RED);
        assert!(grid.tint(1, 1, BLUE));
        assert!(!grid.tint(2, 2, BLUE));
        assert!(!grid.tint(-1, 9, BLUE));
        assert_eq!(grid.get(1, 1), Some(BLUE));
        assert_eq!(grid.opaque_count(), 1);
    }

    #[test]
    fn test_add_outline_single_layer() {
        let mut grid = PixelGrid::new(8);
        grid.set(4, 4, RED);
        grid.add_outline(BLUE);
        assert_eq!(grid.opaque_count(), 5);
        assert_eq!(grid.get(4, 3), Some(BLUE));
        assert_eq!(grid.get(3, 4), Some(BLUE));
        // Diagonals are not 4-connected
        assert_eq!(grid.get(3, 3), None);
        // Outline cells did not seed a second ring
        assert_eq!(grid.get(4, 2), None);
    }

    #[test]
    fn test_add_outline_at_grid_edge() {
        let mut grid = PixelGrid::new(4);
        grid.set(0, 0, RED);
        grid.add_outline(BLUE);
        assert_eq!(grid.opaque_count(), 3);
    }

    #[test]
    fn test_add_outline_twice_only_grows_by_one_ring() {
        let mut once = PixelGrid::new(16);
        once.fill_circle(8, 8, 3.0, RED);
        once.add_outline(BLUE);
        let mut twice = once.clone();
        twice.add_outline(BLUE);
        // Every cell set by the first pass is unchanged by the second
        for (x, y, color) in once.opaque_cells() {
            assert_eq!(twice.get(x, y), Some(color));
        }
        assert!(twice.opaque_count() > once.opaque_count());
    }

    #[test]
    fn test_draw_template_preserves_transparency() {
        let mut grid = PixelGrid::new(4);
        grid.fill_rect(0, 0, 4, 4, RED);
        let template = vec![vec![None, Some(BLUE)], vec![Some(BLUE), None]];
        grid.draw_template(&template, 1, 1);
        assert_eq!(grid.get(1, 1), Some(RED));
        assert_eq!(grid.get(2, 1), Some(BLUE));
        assert_eq!(grid.get(1, 2), Some(BLUE));
        assert_eq!(grid.get(2, 2), Some(RED));
    }

    #[test]
    fn test_draw_template_clips_out_of_range() {
        let mut grid = PixelGrid::new(4);
        let template = vec![vec![Some(BLUE); 3]; 3];
        grid.draw_template(&template, -1, 2);
        // Columns 0..=1, rows 2..=3
        assert_eq!(grid.opaque_count(), 4);
    }

    #[test]
    fn test_draw_grid() {
        let mut base = PixelGrid::new(4);
        base.set(0, 0, RED);
        let mut out = PixelGrid::new(4);
        out.set(3, 3, BLUE);
        out.draw_grid(&base, 0, 0);
        assert_eq!(out.get(0, 0), Some(RED));
        assert_eq!(out.get(3, 3), Some(BLUE));
    }

    #[test]
    fn test_to_image() {
        let mut grid = PixelGrid::new(2);
        grid.set(1, 0, RED);
        let image = grid.to_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(*image.get_pixel(1, 0), RED);
        assert_eq!(*image.get_pixel(0, 0), TRANSPARENT);
    }
}
