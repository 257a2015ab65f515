//! Target grid over a floor plan image.

use crate::error::PlacementError;
use crate::geometry::Point;

/// Default grid cell edge, in meters.
pub const DEFAULT_CELL_SIZE_M: f64 = 0.5;

/// Scale of the image in pixels per meter, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelsPerMeter {
    pub x: f64,
    pub y: f64,
}

/// A regular grid of target cells laid over an image of known real size.
///
/// Cells are numbered row-major: index `row * width + col`. The target of
/// a cell is its center in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    image_width_px: u32,
    image_height_px: u32,
    real_width_m: f64,
    real_height_m: f64,
    cell_size_m: f64,
    pixels_per_meter: PixelsPerMeter,
    width: usize,
    height: usize,
    centers: Vec<Point>,
}

impl Grid {
    /// Builds a grid with [`DEFAULT_CELL_SIZE_M`] cells.
    pub fn new(
        image_width_px: u32,
        image_height_px: u32,
        real_width_m: f64,
        real_height_m: f64,
    ) -> Result<Self, PlacementError> {
        Self::with_cell_size(
            image_width_px,
            image_height_px,
            real_width_m,
            real_height_m,
            DEFAULT_CELL_SIZE_M,
        )
    }

    /// Builds a grid with `cell_size_m` cells.
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub fn with_cell_size(
        image_width_px: u32,
        image_height_px: u32,
        real_width_m: f64,
        real_height_m: f64,
        cell_size_m: f64,
    ) -> Result<Self, PlacementError> {
        if image_width_px == 0 || image_height_px == 0 {
            return Err(PlacementError::InvalidGrid(format!(
                "image must be non-empty, got {image_width_px}x{image_height_px}px"
            )));
        }
        for (name, value) in [
            ("real width", real_width_m),
            ("real height", real_height_m),
            ("cell size", cell_size_m),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlacementError::InvalidGrid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let width = (real_width_m / cell_size_m).floor() as usize;
        let height = (real_height_m / cell_size_m).floor() as usize;
        if width == 0 || height == 0 {
            return Err(PlacementError::InvalidGrid(format!(
                "{real_width_m}x{real_height_m}m holds no {cell_size_m}m cell"
            )));
        }

        let pixels_per_meter = PixelsPerMeter {
            x: image_width_px as f64 / real_width_m,
            y: image_height_px as f64 / real_height_m,
        };
        let step_x = pixels_per_meter.x * cell_size_m;
        let step_y = pixels_per_meter.y * cell_size_m;
        let centers = (0..height)
            .flat_map(|row| {
                (0..width).map(move |col| {
                    Point::new(
                        col as f64 * step_x + step_x / 2.0,
                        row as f64 * step_y + step_y / 2.0,
                    )
                })
            })
            .collect();

        tracing::debug!(width, height, ppm_x = pixels_per_meter.x, ppm_y = pixels_per_meter.y, "grid set");

        Ok(Self {
            image_width_px,
            image_height_px,
            real_width_m,
            real_height_m,
            cell_size_m,
            pixels_per_meter,
            width,
            height,
            centers,
        })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }

    pub fn image_size_px(&self) -> (u32, u32) {
        (self.image_width_px, self.image_height_px)
    }

    pub fn real_size_m(&self) -> (f64, f64) {
        (self.real_width_m, self.real_height_m)
    }

    pub fn pixels_per_meter(&self) -> PixelsPerMeter {
        self.pixels_per_meter
    }

    /// Cell centers in pixel space, row-major.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Converts a distance in meters to pixels along the x axis.
    pub fn radius_px(&self, meters: f64) -> f64 {
        meters * self.pixels_per_meter.x
    }

    /// `(row, col)` of a cell index, or `None` past the last cell.
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len()).then(|| (index / self.width, index % self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        // 200x100px image of a 10x5m room, 0.5m cells
        let grid = Grid::new(200, 100, 10.0, 5.0).unwrap();

        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.len(), 200);
        assert_eq!(grid.pixels_per_meter(), PixelsPerMeter { x: 20.0, y: 20.0 });

        // step is 10px, centers sit at 5px offsets
        assert_eq!(grid.centers()[0], Point::new(5.0, 5.0));
        assert_eq!(grid.centers()[1], Point::new(15.0, 5.0));
        assert_eq!(grid.centers()[20], Point::new(5.0, 15.0));
        assert_eq!(grid.centers()[199], Point::new(195.0, 95.0));
    }

    #[test]
    fn test_partial_cells_dropped() {
        let grid = Grid::new(130, 100, 1.3, 1.0).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_anisotropic_scale() {
        let grid = Grid::with_cell_size(300, 100, 3.0, 2.0, 1.0).unwrap();
        let ppm = grid.pixels_per_meter();
        assert!((ppm.x - 100.0).abs() < 1e-12);
        assert!((ppm.y - 50.0).abs() < 1e-12);
        assert_eq!(grid.centers()[0], Point::new(50.0, 25.0));
        assert!((grid.radius_px(5.0) - 500.0).abs() < 1e-12);
    }

    #[test]
    fn test_cell_of() {
        let grid = Grid::new(200, 100, 10.0, 5.0).unwrap();
        assert_eq!(grid.cell_of(0), Some((0, 0)));
        assert_eq!(grid.cell_of(21), Some((1, 1)));
        assert_eq!(grid.cell_of(199), Some((9, 19)));
        assert_eq!(grid.cell_of(200), None);
    }

    #[test]
    fn test_invalid_grids() {
        assert!(Grid::new(0, 100, 10.0, 5.0).is_err());
        assert!(Grid::new(200, 100, -1.0, 5.0).is_err());
        assert!(Grid::new(200, 100, 10.0, f64::NAN).is_err());
        assert!(Grid::with_cell_size(200, 100, 10.0, 5.0, 0.0).is_err());
        assert!(matches!(
            Grid::new(200, 100, 0.4, 5.0),
            Err(PlacementError::InvalidGrid(_))
        ));
    }
}
