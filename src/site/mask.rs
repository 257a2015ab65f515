//! Placeable-area masks.

use crate::geometry::Point;

/// Decides whether a beacon may be placed at a pixel position.
pub trait PlacementMask {
    fn is_placeable(&self, point: Point) -> bool;
}

impl<F> PlacementMask for F
where
    F: Fn(Point) -> bool,
{
    fn is_placeable(&self, point: Point) -> bool {
        self(point)
    }
}

/// Indices of the targets a mask accepts, in ascending order.
pub fn placement_candidates<M: PlacementMask + ?Sized>(targets: &[Point], mask: &M) -> Vec<usize> {
    targets
        .iter()
        .enumerate()
        .filter(|(_, point)| mask.is_placeable(**point))
        .map(|(i, _)| i)
        .collect()
}

/// A binary raster mask, one flag per pixel.
///
/// A point is looked up at `(floor(x), floor(y))`; anything outside the
/// raster is not placeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMask {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl RasterMask {
    /// A mask with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    /// A mask computed per pixel from `(x, y)`.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flag at pixel `(x, y)`; `false` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Sets every pixel of the inclusive rectangle `(x0, y0)..=(x1, y1)`.
    ///
    /// Corners may come in any order; the rectangle is clipped to the
    /// raster.
    pub fn fill_rect(&mut self, (x0, y0): (usize, usize), (x1, y1): (usize, usize), value: bool) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (left, right) = (x0.min(x1), x0.max(x1).min(self.width - 1));
        let (top, bottom) = (y0.min(y1), y0.max(y1).min(self.height - 1));
        for y in top..=bottom {
            for x in left..=right {
                self.pixels[y * self.width + x] = value;
            }
        }
    }

    /// Clears every pixel set in `other`, e.g. buildings minus hazards.
    ///
    /// `other` is sampled at the same pixel coordinates; pixels outside it
    /// are left unchanged.
    pub fn subtract(&mut self, other: &RasterMask) {
        for y in 0..self.height {
            for x in 0..self.width {
                if other.get(x, y) {
                    self.pixels[y * self.width + x] = false;
                }
            }
        }
    }
}

impl PlacementMask for RasterMask {
    fn is_placeable(&self, point: Point) -> bool {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return false;
        }
        self.get(point.x as usize, point.y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_mask() {
        let targets = vec![
            Point::new(1.0, 1.0),
            Point::new(5.0, 1.0),
            Point::new(9.0, 1.0),
        ];
        let left_half = |p: Point| p.x < 6.0;
        assert_eq!(placement_candidates(&targets, &left_half), vec![0, 1]);
    }

    #[test]
    fn test_raster_lookup_floors() {
        let mask = RasterMask::from_fn(4, 4, |x, y| x == 2 && y == 1);
        assert!(mask.is_placeable(Point::new(2.9, 1.2)));
        assert!(!mask.is_placeable(Point::new(3.0, 1.2)));
        assert!(!mask.is_placeable(Point::new(-0.5, 1.0)));
        assert!(!mask.is_placeable(Point::new(2.0, 40.0)));
        assert!(!mask.is_placeable(Point::new(f64::NAN, 1.0)));
    }

    #[test]
    fn test_building_minus_hazard() {
        let mut building = RasterMask::filled(10, 10, false);
        building.fill_rect((1, 1), (8, 8), true);
        let mut hazard = RasterMask::filled(10, 10, false);
        hazard.fill_rect((6, 6), (3, 3), true);
        building.subtract(&hazard);

        assert!(building.get(1, 1));
        assert!(building.get(8, 2));
        assert!(!building.get(4, 5));
        assert!(!building.get(0, 0));

        let targets: Vec<Point> = (0..10).map(|i| Point::new(i as f64 + 0.5, 4.5)).collect();
        assert_eq!(placement_candidates(&targets, &building), vec![1, 2, 7, 8]);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut mask = RasterMask::filled(3, 2, false);
        mask.fill_rect((1, 0), (50, 50), true);
        assert!(!mask.get(0, 0));
        assert!(mask.get(2, 1));
        assert_eq!(mask.pixels.iter().filter(|&&p| p).count(), 4);
    }
}
