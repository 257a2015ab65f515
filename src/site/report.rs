//! Export-ready description of a placement.
//!
//! With the `serde` feature every type here serializes to the JSON layout
//! consumers of the placement expect (`grid_coords`, `pixel_coords`,
//! `pixels_per_meter`, ...). Writing the document is left to the caller.

use super::grid::{Grid, PixelsPerMeter};
use super::mask::PlacementMask;
use crate::error::PlacementError;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealWorldDimensions {
    pub width_m: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelDimensions {
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

/// One placed beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeaconPlacement {
    /// `[row, col]` of the grid cell.
    pub grid_coords: [usize; 2],
    /// `[x, y]` of the cell center, truncated to whole pixels.
    pub pixel_coords: [i64; 2],
}

/// A placement together with the grid it was computed on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    pub real_world_dimensions: RealWorldDimensions,
    pub pixel_dimensions: PixelDimensions,
    pub pixels_per_meter: PixelsPerMeter,
    pub grid_dimensions: GridDimensions,
    pub beacons: Vec<BeaconPlacement>,
    /// `[row, col]` of every cell a safety mask accepts.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub safe_grid_coordinates: Option<Vec<[usize; 2]>>,
}

impl PlacementReport {
    /// Describes `beacons` (global cell indices) on `grid`.
    pub fn new(grid: &Grid, beacons: &[usize]) -> Result<Self, PlacementError> {
        let beacons = beacons
            .iter()
            .map(|&index| -> Result<BeaconPlacement, PlacementError> {
                let (row, col) = grid.cell_of(index).ok_or(PlacementError::CandidateOutOfRange {
                    index,
                    targets: grid.len(),
                })?;
                let center = grid.centers()[index];
                Ok(BeaconPlacement {
                    grid_coords: [row, col],
                    pixel_coords: [center.x as i64, center.y as i64],
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (width_m, height_m) = grid.real_size_m();
        let (width_px, height_px) = grid.image_size_px();
        Ok(Self {
            real_world_dimensions: RealWorldDimensions { width_m, height_m },
            pixel_dimensions: PixelDimensions {
                width_px,
                height_px,
            },
            pixels_per_meter: grid.pixels_per_meter(),
            grid_dimensions: GridDimensions {
                width: grid.width(),
                height: grid.height(),
            },
            beacons,
            safe_grid_coordinates: None,
        })
    }

    /// Lists the cells whose centers `safe` accepts.
    pub fn with_safe_cells<M: PlacementMask + ?Sized>(mut self, grid: &Grid, safe: &M) -> Self {
        let cells = grid
            .centers()
            .iter()
            .enumerate()
            .filter(|(_, center)| safe.is_placeable(**center))
            .map(|(index, _)| [index / grid.width(), index % grid.width()])
            .collect();
        self.safe_grid_coordinates = Some(cells);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn grid() -> Grid {
        // 4x2 cells of 10px
        Grid::new(40, 20, 2.0, 1.0).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let report = PlacementReport::new(&grid(), &[0, 6]).unwrap();

        assert_eq!(
            report.real_world_dimensions,
            RealWorldDimensions {
                width_m: 2.0,
                height_m: 1.0
            }
        );
        assert_eq!(
            report.pixel_dimensions,
            PixelDimensions {
                width_px: 40,
                height_px: 20
            }
        );
        assert_eq!(report.grid_dimensions, GridDimensions { width: 4, height: 2 });
        assert_eq!(
            report.beacons,
            vec![
                BeaconPlacement {
                    grid_coords: [0, 0],
                    pixel_coords: [5, 5]
                },
                BeaconPlacement {
                    grid_coords: [1, 2],
                    pixel_coords: [25, 15]
                },
            ]
        );
        assert!(report.safe_grid_coordinates.is_none());
    }

    #[test]
    fn test_unknown_cell() {
        let err = PlacementReport::new(&grid(), &[8]).unwrap_err();
        assert_eq!(
            err,
            PlacementError::CandidateOutOfRange {
                index: 8,
                targets: 8
            }
        );
    }

    #[test]
    fn test_safe_cells() {
        let grid = grid();
        let not_left_column = |p: Point| p.x > 10.0;
        let report = PlacementReport::new(&grid, &[1])
            .unwrap()
            .with_safe_cells(&grid, &not_left_column);

        assert_eq!(
            report.safe_grid_coordinates,
            Some(vec![[0, 1], [0, 2], [0, 3], [1, 1], [1, 2], [1, 3]])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_layout() {
        let report = PlacementReport::new(&grid(), &[5]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["beacons"][0]["grid_coords"], serde_json::json!([1, 1]));
        assert_eq!(json["beacons"][0]["pixel_coords"], serde_json::json!([15, 15]));
        assert_eq!(json["pixels_per_meter"]["x"], serde_json::json!(20.0));
        assert_eq!(json["grid_dimensions"]["width"], serde_json::json!(4));
        assert!(json.get("safe_grid_coordinates").is_none());

        let back: PlacementReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
