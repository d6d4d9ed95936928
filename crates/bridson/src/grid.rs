//! Background acceleration grid for neighborhood queries.
//!
//! One cell per `min_distance / sqrt(2)` square. The cell size guarantees a cell
//! can hold at most one accepted point: two points sharing a cell would be less
//! than `min_distance` apart. It also bounds the neighborhood that can contain a
//! conflicting point to the 5x5 cell block around a candidate.
use glam::Vec2;

use crate::config::Config;
use crate::error::{Error, Result};

/// Dense spatial index over the sampling region. Insert-only; built for a single
/// sampling run and discarded with it.
#[derive(Debug)]
pub struct SpatialGrid {
    extent: Vec2,
    cell_size: f32,
    cols: usize,
    rows: usize,
    min_distance_squared: f32,
    cells: Vec<Option<Vec2>>,
}

impl SpatialGrid {
    /// Builds an empty grid sized for the configured region.
    ///
    /// Expects a validated configuration; positive extents and `min_distance`
    /// guarantee at least one cell in each dimension.
    pub fn new(config: &Config) -> Self {
        debug_assert!(config.validate().is_ok());
        let cell_size = config.min_distance / std::f32::consts::SQRT_2;
        let cols = (config.width / cell_size).ceil() as usize;
        let rows = (config.height / cell_size).ceil() as usize;

        Self {
            extent: Vec2::new(config.width, config.height),
            cell_size,
            cols,
            rows,
            min_distance_squared: config.min_distance * config.min_distance,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Integer cell coordinates of `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRegion`] for any point outside
    /// `[0, width) x [0, height)`, including non-finite coordinates. The original
    /// formulation indexes unchecked and leaves this as caller discipline; here
    /// an escaped point is a reportable fault.
    pub fn cell_of(&self, point: Vec2) -> Result<(usize, usize)> {
        let in_region = point.x >= 0.0
            && point.x < self.extent.x
            && point.y >= 0.0
            && point.y < self.extent.y;
        if !in_region {
            return Err(Error::OutOfRegion {
                x: point.x,
                y: point.y,
            });
        }

        // The division can round up to the cell count for coordinates just
        // below the far edge; clamp to the last cell.
        let x = ((point.x / self.cell_size) as usize).min(self.cols - 1);
        let y = ((point.y / self.cell_size) as usize).min(self.rows - 1);
        Ok((x, y))
    }

    /// Records an accepted point. The algorithm's spacing invariant guarantees
    /// the target cell is empty; that precondition is not re-checked.
    pub fn insert(&mut self, point: Vec2) -> Result<()> {
        let (x, y) = self.cell_of(point)?;
        let index = self.index(x, y);
        self.cells[index] = Some(point);
        Ok(())
    }

    /// Whether any accepted point lies within `min_distance` of `point`.
    ///
    /// An occupied own cell answers immediately; otherwise the 5x5 cell block
    /// around the candidate, clamped to the grid bounds, is the smallest
    /// neighborhood that can contain a conflicting point.
    pub fn is_too_close(&self, point: Vec2) -> Result<bool> {
        let (x, y) = self.cell_of(point)?;
        if self.cells[self.index(x, y)].is_some() {
            return Ok(true);
        }

        let min_x = x.saturating_sub(2);
        let min_y = y.saturating_sub(2);
        let max_x = (x + 2).min(self.cols - 1);
        let max_y = (y + 2).min(self.rows - 1);

        for cy in min_y..=max_y {
            for cx in min_x..=max_x {
                if let Some(existing) = self.cells[self.index(cx, cy)] {
                    let delta = point - existing;
                    if delta.length_squared() < self.min_distance_squared {
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }
}
