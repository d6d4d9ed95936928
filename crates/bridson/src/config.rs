//! Configuration for a Poisson disc sampling run.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for [`crate::sampler::distribute`] and
/// [`crate::sampler::PoissonDiscSampler`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Region extent along x; valid x coordinates are `[0, width)`.
    pub width: f32,
    /// Region extent along y; valid y coordinates are `[0, height)`.
    pub height: f32,
    /// Smallest distance allowed between two points. Points are also never
    /// further than twice this distance from the point that generated them.
    pub min_distance: f32,
    /// Candidate placements attempted around each point before it is retired.
    /// Lower values speed the run up at some cost to the result's aesthetics.
    pub max_attempts: u32,
    /// Random draws permitted while seeding before the run fails with
    /// [`Error::SeedExhausted`]. Only consulted when `start` is `None`.
    pub max_seed_attempts: u32,
    /// Optional starting point. `None` means the seed is chosen randomly;
    /// a supplied point must lie within `[0, width) x [0, height)`.
    pub start: Option<Vec2>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            min_distance: 0.05,
            max_attempts: 30,
            max_seed_attempts: 1000,
            start: None,
        }
    }
}

impl Config {
    /// Creates a new [`Config`] for the given region extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the minimum distance between points.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Sets the number of candidate attempts per active point.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the cap on random seeding draws.
    pub fn with_max_seed_attempts(mut self, max_seed_attempts: u32) -> Self {
        self.max_seed_attempts = max_seed_attempts;
        self
    }

    /// Sets an explicit starting point.
    pub fn with_start(mut self, start: Vec2) -> Self {
        self.start = Some(start);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Rejects non-finite or non-positive extents and `min_distance` (either
    /// would leave the background grid with zero cells in a dimension), a zero
    /// seeding cap, and a start point outside `[0, width) x [0, height)`.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidConfig("width must be finite and > 0".into()));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidConfig("height must be finite and > 0".into()));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and > 0".into(),
            ));
        }
        if self.start.is_none() && self.max_seed_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_seed_attempts must be > 0 when no start point is supplied".into(),
            ));
        }
        if let Some(start) = self.start {
            if !self.contains(start) {
                return Err(Error::OutOfRegion {
                    x: start.x,
                    y: start.y,
                });
            }
        }

        Ok(())
    }

    /// Whether `point` lies within `[0, width) x [0, height)`.
    pub(crate) fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}
