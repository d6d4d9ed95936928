#![forbid(unsafe_code)]
//! bridson: fast Poisson disc sampling over a 2-D region.
//!
//! Implements the algorithm from 'Fast Poisson Disk Sampling in Arbitrary
//! Dimensions' by Robert Bridson, restricted to two dimensions: a random set of
//! points such that no two are closer than a minimum distance, and no point is
//! further than twice that distance from the point that generated it.
//!
//! Modules:
//! - config: sampling region, spacing, and attempt limits
//! - grid: the background acceleration grid (one cell per `min_distance / sqrt(2)` square)
//! - hooks: the caller-supplied capability seams (random source, area predicate, point sink)
//! - sampler: the seed/expand driver loop
//!
//! ```
//! use bridson::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = Config::new(10.0, 10.0).with_min_distance(1.0);
//! let mut random = UniformRandom::new(StdRng::seed_from_u64(7));
//! let area = RectArea::new(10.0, 10.0);
//! let mut points = VecSink::new();
//!
//! distribute(config, &mut random, &area, &mut points).unwrap();
//! assert!(!points.as_slice().is_empty());
//! ```
pub mod config;
pub mod error;
pub mod grid;
pub mod hooks;
pub mod sampler;

/// Convenient re-exports for common types. Import with `use bridson::prelude::*;`.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::hooks::{
        AreaPredicate, PointSink, RandomSource, RectArea, UniformRandom, VecSink,
    };
    pub use crate::sampler::{distribute, PoissonDiscSampler};
}
