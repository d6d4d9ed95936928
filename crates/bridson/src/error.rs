//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover degenerate configuration, caller-contract violations (a point that
//! escaped the sampling region), and seeding exhaustion.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A point reached the spatial grid outside `[0, width) x [0, height)`.
    ///
    /// This is a caller-contract violation: either the supplied start point lies
    /// outside the region, or the `in_area` predicate admitted a point it was
    /// required to reject.
    #[error("point ({x}, {y}) lies outside the sampling region")]
    OutOfRegion { x: f32, y: f32 },

    /// Random seeding never produced a point accepted by `in_area`.
    #[error("could not seed: in_area rejected {attempts} random candidates")]
    SeedExhausted { attempts: u32 },
}
