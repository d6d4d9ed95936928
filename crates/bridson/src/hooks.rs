//! Caller-supplied capability seams for a sampling run.
//!
//! The sampler takes three collaborators at its boundary: a [`RandomSource`] it
//! draws from, an [`AreaPredicate`] deciding which candidates are inside the
//! region being filled, and a [`PointSink`] receiving every accepted point.
//! Closures implement all three, and ready-made adapters cover the common cases.
use glam::Vec2;
use rand::RngCore;

/// Source of randomness for the sampler.
///
/// The sampler calls this with limits `3`, `2 * pi`, and, while seeding
/// randomly, `width` and `height`. Implementations must return a value in
/// `[0, limit)`; a non-uniform source changes the output distribution but not
/// the sampler's control flow.
pub trait RandomSource {
    fn sample(&mut self, limit: f32) -> f32;
}

impl<F> RandomSource for F
where
    F: FnMut(f32) -> f32,
{
    #[inline]
    fn sample(&mut self, limit: f32) -> f32 {
        self(limit)
    }
}

/// Uniform [`RandomSource`] backed by any [`rand::RngCore`].
#[derive(Debug)]
pub struct UniformRandom<R: RngCore> {
    rng: R,
}

impl<R: RngCore> UniformRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for UniformRandom<R> {
    #[inline]
    fn sample(&mut self, limit: f32) -> f32 {
        rand01(&mut self.rng) * limit
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

/// Decides whether a candidate lies inside the region being filled.
///
/// Must return false for any point outside `[0, width) x [0, height)`; this
/// predicate is the only bounds enforcement between candidate generation and
/// the grid. It may additionally reject points to carve a non-rectangular
/// shape out of the region.
pub trait AreaPredicate {
    fn contains(&self, point: Vec2) -> bool;
}

impl<F> AreaPredicate for F
where
    F: Fn(Vec2) -> bool,
{
    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        self(point)
    }
}

/// The whole rectangular region `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy)]
pub struct RectArea {
    extent: Vec2,
}

impl RectArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            extent: Vec2::new(width, height),
        }
    }
}

impl AreaPredicate for RectArea {
    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.extent.x && point.y >= 0.0 && point.y < self.extent.y
    }
}

/// Receives every accepted point, seed first, in acceptance order.
///
/// There is no completion callback; the caller observes completion when the
/// sampler returns.
pub trait PointSink {
    fn emit(&mut self, point: Vec2);
}

impl<F> PointSink for F
where
    F: FnMut(Vec2),
{
    #[inline]
    fn emit(&mut self, point: Vec2) {
        self(point)
    }
}

/// A [`PointSink`] that collects accepted points in a `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    points: Vec<Vec2>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<Vec2> {
        self.points
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointSink for VecSink {
    #[inline]
    fn emit(&mut self, point: Vec2) {
        self.points.push(point);
    }
}
