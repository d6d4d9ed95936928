//! Bridson's fast Poisson disc sampling driver.
//!
//! Two phases: seed a first point (supplied or drawn randomly until `in_area`
//! accepts one), then expand by popping the active stack and attempting up to
//! `max_attempts` candidates in the annulus `[min_distance, 2 * min_distance)`
//! around each popped point. A candidate inside the area and not too close to
//! any accepted point is emitted, recorded in the grid, and pushed as a new
//! expansion root. Expected O(n) in the number of emitted points.
use glam::Vec2;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::grid::SpatialGrid;
use crate::hooks::{AreaPredicate, PointSink, RandomSource};

/// Single-use driver for one sampling run.
///
/// The grid and active stack live for exactly one run, so [`run`](Self::run)
/// consumes the sampler.
#[derive(Debug)]
pub struct PoissonDiscSampler {
    config: Config,
    grid: SpatialGrid,
    active: Vec<Vec2>,
}

impl PoissonDiscSampler {
    /// Validates `config` and sizes the background grid for it.
    pub fn try_new(config: Config) -> Result<Self> {
        config.validate()?;
        let grid = SpatialGrid::new(&config);
        debug!(cols = grid.cols(), rows = grid.rows(), "spatial grid sized");

        Ok(Self {
            config,
            grid,
            active: Vec::new(),
        })
    }

    /// Runs the sampler to completion, emitting every accepted point to
    /// `output` in acceptance order, seed first.
    ///
    /// # Errors
    ///
    /// [`Error::SeedExhausted`] if random seeding never satisfies `in_area`,
    /// and [`Error::OutOfRegion`] if `in_area` admits a point outside
    /// `[0, width) x [0, height)` (a caller-contract violation).
    pub fn run<R, A, O>(mut self, random: &mut R, in_area: &A, output: &mut O) -> Result<()>
    where
        R: RandomSource + ?Sized,
        A: AreaPredicate + ?Sized,
        O: PointSink + ?Sized,
    {
        if self.config.max_attempts == 0 {
            warn!("max_attempts is 0; only the seed point will be emitted");
        }

        // An explicit start is bounds-validated by the config and used as-is,
        // without consulting in_area.
        let seed = match self.config.start {
            Some(start) => start,
            None => self.seed(random, in_area)?,
        };
        self.accept(seed, output)?;
        let mut accepted = 1usize;

        while let Some(point) = self.active.pop() {
            for _ in 0..self.config.max_attempts {
                let candidate = candidate_around(self.config.min_distance, point, random);

                if in_area.contains(candidate) && !self.grid.is_too_close(candidate)? {
                    self.accept(candidate, output)?;
                    accepted += 1;
                }
            }
        }

        debug!(accepted, "poisson disc run finished");
        Ok(())
    }

    fn seed<R, A>(&self, random: &mut R, in_area: &A) -> Result<Vec2>
    where
        R: RandomSource + ?Sized,
        A: AreaPredicate + ?Sized,
    {
        for _ in 0..self.config.max_seed_attempts {
            let candidate = Vec2::new(
                random.sample(self.config.width),
                random.sample(self.config.height),
            );
            if in_area.contains(candidate) {
                return Ok(candidate);
            }
        }

        Err(Error::SeedExhausted {
            attempts: self.config.max_seed_attempts,
        })
    }

    fn accept<O>(&mut self, point: Vec2, output: &mut O) -> Result<()>
    where
        O: PointSink + ?Sized,
    {
        self.grid.insert(point)?;
        self.active.push(point);
        output.emit(point);
        Ok(())
    }
}

/// Runs one Poisson disc sampling pass with the given configuration and
/// capability hooks. Convenience wrapper over [`PoissonDiscSampler`].
pub fn distribute<R, A, O>(config: Config, random: &mut R, in_area: &A, output: &mut O) -> Result<()>
where
    R: RandomSource + ?Sized,
    A: AreaPredicate + ?Sized,
    O: PointSink + ?Sized,
{
    PoissonDiscSampler::try_new(config)?.run(random, in_area, output)
}

/// One candidate in the annulus `[min_distance, 2 * min_distance)` around
/// `origin`. The square root makes the draw uniform in area over the annulus.
fn candidate_around<R>(min_distance: f32, origin: Vec2, random: &mut R) -> Vec2
where
    R: RandomSource + ?Sized,
{
    let radius = min_distance * (random.sample(3.0) + 1.0).sqrt();
    let angle = random.sample(std::f32::consts::TAU);

    origin + Vec2::new(angle.cos(), angle.sin()) * radius
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::hooks::{RectArea, UniformRandom, VecSink};

    fn run_to_vec(config: Config, seed: u64) -> Vec<Vec2> {
        let width = config.width;
        let height = config.height;
        let mut random = UniformRandom::new(StdRng::seed_from_u64(seed));
        let area = RectArea::new(width, height);
        let mut sink = VecSink::new();
        distribute(config, &mut random, &area, &mut sink).unwrap();
        sink.into_inner()
    }

    fn pairwise_min_distance(points: &[Vec2]) -> f32 {
        let mut min = f32::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dist = (points[i] - points[j]).length();
                if dist < min {
                    min = dist;
                }
            }
        }
        min
    }

    #[test]
    fn explicit_start_is_emitted_first_and_spacing_holds() {
        let config = Config::new(10.0, 10.0)
            .with_min_distance(2.0)
            .with_max_attempts(30)
            .with_start(Vec2::new(5.0, 5.0));
        let points = run_to_vec(config, 42);

        assert_eq!(points[0], Vec2::new(5.0, 5.0));
        assert!(
            (8..=30).contains(&points.len()),
            "unexpected point count {}",
            points.len()
        );
        assert!(pairwise_min_distance(&points) >= 2.0 - 1e-4);
    }

    #[test]
    fn emitted_points_satisfy_the_area_predicate() {
        let points = run_to_vec(Config::new(8.0, 6.0).with_min_distance(0.5), 7);
        let area = RectArea::new(8.0, 6.0);

        assert!(!points.is_empty());
        for &p in &points {
            assert!(area.contains(p));
        }
    }

    #[test]
    fn at_most_one_point_per_grid_cell() {
        let config = Config::default();
        let cell_size = config.min_distance / std::f32::consts::SQRT_2;
        let cols = (config.width / cell_size).ceil() as usize;
        let rows = (config.height / cell_size).ceil() as usize;

        let points = run_to_vec(config, 11);
        let mut occupied = HashSet::new();
        for &p in &points {
            let x = ((p.x / cell_size) as usize).min(cols - 1);
            let y = ((p.y / cell_size) as usize).min(rows - 1);
            assert!(occupied.insert((x, y)), "two points share cell ({x}, {y})");
        }
    }

    #[test]
    fn identical_seeds_give_identical_output() {
        let config = Config::new(4.0, 4.0).with_min_distance(0.25);
        let a = run_to_vec(config.clone(), 123);
        let b = run_to_vec(config.clone(), 123);
        assert_eq!(a, b);

        let c = run_to_vec(config, 456);
        assert_ne!(a, c);
    }

    #[test]
    fn area_predicate_accepting_only_the_start_yields_one_point() {
        let start = Vec2::new(5.0, 5.0);
        let config = Config::new(10.0, 10.0)
            .with_min_distance(2.0)
            .with_start(start);
        let mut random = UniformRandom::new(StdRng::seed_from_u64(3));
        let area = move |p: Vec2| p == start;
        let mut sink = VecSink::new();

        distribute(config, &mut random, &area, &mut sink).unwrap();
        assert_eq!(sink.into_inner(), vec![start]);
    }

    #[test]
    fn zero_max_attempts_emits_only_the_seed() {
        let config = Config::new(10.0, 10.0)
            .with_min_distance(2.0)
            .with_max_attempts(0)
            .with_start(Vec2::new(2.0, 3.0));
        let points = run_to_vec(config, 99);
        assert_eq!(points, vec![Vec2::new(2.0, 3.0)]);
    }

    #[test]
    fn out_of_region_start_is_a_reported_fault() {
        let config = Config::new(10.0, 10.0)
            .with_min_distance(2.0)
            .with_start(Vec2::new(12.0, 5.0));
        let mut random = UniformRandom::new(StdRng::seed_from_u64(1));
        let area = RectArea::new(10.0, 10.0);
        let mut sink = VecSink::new();

        let result = distribute(config, &mut random, &area, &mut sink);
        assert!(matches!(result, Err(Error::OutOfRegion { x, y }) if x == 12.0 && y == 5.0));
        assert!(sink.is_empty());
    }

    #[test]
    fn leaky_area_predicate_is_a_reported_fault() {
        // Every candidate around the center of a 1x1 region lies at least 0.9
        // away, further than any in-region point can be, so the first attempt
        // must surface the contract violation.
        let config = Config::new(1.0, 1.0)
            .with_min_distance(0.9)
            .with_start(Vec2::new(0.5, 0.5));
        let mut random = UniformRandom::new(StdRng::seed_from_u64(5));
        let leaky = |_: Vec2| true;
        let mut sink = VecSink::new();

        let result = distribute(config, &mut random, &leaky, &mut sink);
        assert!(matches!(result, Err(Error::OutOfRegion { .. })));
    }

    #[test]
    fn seeding_gives_up_after_the_configured_attempts() {
        let config = Config::new(10.0, 10.0).with_max_seed_attempts(50);
        let mut random = UniformRandom::new(StdRng::seed_from_u64(8));
        let nothing = |_: Vec2| false;
        let mut sink = VecSink::new();

        let result = distribute(config, &mut random, &nothing, &mut sink);
        assert!(matches!(result, Err(Error::SeedExhausted { attempts: 50 })));
        assert!(sink.is_empty());
    }

    #[test]
    fn random_seeding_lands_inside_the_region() {
        let points = run_to_vec(Config::new(3.0, 5.0).with_min_distance(0.4), 21);
        assert!(!points.is_empty());
        assert!(RectArea::new(3.0, 5.0).contains(points[0]));
    }

    #[test]
    fn candidates_lie_in_the_annulus() {
        let mut random = UniformRandom::new(StdRng::seed_from_u64(17));
        let origin = Vec2::new(50.0, 50.0);
        let min_distance = 4.0;

        for _ in 0..1000 {
            let candidate = candidate_around(min_distance, origin, &mut random);
            let dist = (candidate - origin).length();
            assert!(dist >= min_distance - 1e-3, "candidate too close: {dist}");
            assert!(dist < 2.0 * min_distance + 1e-3, "candidate too far: {dist}");
        }
    }

    #[test]
    fn non_rectangular_area_is_respected() {
        let center = Vec2::new(5.0, 5.0);
        let disc = move |p: Vec2| (p - center).length() < 4.0;
        let config = Config::new(10.0, 10.0)
            .with_min_distance(0.8)
            .with_start(center);
        let mut random = UniformRandom::new(StdRng::seed_from_u64(31));
        let mut sink = VecSink::new();

        distribute(config, &mut random, &disc, &mut sink).unwrap();
        let points = sink.into_inner();
        assert!(points.len() > 1);
        for &p in &points {
            assert!((p - center).length() < 4.0);
        }
    }
}
