use bridson::prelude::*;
use bridson_examples::{init_tracing, AsciiCanvas};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Non-rectangular regions need nothing beyond a different area predicate: here
// a disc inscribed in the 80x40 region, with the y axis weighted to keep the
// shape round in terminal cells.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (80.0, 40.0);
    let center = Vec2::new(40.0, 20.0);
    let disc = move |p: Vec2| {
        let delta = (p - center) * Vec2::new(1.0, 2.0);
        p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height && delta.length() < 38.0
    };

    let config = Config::new(width, height)
        .with_min_distance(3.0)
        .with_start(center);
    let mut random = UniformRandom::new(StdRng::seed_from_u64(2026));

    let mut canvas = AsciiCanvas::new(width as usize, height as usize);
    let mut sink = |p| canvas.plot(p, '.');

    distribute(config, &mut random, &disc, &mut sink)?;

    print!("{}", canvas.render());
    Ok(())
}
