use std::time::{SystemTime, UNIX_EPOCH};

use bridson::prelude::*;
use bridson_examples::{init_tracing, AsciiCanvas};
use rand::rngs::StdRng;
use rand::SeedableRng;

// The classic terminal demo: an 80x40 region filled with points at least four
// cells apart, plotted as dots.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (80.0, 40.0);
    let config = Config::new(width, height).with_min_distance(4.0);

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
    let mut random = UniformRandom::new(StdRng::seed_from_u64(seed));
    let area = RectArea::new(width, height);

    let mut canvas = AsciiCanvas::new(width as usize, height as usize);
    let mut sink = |p| canvas.plot(p, '.');

    distribute(config, &mut random, &area, &mut sink)?;

    print!("{}", canvas.render());
    Ok(())
}
