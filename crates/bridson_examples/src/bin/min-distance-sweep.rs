use bridson::prelude::*;
use bridson_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

// How point count scales with spacing over a fixed 256x256 region.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = 256.0;
    let area = RectArea::new(extent, extent);

    println!("{:>12}  {:>8}", "min_distance", "points");
    for min_distance in [2.0, 4.0, 8.0, 16.0, 32.0] {
        let config = Config::new(extent, extent).with_min_distance(min_distance);
        let mut random = UniformRandom::new(StdRng::seed_from_u64(0xB1D50));
        let mut sink = VecSink::new();

        distribute(config, &mut random, &area, &mut sink)?;
        println!("{min_distance:>12}  {:>8}", sink.len());
    }

    Ok(())
}
