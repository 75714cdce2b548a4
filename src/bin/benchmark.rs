//! Measures the cost of `Universe::advance` across grid sizes

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use torus_life::Universe;

fn benchmark_advance(size: usize, iterations: u32) -> torus_life::Result<(f64, usize)> {
    let mut universe = Universe::new(size)?;
    universe.populate_with(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        universe.advance();
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    Ok((ms_per_gen, universe.alive_count()))
}

fn main() -> torus_life::Result<()> {
    println!("=== Game of Life advance() Benchmark ===\n");

    let sizes = [16, 64, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>12} {:>12} {:>16} {:>10}", "Size", "ms/gen", "Mcells/sec", "Alive");
    println!("{:-<54}", "");

    for size in sizes {
        let (ms, alive) = benchmark_advance(size, iterations)?;
        let cells = (size * size) as f64;
        let throughput = cells / (ms / 1000.0) / 1_000_000.0;
        println!(
            "{:>12} {:>12.3} {:>16.1} {:>10}",
            format!("{}x{}", size, size),
            ms,
            throughput,
            alive
        );
    }

    Ok(())
}
