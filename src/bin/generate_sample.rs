use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic `block,time` CSV shaped like `iotest` output.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Output file
    #[arg(long, short = 'o', default_value = "sample_timings.csv")]
    output: PathBuf,

    /// Number of distinct blocks
    #[arg(long, default_value_t = 500)]
    blocks: u32,

    /// How many times every block is measured
    #[arg(long, default_value_t = 4)]
    passes: u32,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Seeded noise for simulated read latencies (SplitMix64 underneath).
struct TimingNoise {
    state: u64,
}

impl TimingNoise {
    fn new(seed: u64) -> Self {
        TimingNoise { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Zero-mean gaussian jitter in nanoseconds (Box-Muller).
    fn jitter_ns(&mut self, std_dev: f64) -> f64 {
        let u1 = self.unit().max(1e-15);
        let u2 = self.unit();
        std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// Uniform index in `0..n`.
    fn index_below(&mut self, n: usize) -> usize {
        (self.unit() * n as f64) as usize
    }
}

/// Nanoseconds to read one block: a base cost that grows with the block's
/// distance from the start of the device, a slow zone every 64 blocks, noise.
fn read_time(block: u32, noise: &mut TimingNoise) -> i64 {
    let base = 40_000.0 + block as f64 * 12.0;
    let slow_zone = if block % 64 < 4 { 25_000.0 } else { 0.0 };
    (base + slow_zone + noise.jitter_ns(3_000.0)).max(1.0) as i64
}

/// `passes` measurements of every block, in shuffled order.
fn sample_rows(blocks: u32, passes: u32, seed: u64) -> Vec<(u32, i64)> {
    let mut noise = TimingNoise::new(seed);
    let mut rows = Vec::with_capacity(blocks as usize * passes as usize);
    for _ in 0..passes {
        for block in 0..blocks {
            rows.push((block, read_time(block, &mut noise)));
        }
    }

    // Fisher-Yates, so the viewer has to sort.
    for i in (1..rows.len()).rev() {
        let j = noise.index_below(i + 1);
        rows.swap(i, j);
    }
    rows
}

fn write_rows<W: Write>(out: W, rows: &[(u32, i64)]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rows = sample_rows(args.blocks, args.passes, args.seed);
    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_rows(file, &rows).with_context(|| format!("writing {}", args.output.display()))?;

    log::info!("Wrote {} rows to {}", rows.len(), args.output.display());
    println!(
        "Wrote {} samples ({} blocks × {} passes) to {}",
        rows.len(),
        args.blocks,
        args.passes,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_measured_once_per_pass() {
        let rows = sample_rows(20, 3, 7);
        assert_eq!(rows.len(), 60);
        for block in 0..20 {
            assert_eq!(rows.iter().filter(|r| r.0 == block).count(), 3);
        }
        assert!(rows.iter().all(|r| r.1 > 0));
    }

    #[test]
    fn rows_are_shuffled_and_reproducible() {
        let rows = sample_rows(50, 2, 42);
        assert!(rows.windows(2).any(|w| w[0].0 > w[1].0));
        assert_eq!(rows, sample_rows(50, 2, 42));
        assert_ne!(rows, sample_rows(50, 2, 43));
    }

    #[test]
    fn written_rows_are_headerless_integer_pairs() {
        let rows = sample_rows(5, 2, 1);
        let mut out = Vec::new();
        write_rows(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        for line in text.lines() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 2);
            assert!(fields[0].parse::<u32>().is_ok());
            assert!(fields[1].parse::<i64>().is_ok());
        }
    }
}
