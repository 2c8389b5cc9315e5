use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a demo metrics directory for perfgrid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output directory, created if missing
    #[arg(default_value = "sample_data")]
    out_dir: PathBuf,

    /// Samples per metric
    #[arg(short, long, default_value_t = 300)]
    samples: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Shape of one synthetic metric, as a multiple of the ideal speed.
struct MetricShape {
    name: &'static str,
    /// Mean ratio at the start of the run.
    start: f64,
    /// Mean ratio at the end of the run.
    end: f64,
    noise: f64,
    /// Chance per sample of a stall.
    spike_rate: f64,
}

const METRICS: [MetricShape; 6] = [
    MetricShape { name: "cpu_frame", start: 1.00, end: 1.05, noise: 0.02, spike_rate: 0.01 },
    MetricShape { name: "gpu_frame", start: 0.95, end: 0.97, noise: 0.03, spike_rate: 0.02 },
    MetricShape { name: "present", start: 1.00, end: 1.00, noise: 0.01, spike_rate: 0.005 },
    MetricShape { name: "dma_upload", start: 1.20, end: 0.90, noise: 0.05, spike_rate: 0.03 },
    MetricShape { name: "spu_mix", start: 1.00, end: 1.10, noise: 0.04, spike_rate: 0.0 },
    MetricShape { name: "cdrom_read", start: 0.80, end: 1.30, noise: 0.08, spike_rate: 0.05 },
];

fn generate_metric(shape: &MetricShape, n: usize, rng: &mut SimpleRng) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            let mean = shape.start + (shape.end - shape.start) * t;
            let stall = if rng.next_f64() < shape.spike_rate {
                0.5 + rng.next_f64()
            } else {
                0.0
            };
            (mean + rng.gauss(0.0, shape.noise) + stall).max(0.0)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for shape in &METRICS {
        let values = generate_metric(shape, args.samples, &mut rng);
        let mut text = String::with_capacity(values.len() * 8);
        for v in &values {
            writeln!(text, "{v:.6}")?;
        }
        let path = args.out_dir.join(format!("{}.txt", shape.name));
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "Wrote {} metrics ({} samples each) to {}",
        METRICS.len(),
        args.samples,
        args.out_dir.display()
    );
    Ok(())
}
