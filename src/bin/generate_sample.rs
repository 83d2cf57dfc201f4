//! Generate sample gradient histories plus a matching `grad_scope.json`
//! so the viewer can be tried without real solver output.
//!
//! Usage: `cargo run --bin generate_sample` → writes `sample_data/`.

use std::fs;
use std::io::Write;
use std::path::Path;

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

    /// Uniform in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A noisy geometric decay, the typical shape of a BFGS gradient-norm
/// history: `g0 * rate^i * (1 ± jitter)`.
fn gradient_history(n: usize, g0: f64, rate: f64, jitter: f64, rng: &mut SimpleRng) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let noise = 1.0 + jitter * (2.0 * rng.uniform() - 1.0);
            g0 * rate.powi(i as i32) * noise
        })
        .collect()
}

/// Write one gradient file: one value per line, terminated by the blank
/// line the reader expects as its end-of-data sentinel.
fn write_gradient_file(path: &Path, values: &[f64]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    for v in values {
        writeln!(file, "{v:.12e}")?;
    }
    writeln!(file)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let out_dir = Path::new("sample_data");
    let mut rng = SimpleRng::new(42);

    let cases: [(&str, usize, f64, f64); 3] = [
        ("run_p2_nurbs/Gradient.txt", 40, 0.78, 0.15),
        ("run_p2_standard/Gradient.txt", 55, 0.84, 0.20),
        ("run_p2_super/Gradient.txt", 48, 0.81, 0.10),
    ];

    for (file, n, rate, jitter) in cases {
        let values = gradient_history(n, 1.0, rate, jitter, &mut rng);
        write_gradient_file(&out_dir.join(file), &values)?;
        println!("wrote {} ({n} design points)", out_dir.join(file).display());
    }

    let config = r#"{
  "base_dir": "sample_data",
  "series": [
    {
      "file": "run_p2_nurbs/Gradient.txt",
      "label": "P = 2, 16x10, NURBS Metrics",
      "color": "r",
      "line_style": "-",
      "marker": "."
    },
    {
      "file": "run_p2_standard/Gradient.txt",
      "label": "P = 2, 16x10, Standard",
      "color": "c",
      "line_style": "-",
      "marker": "."
    },
    {
      "file": "run_p2_super/Gradient.txt",
      "label": "P = 2 (Sup), 16x10, Standard",
      "color": "m",
      "line_style": "-",
      "marker": "."
    }
  ]
}
"#;
    fs::write("grad_scope.json", config)?;
    println!("wrote grad_scope.json");

    Ok(())
}
