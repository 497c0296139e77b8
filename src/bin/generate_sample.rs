//! Writes a synthetic penguin measurement table to `data/penguins.csv`.
//! Deterministic: the same seed always produces the same file.

use anyhow::{Context, Result};

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

/// Measurement distribution for one species:
/// (bill length, bill depth, flipper length, body mass) as (mean, sd) pairs.
struct SpeciesProfile {
    name: &'static str,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
    rows: usize,
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
        rows: 50,
    },
    SpeciesProfile {
        name: "Gentoo",
        islands: &["Biscoe"],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.6),
        body_mass: (5075.0, 505.0),
        rows: 40,
    },
    SpeciesProfile {
        name: "Chinstrap",
        islands: &["Dream"],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3733.0, 385.0),
        rows: 30,
    },
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "data/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
            "year",
        ])
        .context("writing header")?;

    let years = [2007, 2008, 2009];
    let mut total = 0usize;

    for profile in &PROFILES {
        for i in 0..profile.rows {
            // Roughly 4% of measurement cells go missing, as field data does.
            let mut cell = |mean_sd: (f64, f64), decimals: u32| -> String {
                if rng.next_f64() < 0.04 {
                    return "NA".to_string();
                }
                let value = rng.gauss(mean_sd.0, mean_sd.1);
                match decimals {
                    0 => format!("{:.0}", value),
                    _ => format!("{:.1}", value),
                }
            };

            let bill_length = cell(profile.bill_length, 1);
            let bill_depth = cell(profile.bill_depth, 1);
            let flipper = cell(profile.flipper_length, 0);
            let mass = cell(profile.body_mass, 0);

            let sex = if rng.next_f64() < 0.05 {
                "NA"
            } else if rng.next_f64() < 0.5 {
                "male"
            } else {
                "female"
            };
            let island = profile.islands[rng.next_u64() as usize % profile.islands.len()];
            let year = years[i % years.len()].to_string();

            writer
                .write_record([
                    profile.name,
                    island,
                    bill_length.as_str(),
                    bill_depth.as_str(),
                    flipper.as_str(),
                    mass.as_str(),
                    sex,
                    year.as_str(),
                ])
                .with_context(|| format!("writing row {total}"))?;
            total += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {total} penguins to {output_path}");
    Ok(())
}
