use chrono::NaiveDate;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let regions = ["East", "West", "North", "South"];
    let categories: [(&str, f64); 3] = [
        ("Furniture", 220.0),
        ("Office Supplies", 60.0),
        ("Technology", 450.0),
    ];
    let region_factor = [1.2, 1.0, 0.8, 0.9];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date");
    let n_days: u64 = 180;
    let orders_per_day = 4;

    let output_path = "sales_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Region", "Category", "Sales", "Date"])
        .expect("Failed to write header");

    let mut n_rows = 0usize;
    for day in 0..n_days {
        let date = start + chrono::Days::new(day);
        for _ in 0..orders_per_day {
            let (region_idx, region) = {
                let i = (rng.next_u64() % regions.len() as u64) as usize;
                (i, regions[i])
            };
            let (category, base) = *rng.pick(&categories);

            // Weekly seasonality plus noise, clamped away from negatives.
            let weekly = 1.0 + 0.25 * ((day % 7) as f64 / 6.0);
            let amount = rng
                .gauss(base * region_factor[region_idx] * weekly, base * 0.2)
                .max(base * 0.1);
            let amount = format!("{amount:.2}");
            let date = date.format("%Y-%m-%d").to_string();

            writer
                .write_record([region, category, amount.as_str(), date.as_str()])
                .expect("Failed to write record");
            n_rows += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {n_rows} sales records to {output_path}");
}
