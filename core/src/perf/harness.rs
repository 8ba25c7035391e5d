use std::time::{Duration, Instant};

/// Work attributed to a measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Throughput {
    pub items: u64,
    pub bytes: u64,
}

impl Throughput {
    pub fn new(items: u64, bytes: u64) -> Self {
        Self { items, bytes }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub iterations: u64,
    pub elapsed: Duration,
    pub throughput: Throughput,
}

impl Measurement {
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.iterations as f64)
    }

    pub fn items_per_sec(&self) -> f64 {
        rate(self.throughput.items, self.elapsed)
    }

    pub fn bytes_per_sec(&self) -> f64 {
        rate(self.throughput.bytes, self.elapsed)
    }
}

fn rate(amount: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { amount as f64 / secs } else { 0.0 }
}

/// Run `routine` `iterations` times and time the whole batch.
pub fn measure<F>(iterations: u64, throughput: Throughput, mut routine: F) -> Measurement
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..iterations {
        routine();
    }
    Measurement {
        iterations,
        elapsed: start.elapsed(),
        throughput,
    }
}

/// Human readable rate, e.g. `1.25 G/s`.
pub fn format_rate(per_sec: f64, unit: &str) -> String {
    const SCALES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "K")];
    for (scale, prefix) in SCALES {
        if per_sec >= scale {
            return format!("{:.2} {}{}/s", per_sec / scale, prefix, unit);
        }
    }
    format!("{:.2} {}/s", per_sec, unit)
}
