//! Minimal wall-clock benchmark harness for `harness = false` bench
//! targets. Prints a fixed-width table and dumps a CSV next to it.

use std::fs;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct Benchmark {
    f: Rc<dyn Fn()>,
    name: String,
    iterations: usize,
}

impl Benchmark {
    pub fn iter<F: Fn() + 'static>(name: &str, n: usize, f: F) -> Self {
        Self {
            f: Rc::new(f),
            name: name.to_string(),
            iterations: n,
        }
    }

    pub fn once<F: Fn() + 'static>(name: &str, f: F) -> Self {
        Self::iter(name, 1, f)
    }

    fn run(&self) -> Duration {
        let start = Instant::now();
        for _ in 0..self.iterations {
            (self.f)();
        }
        start.elapsed()
    }
}

pub struct BenchmarkReport {
    benches: Vec<Benchmark>,
    results: Vec<(String, usize, Duration)>,
}

impl BenchmarkReport {
    pub fn with_benches(benches: &[Benchmark]) -> Self {
        Self {
            benches: benches.to_vec(),
            results: vec![],
        }
    }

    fn run(&mut self) {
        for bench in &self.benches {
            let t = bench.run();
            self.results
                .push((bench.name.clone(), bench.iterations, t));
            print!(".");
            stdout().flush().unwrap();
        }
        println!();
    }

    fn show(&self) {
        println!("  {: <30} {: >10}   {: >10}", "benchmark", "total", "per_call");
        for (name, iterations, t) in &self.results {
            let per_call = t.div_f64(*iterations as f64);
            println!(
                "  {: <30} {: >8}us   {: >8}us",
                name,
                t.as_micros(),
                per_call.as_micros(),
            );
        }
    }

    fn write_csv(&self, filename: &str) {
        let mut lines: Vec<String> =
            vec!["benchmark,total_us,iterations,per_call_us".to_string()];
        for (name, iterations, t) in &self.results {
            lines.push(format!(
                "{},{},{},{}",
                name,
                t.as_micros(),
                iterations,
                t.as_micros() / *iterations as u128,
            ));
        }
        lines.push(String::new());
        fs::write(filename, lines.join("\n")).unwrap();
    }

    pub fn report(&mut self, name: &str) {
        print!("Benchmark: {}", name);
        self.run();
        self.show();
        self.write_csv(&format!("benchmark_{}.csv", name));
    }
}
