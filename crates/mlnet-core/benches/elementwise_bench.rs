//! Benchmark: elementwise arithmetic and math throughput on f32 and f64.

use mlnet_core::{math, Element, Tensor};
use std::time::Instant;

fn time_it(iters: usize, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    start.elapsed().as_secs_f64() / iters as f64
}

fn ramp<T: Element>(n: usize, offset: f64) -> Tensor<T> {
    (0..n)
        .map(|i| num_traits::cast::<f64, T>(i as f64 * 0.001 + offset).unwrap_or_else(T::zero))
        .collect()
}

fn bench_dtype<T: Element>(sizes: &[usize], iters: usize) {
    println!("--- {} ---", T::DTYPE);
    println!("{:<10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "n", "add(us)", "mul(us)", "div(us)", "sin(us)", "exp(us)");

    for &n in sizes {
        let a = ramp::<T>(n, 0.5);
        let b = ramp::<T>(n, 0.0);

        let add = time_it(iters, || { let _ = a.add(&b).unwrap(); });
        let mul = time_it(iters, || { let _ = a.mul(&b).unwrap(); });
        let div = time_it(iters, || { let _ = a.div(&b).unwrap(); });
        let sin = time_it(iters, || { let _ = math::sin(&a); });
        let exp = time_it(iters, || { let _ = math::exp(&a); });

        println!("{:<10} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            n, add * 1e6, mul * 1e6, div * 1e6, sin * 1e6, exp * 1e6);
    }
    println!();
}

fn main() {
    println!("=== MLNet Elementwise Benchmark ===\n");

    let sizes = [1_000, 10_000, 100_000, 1_000_000];
    bench_dtype::<f32>(&sizes, 20);
    bench_dtype::<f64>(&sizes, 20);
}
