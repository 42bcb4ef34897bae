/*!
 * Simulation Benchmarks
 *
 * End-to-end admission and dispatch over synthetic workloads,
 * sequential versus parallel lane dispatch.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lane_scheduler::{DispatchMode, Process, SimConfig, Simulation};

fn workload(size: usize) -> Vec<Process> {
    (0..size)
        .map(|i| {
            let priority = (i % 4) as i32;
            let burst = 1 + ((i * 37) % 120) as u32;
            let ram = 1 + ((i * 13) % 9) as u32;
            Process::new(format!("P{}", i), i as i32, priority, burst, ram)
        })
        .collect()
}

fn bench_dispatch_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    for size in [100usize, 1_000, 10_000] {
        let processes = workload(size);
        // Large enough that nothing is rejected for RAM
        let base = SimConfig::new().with_ram(u32::MAX, u32::MAX / 4);

        for mode in [DispatchMode::Sequential, DispatchMode::Parallel] {
            let simulation = Simulation::new(base.clone().with_dispatch(mode)).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), size),
                &processes,
                |b, processes| {
                    b.iter(|| black_box(simulation.run(processes.clone())));
                },
            );
        }
    }

    group.finish();
}

fn bench_round_robin_heavy(c: &mut Criterion) {
    let processes: Vec<Process> = (0..500)
        .map(|i| Process::new(format!("R{}", i), i, 2, 800, 1))
        .collect();
    let simulation = Simulation::new(SimConfig::default().with_ram(1 << 20, 512)).unwrap();

    c.bench_function("round_robin_q8_500x800", |b| {
        b.iter(|| black_box(simulation.run(processes.clone())));
    });
}

criterion_group!(benches, bench_dispatch_modes, bench_round_robin_heavy);
criterion_main!(benches);
