use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evolver::{
    evolution::{Engine, EngineOptions, FitnessFunction},
    individual::Individual,
    mutation::MutationOperator,
    rng::RandomNumberGenerator,
};

#[derive(Debug)]
struct AdjacentDifference;

impl FitnessFunction<i32> for AdjacentDifference {
    fn score(&self, genome: &[i32]) -> f64 {
        -genome
            .windows(2)
            .map(|pair| f64::from((pair[1] - pair[0]).abs()))
            .sum::<f64>()
    }
}

#[derive(Debug)]
struct SwapMutation;

impl MutationOperator<i32> for SwapMutation {
    fn mutate(&self, genome: &[i32], rate: f64, rng: &mut RandomNumberGenerator) -> Vec<i32> {
        let mut genome = genome.to_vec();
        if genome.len() > 1 && rng.gen_fraction() < rate {
            let a = rng.gen_range(0..genome.len());
            let b = rng.gen_range(0..genome.len());
            genome.swap(a, b);
        }
        genome
    }
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    for population_size in [10, 50, 200].iter() {
        group.bench_function(&format!("run_30_generations_pop_{}", population_size), |b| {
            b.iter(|| {
                let adam = Individual::new((1..=16).rev().collect());
                let options = EngineOptions::builder()
                    .population_size(*population_size)
                    .build();
                let mut engine = Engine::with_rng(
                    black_box(adam),
                    AdjacentDifference,
                    SwapMutation,
                    black_box(options),
                    RandomNumberGenerator::from_seed(42),
                )
                .unwrap();

                let champion = engine.run(30, |_champion| {}).unwrap();
                black_box(champion);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
